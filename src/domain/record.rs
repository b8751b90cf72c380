// ============================================================
// Layer 3 — Utterance Record
// ============================================================
// One spoken sentence as yielded by the enumerator: the
// speaker directory it came from, the path of its audio file,
// the transcript text, and the raw audio bytes.
//
// The audio bytes pass through exactly as stored on disk
// (PCM WAV, mono). No decoding or resampling happens anywhere
// in this crate — the sampling rate is declared metadata only.

use serde::Serialize;
use std::path::PathBuf;

/// Declared sampling rate of the corpus audio, in Hz.
pub const SAMPLING_RATE: u32 = 16_000;

/// Raw audio content together with its originating path.
#[derive(Debug, Clone, Serialize)]
pub struct AudioData {
    /// Path of the .wav file the bytes were read from
    pub path: PathBuf,

    /// Complete byte content of the file, unmodified
    #[serde(skip_serializing)]
    pub bytes: Vec<u8>,

    /// Declared sampling rate (always 16 000 Hz for this corpus)
    pub sampling_rate: u32,
}

/// One enumerated utterance.
#[derive(Debug, Clone, Serialize)]
pub struct UtteranceRecord {
    /// Zero-padded two-digit speaker directory name ("01".."20")
    pub speaker_id: String,

    /// Path of the source audio file
    pub path: PathBuf,

    /// Transcript text, whitespace-trimmed
    pub sentence: String,

    /// Raw audio bytes plus originating path
    pub audio: AudioData,
}

impl UtteranceRecord {
    /// Size of the audio payload in bytes.
    pub fn audio_len(&self) -> usize {
        self.audio.bytes.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_len_reports_payload_size() {
        let record = UtteranceRecord {
            speaker_id: "01".to_string(),
            path:       PathBuf::from("01/000001.wav"),
            sentence:   "halo dunia".to_string(),
            audio: AudioData {
                path:          PathBuf::from("01/000001.wav"),
                bytes:         vec![0u8; 44],
                sampling_rate: SAMPLING_RATE,
            },
        };
        assert_eq!(record.audio_len(), 44);
    }

    #[test]
    fn test_serialization_omits_audio_bytes() {
        let record = UtteranceRecord {
            speaker_id: "01".to_string(),
            path:       PathBuf::from("01/000001.wav"),
            sentence:   "halo dunia".to_string(),
            audio: AudioData {
                path:          PathBuf::from("01/000001.wav"),
                bytes:         vec![1, 2, 3],
                sampling_rate: SAMPLING_RATE,
            },
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("halo dunia"));
        assert!(json.contains("sampling_rate"));
        // The raw payload must never be embedded in JSON output
        assert!(!json.contains("bytes"));
    }
}
