// ============================================================
// Layer 4 — Corpus Enumerator
// ============================================================
// Walks the fixed on-disk layout of the corpus:
//
//   <root>/
//     01/
//       script~          one utterance per line, fixed columns
//       <audio_id>.wav   audio for one transcript line
//     02/
//     ...
//     20/
//
// and yields one record per transcript line whose audio file
// exists, as a lazy pull-based iterator. Nothing is read ahead
// of what the consumer asks for.
//
// Ordering is deterministic: speakers ascend numerically and
// lines follow file order, so repeated runs over the same tree
// yield identical records with identical indices.
//
// Failure asymmetry, deliberately preserved:
//   - a speaker directory without `script~` aborts enumeration
//   - a transcript line whose .wav is absent is skipped with
//     no record, no index, and no error
//   - any actual read failure aborts enumeration
//
// The transcript handle is scoped to its speaker: it is dropped
// (and the file closed) before the next speaker is opened, and
// likewise if the consumer stops iterating early.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::data::transcript::parse_line;
use crate::domain::config::LanguageConfig;
use crate::domain::record::{AudioData, UtteranceRecord, SAMPLING_RATE};

/// Transcript file name inside every speaker directory.
pub const TRANSCRIPT_FILE: &str = "script~";

/// Number of speaker directories in the corpus.
pub const DEFAULT_SPEAKER_COUNT: usize = 20;

/// An open transcript for one speaker directory.
struct SpeakerReader {
    speaker_id: String,
    dir:        PathBuf,
    transcript: PathBuf,
    lines:      Lines<BufReader<File>>,
    line_no:    usize,
}

impl SpeakerReader {
    fn open(root: &Path, speaker_id: String) -> Result<Self> {
        let dir = root.join(&speaker_id);
        let transcript = dir.join(TRANSCRIPT_FILE);

        let file = File::open(&transcript).with_context(|| {
            format!("cannot open transcript '{}'", transcript.display())
        })?;

        tracing::debug!("Opened transcript for speaker {}", speaker_id);

        Ok(Self {
            speaker_id,
            dir,
            transcript,
            lines: BufReader::new(file).lines(),
            line_no: 0,
        })
    }
}

/// Lazy, ordered iterator over the utterances of one language
/// variant of the corpus.
///
/// Yields `(index, record)` pairs where `index` starts at 0 and
/// counts emitted records only — skipped lines consume no index.
/// The first error ends iteration; no further items follow it.
pub struct CorpusEnumerator {
    root:          PathBuf,
    config:        &'static LanguageConfig,
    speaker_count: usize,
    next_speaker:  usize,
    current:       Option<SpeakerReader>,
    emitted:       usize,
    failed:        bool,
}

impl CorpusEnumerator {
    /// Create an enumerator for `language` rooted at `root`.
    ///
    /// The language code is validated up front: an unknown code
    /// is a configuration error here, not an empty iteration.
    pub fn new(
        root: impl Into<PathBuf>,
        language: &str,
        speaker_count: usize,
    ) -> Result<Self> {
        let config = LanguageConfig::resolve(language)?;
        let root = root.into();

        tracing::info!(
            "Enumerating {} corpus at '{}' ({} speakers)",
            config.language,
            root.display(),
            speaker_count
        );

        Ok(Self {
            root,
            config,
            speaker_count,
            next_speaker: 1,
            current: None,
            emitted: 0,
            failed: false,
        })
    }

    /// The language configuration this enumerator was built for.
    pub fn config(&self) -> &'static LanguageConfig {
        self.config
    }

    /// Advance to the next emitted record, skipping transcript
    /// lines whose audio file is absent.
    fn advance(&mut self) -> Result<Option<(usize, UtteranceRecord)>> {
        loop {
            // Take the open transcript, or open the next speaker's.
            // Put-back happens below once the line is handled.
            let mut reader = match self.current.take() {
                Some(reader) => reader,
                None => {
                    if self.next_speaker > self.speaker_count {
                        return Ok(None);
                    }
                    let speaker_id = format!("{:02}", self.next_speaker);
                    self.next_speaker += 1;
                    SpeakerReader::open(&self.root, speaker_id)?
                }
            };

            // Count the line up front so a read failure names it too
            reader.line_no += 1;
            let line = match reader.lines.next() {
                // Transcript exhausted — dropping the reader closes
                // the file before the next speaker is opened
                None => continue,
                Some(line) => line.with_context(|| {
                    format!(
                        "cannot read line {} of transcript '{}'",
                        reader.line_no,
                        reader.transcript.display()
                    )
                })?,
            };

            let parsed = parse_line(&line).with_context(|| {
                format!("{}:{}", reader.transcript.display(), reader.line_no)
            })?;

            let wav_path = reader.dir.join(format!("{}.wav", parsed.audio_id));
            if !wav_path.exists() {
                tracing::trace!(
                    "Skipping line {} of speaker {}: '{}' not found",
                    reader.line_no,
                    reader.speaker_id,
                    wav_path.display()
                );
                self.current = Some(reader);
                continue;
            }

            let bytes = fs::read(&wav_path).with_context(|| {
                format!("cannot read audio file '{}'", wav_path.display())
            })?;

            let record = UtteranceRecord {
                speaker_id: reader.speaker_id.clone(),
                path:       wav_path.clone(),
                sentence:   parsed.text,
                audio: AudioData {
                    path:          wav_path,
                    bytes,
                    sampling_rate: SAMPLING_RATE,
                },
            };

            let index = self.emitted;
            self.emitted += 1;
            self.current = Some(reader);
            return Ok(Some((index, record)));
        }
    }
}

impl Iterator for CorpusEnumerator {
    type Item = Result<(usize, UtteranceRecord)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.advance() {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => None,
            Err(err) => {
                self.failed = true;
                self.current = None;
                Some(Err(err))
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// A scratch corpus under the system temp directory.
    /// Removed when dropped so test runs leave nothing behind.
    struct ScratchCorpus {
        root: PathBuf,
    }

    impl ScratchCorpus {
        fn new(name: &str) -> Self {
            let root = std::env::temp_dir().join(format!(
                "titml-enumerator-{}-{}",
                std::process::id(),
                name
            ));
            // A leftover from an earlier aborted run would skew assertions
            let _ = fs::remove_dir_all(&root);
            fs::create_dir_all(&root).unwrap();
            Self { root }
        }

        fn add_speaker(&self, speaker_id: &str, script: &str) {
            let dir = self.root.join(speaker_id);
            fs::create_dir_all(&dir).unwrap();
            let mut f = File::create(dir.join(TRANSCRIPT_FILE)).unwrap();
            f.write_all(script.as_bytes()).unwrap();
        }

        fn add_wav(&self, speaker_id: &str, audio_id: &str, bytes: &[u8]) {
            let path = self.root.join(speaker_id).join(format!("{audio_id}.wav"));
            fs::write(path, bytes).unwrap();
        }
    }

    impl Drop for ScratchCorpus {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }

    #[test]
    fn test_single_utterance_end_to_end() {
        let corpus = ScratchCorpus::new("single");
        corpus.add_speaker("01", "01 000001 halo dunia\n");
        corpus.add_wav("01", "000001", b"RIFF-fake-wav");

        let records: Vec<_> = CorpusEnumerator::new(&corpus.root, "id", 1)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(records.len(), 1);
        let (index, record) = &records[0];
        assert_eq!(*index, 0);
        assert_eq!(record.speaker_id, "01");
        assert_eq!(record.sentence, "halo dunia");
        assert_eq!(record.path, corpus.root.join("01").join("000001.wav"));
        assert_eq!(record.audio.bytes, b"RIFF-fake-wav");
        assert_eq!(record.audio.sampling_rate, 16_000);
    }

    #[test]
    fn test_missing_audio_is_silently_skipped() {
        let corpus = ScratchCorpus::new("missing-audio");
        corpus.add_speaker("01", "01 000001 halo dunia\n");
        // No .wav written

        let records: Vec<_> = CorpusEnumerator::new(&corpus.root, "id", 1)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_skipped_lines_consume_no_index() {
        let corpus = ScratchCorpus::new("index-gaps");
        corpus.add_speaker(
            "01",
            "01 000001 satu\n01 000002 dua\n01 000003 tiga\n",
        );
        corpus.add_wav("01", "000001", b"a");
        // 000002 missing on purpose
        corpus.add_wav("01", "000003", b"c");

        let records: Vec<_> = CorpusEnumerator::new(&corpus.root, "id", 1)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();

        let indices: Vec<usize> = records.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(records[0].1.sentence, "satu");
        assert_eq!(records[1].1.sentence, "tiga");
    }

    #[test]
    fn test_speakers_iterate_in_ascending_order() {
        let corpus = ScratchCorpus::new("ordering");
        corpus.add_speaker("01", "01 000001 pertama\n");
        corpus.add_speaker("02", "02 000002 kedua\n");
        corpus.add_wav("01", "000001", b"a");
        corpus.add_wav("02", "000002", b"b");

        let records: Vec<_> = CorpusEnumerator::new(&corpus.root, "id", 2)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();

        let speakers: Vec<&str> =
            records.iter().map(|(_, r)| r.speaker_id.as_str()).collect();
        assert_eq!(speakers, vec!["01", "02"]);
    }

    #[test]
    fn test_enumeration_is_deterministic() {
        let corpus = ScratchCorpus::new("deterministic");
        corpus.add_speaker("01", "01 000001 satu\n01 000002 dua\n");
        corpus.add_wav("01", "000001", b"a");
        corpus.add_wav("01", "000002", b"b");

        let run = || -> Vec<(usize, String)> {
            CorpusEnumerator::new(&corpus.root, "id", 1)
                .unwrap()
                .map(|r| r.unwrap())
                .map(|(i, rec)| (i, rec.sentence))
                .collect()
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_round_trip_audio_bytes() {
        let corpus = ScratchCorpus::new("round-trip");
        corpus.add_speaker("01", "01 000001 halo\n");
        let payload: Vec<u8> = (0..=255).collect();
        corpus.add_wav("01", "000001", &payload);

        let records: Vec<_> = CorpusEnumerator::new(&corpus.root, "id", 1)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();

        let (_, record) = &records[0];
        let independent = fs::read(&record.path).unwrap();
        assert_eq!(record.audio.bytes, independent);
    }

    #[test]
    fn test_missing_transcript_is_fatal() {
        let corpus = ScratchCorpus::new("missing-transcript");
        // Speaker directory exists but holds no script~
        fs::create_dir_all(corpus.root.join("01")).unwrap();

        let mut enumerator = CorpusEnumerator::new(&corpus.root, "id", 1).unwrap();
        let first = enumerator.next().unwrap();
        assert!(first.is_err());
        // The iterator is fused after the failure
        assert!(enumerator.next().is_none());
    }

    #[test]
    fn test_unreadable_audio_is_fatal() {
        let corpus = ScratchCorpus::new("unreadable-audio");
        corpus.add_speaker("01", "01 000001 halo dunia\n");
        // A directory at the audio path: existence check passes
        // but reading the content fails
        fs::create_dir_all(corpus.root.join("01").join("000001.wav")).unwrap();

        let mut enumerator = CorpusEnumerator::new(&corpus.root, "id", 1).unwrap();
        let first = enumerator.next().unwrap();
        let msg = format!("{:#}", first.unwrap_err());
        assert!(msg.contains("cannot read audio file"));
        assert!(msg.contains("000001.wav"));
        // The iterator is fused after the failure
        assert!(enumerator.next().is_none());
    }

    #[test]
    fn test_transcript_read_error_names_file_and_line() {
        let corpus = ScratchCorpus::new("bad-encoding");
        corpus.add_speaker("01", "01 000001 halo\n");
        corpus.add_wav("01", "000001", b"a");
        // Append a line that is not valid UTF-8; reading it fails
        let transcript = corpus.root.join("01").join(TRANSCRIPT_FILE);
        let mut contents = fs::read(&transcript).unwrap();
        contents.extend_from_slice(b"\xff\xfe\n");
        fs::write(&transcript, contents).unwrap();

        let mut enumerator = CorpusEnumerator::new(&corpus.root, "id", 1).unwrap();
        assert_eq!(enumerator.next().unwrap().unwrap().0, 0);

        let err = enumerator.next().unwrap().unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("line 2"));
        assert!(msg.contains(TRANSCRIPT_FILE));
        assert!(enumerator.next().is_none());
    }

    #[test]
    fn test_malformed_line_is_fatal_with_location() {
        let corpus = ScratchCorpus::new("malformed");
        corpus.add_speaker("01", "01 000001 halo\nbad\n");
        corpus.add_wav("01", "000001", b"a");

        let mut enumerator = CorpusEnumerator::new(&corpus.root, "id", 1).unwrap();
        let first = enumerator.next().unwrap().unwrap();
        assert_eq!(first.0, 0);

        let err = enumerator.next().unwrap().unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains(TRANSCRIPT_FILE));
        assert!(msg.contains(":2"));
    }

    #[test]
    fn test_unknown_language_is_a_construction_error() {
        let corpus = ScratchCorpus::new("unknown-language");
        corpus.add_speaker("01", "01 000001 halo\n");

        assert!(CorpusEnumerator::new(&corpus.root, "xx", 1).is_err());
    }
}
