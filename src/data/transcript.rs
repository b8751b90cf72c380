// ============================================================
// Layer 4 — Transcript Line Parser
// ============================================================
// Each `script~` file holds one utterance per line in a fixed
// column layout (0-indexed character positions):
//
//   columns [0, 2)  speaker prefix (ignored)
//   columns [2, 8)  6-character audio identifier
//   column  8       separator (ignored)
//   columns [9..]   transcript text
//
// Example line:
//   "01 000001 halo dunia"
//    └┬┘└─┬──┘ └───┬────┘
//   prefix id     text
//
// Positions are character positions, not byte offsets — the
// text portion may contain multi-byte UTF-8, so slicing by
// byte index could split a code point.
//
// A line too short to hold the identifier columns is a parse
// error; the identifier would otherwise come out truncated and
// silently pair with the wrong (or no) audio file.

use anyhow::{bail, Result};

/// First character column of the audio identifier.
const AUDIO_ID_START: usize = 2;

/// Number of characters in the audio identifier.
const AUDIO_ID_LEN: usize = 6;

/// First character column of the transcript text.
const TEXT_START: usize = 9;

/// One parsed transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    /// The 6-character audio identifier; `<audio_id>.wav` is the
    /// expected audio file name in the same speaker directory
    pub audio_id: String,

    /// Transcript text with surrounding whitespace trimmed.
    /// May be empty for a line that carries an id but no text.
    pub text: String,
}

/// Parse one fixed-column transcript line.
///
/// Fails if the line is shorter than the identifier columns.
/// A line that ends right after the identifier yields an empty
/// text field rather than an error.
pub fn parse_line(line: &str) -> Result<TranscriptLine> {
    let chars: Vec<char> = line.chars().collect();

    if chars.len() < AUDIO_ID_START + AUDIO_ID_LEN {
        bail!(
            "transcript line too short for the audio id columns \
             ({} characters, need at least {}): '{}'",
            chars.len(),
            AUDIO_ID_START + AUDIO_ID_LEN,
            line.trim_end()
        );
    }

    let audio_id: String = chars[AUDIO_ID_START..AUDIO_ID_START + AUDIO_ID_LEN]
        .iter()
        .collect();

    let text: String = if chars.len() > TEXT_START {
        chars[TEXT_START..].iter().collect::<String>().trim().to_string()
    } else {
        String::new()
    };

    Ok(TranscriptLine { audio_id, text })
}
