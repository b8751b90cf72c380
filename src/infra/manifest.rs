// ============================================================
// Layer 6 — Manifest Writer
// ============================================================
// Writes one JSON object per line (JSONL) for every emitted
// record. Audio bytes are never embedded — the manifest points
// at the .wav files instead, so it stays small and diffable.
//
// Example output rows:
//   {"index":0,"speaker_id":"01","path":"/data/titml/01/000001.wav","sentence":"halo dunia","sampling_rate":16000,"audio_bytes":94044}
//   {"index":1,"speaker_id":"01","path":"/data/titml/01/000002.wav","sentence":"selamat pagi","sampling_rate":16000,"audio_bytes":88120}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::domain::record::UtteranceRecord;

/// One manifest line describing an emitted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestRow {
    /// Enumeration index of the record (contiguous from 0)
    pub index: usize,

    /// Zero-padded speaker directory name
    pub speaker_id: String,

    /// Path of the source audio file
    pub path: PathBuf,

    /// Transcript text
    pub sentence: String,

    /// Declared sampling rate in Hz
    pub sampling_rate: u32,

    /// Size of the audio payload, for sanity checks downstream
    pub audio_bytes: usize,
}

impl ManifestRow {
    /// Build a manifest row from an emitted record.
    pub fn from_record(index: usize, record: &UtteranceRecord) -> Self {
        Self {
            index,
            speaker_id:    record.speaker_id.clone(),
            path:          record.path.clone(),
            sentence:      record.sentence.clone(),
            sampling_rate: record.audio.sampling_rate,
            audio_bytes:   record.audio_len(),
        }
    }
}

/// Streams manifest rows to a JSONL file.
pub struct ManifestWriter {
    path:   PathBuf,
    writer: BufWriter<File>,
    rows:   usize,
}

impl ManifestWriter {
    /// Create the output file (and any missing parent directory).
    /// An existing file at the same path is truncated.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("cannot create output directory '{}'", parent.display())
                })?;
            }
        }

        let file = File::create(&path)
            .with_context(|| format!("cannot create manifest '{}'", path.display()))?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            rows: 0,
        })
    }

    /// Append one row as a single JSON line.
    pub fn write_row(&mut self, row: &ManifestRow) -> Result<()> {
        serde_json::to_writer(&mut self.writer, row)?;
        writeln!(self.writer)?;
        self.rows += 1;
        Ok(())
    }

    /// Flush and report how many rows were written.
    pub fn finish(mut self) -> Result<usize> {
        self.writer
            .flush()
            .with_context(|| format!("cannot flush manifest '{}'", self.path.display()))?;

        tracing::debug!("Wrote {} manifest rows to '{}'", self.rows, self.path.display());
        Ok(self.rows)
    }

    /// Path of the manifest being written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
