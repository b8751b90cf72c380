// ============================================================
// Layer 2 — StatsUseCase
// ============================================================
// Enumerates the corpus and aggregates per-speaker counts:
// how many records each speaker contributed and how many audio
// bytes they amount to. Used by the `stats` command to sanity
// check a freshly unpacked corpus before training on it.
//
// Speakers appear in enumeration order, so the report is as
// deterministic as the enumeration itself.

use anyhow::Result;
use serde::Serialize;

use crate::data::enumerator::CorpusEnumerator;

// ─── Stats Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub root_dir:      String,
    pub language:      String,
    pub speaker_count: usize,
}

/// Aggregated totals for one speaker directory.
#[derive(Debug, Clone, Serialize)]
pub struct SpeakerStats {
    pub speaker_id:  String,
    pub records:     usize,
    pub audio_bytes: u64,
}

/// The full corpus report.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    pub language:    &'static str,
    pub speakers:    Vec<SpeakerStats>,
    pub records:     usize,
    pub audio_bytes: u64,
}

// ─── StatsUseCase ─────────────────────────────────────────────────────────────
pub struct StatsUseCase {
    config: StatsConfig,
}

impl StatsUseCase {
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    /// Enumerate the corpus and aggregate the report.
    /// Any enumeration failure propagates; there is no partial report.
    pub fn execute(&self) -> Result<CorpusStats> {
        let cfg = &self.config;

        let enumerator =
            CorpusEnumerator::new(&cfg.root_dir, &cfg.language, cfg.speaker_count)?;
        let language = enumerator.config().language;

        let mut speakers: Vec<SpeakerStats> = Vec::new();
        let mut records = 0usize;
        let mut audio_bytes = 0u64;

        for item in enumerator {
            let (_, record) = item?;
            let len = record.audio_len() as u64;

            // Records arrive grouped by speaker, so the current
            // speaker is always the last entry
            match speakers.last_mut() {
                Some(last) if last.speaker_id == record.speaker_id => {
                    last.records += 1;
                    last.audio_bytes += len;
                }
                _ => speakers.push(SpeakerStats {
                    speaker_id:  record.speaker_id.clone(),
                    records:     1,
                    audio_bytes: len,
                }),
            }

            records += 1;
            audio_bytes += len;
        }

        tracing::info!(
            "Corpus stats: {} records, {} bytes of audio across {} speakers",
            records,
            audio_bytes,
            speakers.len()
        );

        Ok(CorpusStats {
            language,
            speakers,
            records,
            audio_bytes,
        })
    }
}
