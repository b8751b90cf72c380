// ============================================================
// Layer 4 — Burn Dataset Adapter
// ============================================================
// Materializes the enumerated records and exposes them through
// Burn's Dataset trait so the framework's DataLoader can call
// .get(index) and .len() on the corpus.
//
// The enumerator itself is lazy; this adapter is the point
// where laziness ends, because the framework needs random
// access. Loading either returns the complete, correctly
// ordered record set or fails outright — there is no partial
// dataset.

use anyhow::Result;
use burn::data::dataset::Dataset;

use crate::data::enumerator::CorpusEnumerator;
use crate::domain::record::UtteranceRecord;

/// The full record sequence of one language variant, in
/// enumeration order. Record `i` carries enumeration index `i`.
pub struct UtteranceDataset {
    records: Vec<UtteranceRecord>,
}

impl UtteranceDataset {
    /// Enumerate the corpus at `root` and collect every record.
    pub fn load(
        root: impl Into<std::path::PathBuf>,
        language: &str,
        speaker_count: usize,
    ) -> Result<Self> {
        let enumerator = CorpusEnumerator::new(root, language, speaker_count)?;
        let records: Vec<UtteranceRecord> = enumerator
            .map(|item| item.map(|(_, record)| record))
            .collect::<Result<_>>()?;

        tracing::info!("Loaded {} utterance records", records.len());
        Ok(Self { records })
    }

    /// Wrap an already-enumerated record sequence.
    pub fn new(records: Vec<UtteranceRecord>) -> Self {
        Self { records }
    }
}

impl Dataset<UtteranceRecord> for UtteranceDataset {
    fn get(&self, index: usize) -> Option<UtteranceRecord> {
        self.records.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
