// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the on-disk corpus layout and the
// framework-facing dataset.
//
// The pipeline flows in this order:
//
//   <root>/01..20/script~ + *.wav
//       │
//       ▼
//   transcript        → fixed-width line parser (audio id + text)
//       │
//       ▼
//   CorpusEnumerator  → lazy walk over speakers, pairs each line
//       │               with its audio file, yields records
//       ▼
//   UtteranceDataset  → implements Burn's Dataset trait
//
// Each module is responsible for exactly one step.

/// Fixed-column transcript line parsing
pub mod transcript;

/// Lazy, ordered enumeration of utterance records
pub mod enumerator;

/// Burn Dataset adapter over the enumerated records
pub mod dataset;
