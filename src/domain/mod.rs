// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and enums that define the core concepts
// of the corpus: language configurations, utterance records,
// and the dataset card metadata.
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO framework types (Burn stays in the data layer)
//   - Only plain structs, enums, and constants

// Per-language configuration and the static language table
pub mod config;

// One enumerated utterance: speaker, paths, text, audio bytes
pub mod record;

// Dataset card: description, license, citation, feature schema
pub mod info;
