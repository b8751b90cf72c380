// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to accomplish one user-facing
// goal per use case. No printing here (that's Layer 1) and no
// raw file formatting (that's Layer 6) — only coordination of
// the enumeration pipeline.

// Enumerate the corpus and write a JSONL manifest
pub mod export_use_case;

// Enumerate the corpus and aggregate per-speaker statistics
pub mod stats_use_case;
