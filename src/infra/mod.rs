// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting persistence that doesn't belong to any one
// business layer:
//
//   manifest.rs — JSONL manifest writer
//                 Serialises one row per emitted record so the
//                 corpus contents can be inspected, diffed, or
//                 fed to downstream tooling without re-reading
//                 any audio bytes.

/// JSONL manifest writing
pub mod manifest;
