// ============================================================
// Layer 3 — Language Configuration
// ============================================================
// The corpus ships in exactly two language variants. Each one
// is described by a LanguageConfig, and the full set lives in
// a static immutable table constructed at compile time —
// nothing ever mutates it at runtime.
//
// Lookup is strict: an unknown language code is a hard error,
// not an empty dataset. A typo in `--language` should fail
// loudly instead of enumerating nothing.

use anyhow::{bail, Result};
use serde::Serialize;

/// Metadata for one language variant of the corpus.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    /// Short language code used to select this configuration ("id", "tr")
    pub code: &'static str,

    /// Human-readable language name ("Indonesian", "Turkish")
    pub language: &'static str,

    /// Free-text description of this variant
    pub description: &'static str,

    /// Date label for the corpus release
    pub date: &'static str,
}

/// The full, immutable table of supported language configurations.
pub static LANGUAGES: &[LanguageConfig] = &[
    LanguageConfig {
        code:        "id",
        language:    "Indonesian",
        description: "Magic Data dataset for Indonesian",
        date:        "2021",
    },
    LanguageConfig {
        code:        "tr",
        language:    "Turkish",
        description: "Magic Data dataset for Turkish",
        date:        "2021",
    },
];

impl LanguageConfig {
    /// Look up a configuration by its language code.
    /// Returns None for codes outside the supported set.
    pub fn find(code: &str) -> Option<&'static LanguageConfig> {
        LANGUAGES.iter().find(|c| c.code == code)
    }

    /// Strict lookup: unknown codes are a configuration error.
    /// The error message lists the codes that would have worked.
    pub fn resolve(code: &str) -> Result<&'static LanguageConfig> {
        match Self::find(code) {
            Some(cfg) => Ok(cfg),
            None => {
                let known: Vec<&str> = LANGUAGES.iter().map(|c| c.code).collect();
                bail!(
                    "unknown language code '{}' (supported: {})",
                    code,
                    known.join(", ")
                );
            }
        }
    }
}
