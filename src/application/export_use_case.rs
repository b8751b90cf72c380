// ============================================================
// Layer 2 — ExportUseCase
// ============================================================
// Drives the full export pipeline in order:
//
//   Step 1: Build the corpus enumerator   (Layer 4 - data)
//   Step 2: Create the manifest writer    (Layer 6 - infra)
//   Step 3: Stream records into rows      (lazy, one at a time)
//
// Records are pulled one at a time, so audio bytes for only a
// single utterance are resident at any moment regardless of
// corpus size.

use anyhow::Result;

use crate::data::enumerator::CorpusEnumerator;
use crate::infra::manifest::{ManifestRow, ManifestWriter};

// ─── Export Configuration ────────────────────────────────────────────────────
// Everything the export run needs, decoupled from clap types.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub root_dir:      String,
    pub language:      String,
    pub speaker_count: usize,
    pub output:        String,
}

// ─── ExportUseCase ────────────────────────────────────────────────────────────
pub struct ExportUseCase {
    config: ExportConfig,
}

impl ExportUseCase {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Run the export end to end. Returns the number of rows
    /// written, which equals the number of emitted records.
    pub fn execute(&self) -> Result<usize> {
        let cfg = &self.config;

        // ── Step 1: Build the enumerator ─────────────────────────────────────
        // Validates the language code before any file is touched
        let enumerator =
            CorpusEnumerator::new(&cfg.root_dir, &cfg.language, cfg.speaker_count)?;
        let language = enumerator.config().language;

        // ── Step 2: Create the manifest writer ───────────────────────────────
        let mut writer = ManifestWriter::create(&cfg.output)?;
        tracing::info!(
            "Exporting {} manifest to '{}'",
            language,
            writer.path().display()
        );

        // ── Step 3: Stream records into manifest rows ────────────────────────
        // The first enumeration error aborts the export; a partial
        // manifest on disk is accompanied by a propagated error.
        for item in enumerator {
            let (index, record) = item?;
            writer.write_row(&ManifestRow::from_record(index, &record))?;
        }

        let rows = writer.finish()?;
        tracing::info!("Export complete: {} records", rows);
        Ok(rows)
    }
}
