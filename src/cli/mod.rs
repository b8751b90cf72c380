// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with `clap`.
// All enumeration work is delegated to Layer 2 (application);
// this layer only routes commands and renders results.
//
// Three commands are supported:
//   1. `info`   — prints the dataset card and configurations
//   2. `stats`  — per-speaker record and byte counts
//   3. `export` — writes a JSONL manifest of the corpus

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExportArgs, InfoArgs, StatsArgs};

use crate::domain::config::{LanguageConfig, LANGUAGES};
use crate::domain::info::DatasetInfo;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "titml-dataset",
    version = "0.1.0",
    about = "Enumerate the TITML speech corpus and expose it as a dataset."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Info(args)   => Self::run_info(args),
            Commands::Stats(args)  => Self::run_stats(args),
            Commands::Export(args) => Self::run_export(args),
        }
    }

    /// Handles the `info` command: renders the dataset card and
    /// either one or all language configurations.
    fn run_info(args: InfoArgs) -> Result<()> {
        let info = DatasetInfo::new();

        println!("TITML speech corpus");
        println!("===================");
        println!("\n{}\n", info.description);
        println!("Homepage: {}", info.homepage);
        println!("License:  {}", info.license);
        println!("\nCitation:\n{}\n", info.citation);

        println!("Features:");
        for feature in &info.features {
            println!("  {:<12} {:?}", feature.name, feature.kind);
        }

        println!("\nSplits:");
        for split in &info.splits {
            println!("  {}", split.as_str());
        }

        println!("\nConfigurations:");
        match args.language {
            // A specific code must resolve; unknown codes are an error
            Some(code) => print_config(LanguageConfig::resolve(&code)?),
            None => {
                for config in LANGUAGES {
                    print_config(config);
                }
            }
        }

        Ok(())
    }

    /// Handles the `stats` command: runs the aggregation use case
    /// and prints one table row per speaker.
    fn run_stats(args: StatsArgs) -> Result<()> {
        use crate::application::stats_use_case::StatsUseCase;

        let stats = StatsUseCase::new(args.into()).execute()?;

        println!("Language: {}", stats.language);
        println!("{:<10} {:>8} {:>14}", "speaker", "records", "audio bytes");
        for speaker in &stats.speakers {
            println!(
                "{:<10} {:>8} {:>14}",
                speaker.speaker_id, speaker.records, speaker.audio_bytes
            );
        }
        println!(
            "{:<10} {:>8} {:>14}",
            "total", stats.records, stats.audio_bytes
        );

        Ok(())
    }

    /// Handles the `export` command: runs the manifest export use
    /// case and reports how many rows were written.
    fn run_export(args: ExportArgs) -> Result<()> {
        use crate::application::export_use_case::ExportUseCase;

        let output = args.output.clone();
        let rows = ExportUseCase::new(args.into()).execute()?;

        println!("Wrote {} records to {}", rows, output);
        Ok(())
    }
}

/// Render one language configuration.
fn print_config(config: &LanguageConfig) {
    println!(
        "  {:<4} {:<12} {} ({})",
        config.code, config.language, config.description, config.date
    );
}
