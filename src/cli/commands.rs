// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `info`, `stats` and `export`
// and all their configurable flags.
//
// The corpus root directory is always an explicit flag — the
// adapter never assumes where the corpus lives.

use clap::{Args, Subcommand};

use crate::application::export_use_case::ExportConfig;
use crate::application::stats_use_case::StatsConfig;
use crate::data::enumerator::DEFAULT_SPEAKER_COUNT;

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the dataset card and language configurations
    Info(InfoArgs),

    /// Enumerate the corpus and report per-speaker statistics
    Stats(StatsArgs),

    /// Enumerate the corpus and write a JSONL manifest
    Export(ExportArgs),
}

/// Arguments for the `info` command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Show only this language configuration (default: all)
    #[arg(long)]
    pub language: Option<String>,
}

/// Arguments for the `stats` command
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Root directory of the unpacked corpus (contains 01/..NN/)
    #[arg(long)]
    pub root_dir: String,

    /// Language configuration to enumerate (id or tr)
    #[arg(long, default_value = "id")]
    pub language: String,

    /// Number of speaker directories to scan
    #[arg(long, default_value_t = DEFAULT_SPEAKER_COUNT)]
    pub speakers: usize,
}

/// Convert CLI StatsArgs into the application-layer StatsConfig.
/// The application layer never sees clap types.
impl From<StatsArgs> for StatsConfig {
    fn from(a: StatsArgs) -> Self {
        StatsConfig {
            root_dir:      a.root_dir,
            language:      a.language,
            speaker_count: a.speakers,
        }
    }
}

/// Arguments for the `export` command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Root directory of the unpacked corpus (contains 01/..NN/)
    #[arg(long)]
    pub root_dir: String,

    /// Language configuration to enumerate (id or tr)
    #[arg(long, default_value = "id")]
    pub language: String,

    /// Number of speaker directories to scan
    #[arg(long, default_value_t = DEFAULT_SPEAKER_COUNT)]
    pub speakers: usize,

    /// Path of the JSONL manifest to write
    #[arg(long, default_value = "manifest.jsonl")]
    pub output: String,
}

impl From<ExportArgs> for ExportConfig {
    fn from(a: ExportArgs) -> Self {
        ExportConfig {
            root_dir:      a.root_dir,
            language:      a.language,
            speaker_count: a.speakers,
            output:        a.output,
        }
    }
}
