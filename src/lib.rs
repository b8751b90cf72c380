//! Dataset adapter for the TITML speech corpus.
//!
//! Enumerates paired audio recordings and transcriptions for the
//! Indonesian and Turkish variants of the corpus from a fixed local
//! directory layout, and exposes them as a [Burn] dataset.
//!
//! The corpus is expected to be already unpacked on local storage:
//!
//! ```text
//! <root>/
//!   01/
//!     script~          # one utterance per line, fixed columns
//!     <audio_id>.wav   # PCM WAV, 16 kHz mono
//!   02/
//!   ...
//!   20/
//! ```
//!
//! Audio bytes pass through unmodified; this crate performs no
//! decoding or resampling.
//!
//! ```no_run
//! use titml_dataset::data::dataset::UtteranceDataset;
//! use burn::data::dataset::Dataset;
//!
//! let dataset = UtteranceDataset::load("/data/titml", "id", 20)?;
//! if let Some(record) = dataset.get(0) {
//!     println!("{}: {}", record.speaker_id, record.sentence);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! [Burn]: https://burn.dev

#![recursion_limit = "256"]

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod infra;
