// src/lib.rs
//! Descriptive statistics for a block of text: characters, vowels,
//! consonants, words, sentences and frequency tables.

pub mod cli;
pub mod config;
pub mod core;
pub mod input;
pub mod logging;
pub mod models;
pub mod report;

pub use cli::{Args, normalize_legacy_switches, run, run_with_writer};
pub use config::{CONFIG_FILE_NAME, Config, OutputFormat};
pub use crate::core::analyser::{Analyser, analyse};
pub use models::{Analysis, CharacterFrequencyTable, FrequencyEntry, Metrics, WordFrequencyTable};
pub use report::{ReportOptions, write_report};
