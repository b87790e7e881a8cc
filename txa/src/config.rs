// src/config.rs
pub mod loader;

use clap::ValueEnum;
use serde::Deserialize;

pub use loader::{find_config, load_config, load_config_file, parse_config};

pub const CONFIG_FILE_NAME: &str = "txa.toml";

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Summary lines followed by the requested frequency tables
    #[default]
    Plain,
    /// The whole analysis as JSON
    Json,
}

/// Settings read from `txa.toml`. Every key is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Always print the word frequency table
    pub word_frequencies: bool,
    /// Always print the character frequency table
    pub character_frequencies: bool,
    /// Row limit for frequency tables
    pub top: Option<usize>,
    pub format: Option<OutputFormat>,
}
