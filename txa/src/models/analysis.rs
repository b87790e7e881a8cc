// src/models/analysis.rs
use serde::Serialize;

use crate::models::{CharacterFrequencyTable, Metrics, WordFrequencyTable};

/// Everything the presentation layer needs from one analysed document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub metrics: Metrics,
    pub sentences: Vec<String>,
    pub character_frequencies: CharacterFrequencyTable,
    pub word_frequencies: WordFrequencyTable,
}
