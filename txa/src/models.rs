// src/models.rs
pub mod analysis;
pub mod frequency;
pub mod metrics;

pub use analysis::Analysis;
pub use frequency::{CharacterFrequencyTable, FrequencyEntry, FrequencyTable, WordFrequencyTable};
pub use metrics::Metrics;
