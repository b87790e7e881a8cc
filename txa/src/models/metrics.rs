// src/models/metrics.rs
use serde::Serialize;

/// Scalar aggregates produced by a single analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub characters_with_spaces: usize,
    pub characters_without_spaces: usize,
    pub vowels_count: usize,
    pub consonants_count: usize,
    pub words_count: usize,
    pub unique_words_count: usize,
    pub sentence_count: usize,
    pub average_sentence_length: f64,
}

impl Metrics {
    /// Words per sentence rounded to two decimals, half away from zero.
    ///
    /// A `sentence_count` of zero yields `0.0`; the analyser never produces one.
    #[inline]
    #[must_use]
    pub fn calculate_average(words_count: usize, sentence_count: usize) -> f64 {
        if sentence_count == 0 {
            return 0.0;
        }
        round2(words_count as f64 / sentence_count as f64)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
