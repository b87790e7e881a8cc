// src/core/character.rs
use crate::models::CharacterFrequencyTable;

/// Counts every alphabetic character of the lower-cased text.
#[must_use]
pub fn build_character_frequencies(lowered: &str) -> CharacterFrequencyTable {
    lowered.chars().filter(|c| c.is_alphabetic()).collect()
}
