// src/core/word.rs
use crate::models::WordFrequencyTable;

/// Characters that separate words inside a sentence.
pub const WORD_DELIMITERS: [char; 8] = [' ', ',', '\'', '.', '"', '(', ')', '-'];

/// Word totals derived from a frequency table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordCounts {
    pub total: usize,
    pub unique: usize,
}

/// Splits every sentence on [`WORD_DELIMITERS`] and counts the fragments.
///
/// Empty and whitespace-only fragments are dropped. Fragments are stored as
/// they appear, so sentences are expected to be lower-cased already.
pub fn build_word_frequencies<S: AsRef<str>>(sentences: &[S]) -> WordFrequencyTable {
    sentences
        .iter()
        .flat_map(|sentence| sentence.as_ref().split(WORD_DELIMITERS))
        .filter(|fragment| !fragment.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

/// An entry holding any digit is a number, not a word.
#[inline]
#[must_use]
pub fn is_numeric_token(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
}

/// Totals over the table, leaving out numeric tokens.
#[must_use]
pub fn count_words(frequencies: &WordFrequencyTable) -> WordCounts {
    frequencies
        .iter()
        .filter(|(word, _)| !is_numeric_token(word))
        .fold(WordCounts::default(), |counts, (_, count)| WordCounts {
            total: counts.total.saturating_add(count),
            unique: counts.unique.saturating_add(1),
        })
}
