// src/core/analyser.rs
use tracing::debug;

use crate::core::character::build_character_frequencies;
use crate::core::classify::classify_characters;
use crate::core::sentence::extract_sentences;
use crate::core::word::{build_word_frequencies, count_words};
use crate::models::{Analysis, CharacterFrequencyTable, Metrics, WordFrequencyTable};

/// Runs every stage over `text` and returns the finished analysis.
///
/// # Examples
///
/// ```
/// let analysis = txa::analyse("Hello world. Hello again.");
/// assert_eq!(analysis.metrics.sentence_count, 2);
/// assert_eq!(analysis.metrics.words_count, 4);
/// assert_eq!(analysis.metrics.unique_words_count, 3);
/// ```
#[must_use]
pub fn analyse(text: &str) -> Analysis {
    analyse_lowered(text, &text.to_lowercase())
}

/// `lowered` must be `text.to_lowercase()`.
fn analyse_lowered(text: &str, lowered: &str) -> Analysis {
    // Boundaries need the original casing.
    let sentences = extract_sentences(text);
    let characters = classify_characters(lowered);
    let word_frequencies = build_word_frequencies(&sentences);
    let words = count_words(&word_frequencies);
    let character_frequencies = build_character_frequencies(lowered);

    let sentence_count = sentences.len().max(1);
    let metrics = Metrics {
        characters_with_spaces: characters.with_spaces,
        characters_without_spaces: characters.without_spaces,
        vowels_count: characters.vowels,
        consonants_count: characters.consonants,
        words_count: words.total,
        unique_words_count: words.unique,
        sentence_count,
        average_sentence_length: Metrics::calculate_average(words.total, sentence_count),
    };

    debug!(
        characters = metrics.characters_with_spaces,
        words = metrics.words_count,
        sentences = metrics.sentence_count,
        "analysed text"
    );

    Analysis {
        metrics,
        sentences,
        character_frequencies,
        word_frequencies,
    }
}

/// A document analysed once at construction; read-only afterwards.
#[derive(Debug, Clone)]
pub struct Analyser {
    document: String,
    analysis: Analysis,
}

impl Analyser {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let document = text.to_lowercase();
        let analysis = analyse_lowered(text, &document);
        Self { document, analysis }
    }

    /// The lower-cased source text.
    #[inline]
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[inline]
    #[must_use]
    pub const fn metrics(&self) -> &Metrics {
        &self.analysis.metrics
    }

    #[inline]
    #[must_use]
    pub fn sentences(&self) -> &[String] {
        &self.analysis.sentences
    }

    #[inline]
    #[must_use]
    pub const fn word_frequencies(&self) -> &WordFrequencyTable {
        &self.analysis.word_frequencies
    }

    #[inline]
    #[must_use]
    pub const fn character_frequencies(&self) -> &CharacterFrequencyTable {
        &self.analysis.character_frequencies
    }

    #[inline]
    #[must_use]
    pub const fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    #[inline]
    #[must_use]
    pub fn into_analysis(self) -> Analysis {
        self.analysis
    }
}
