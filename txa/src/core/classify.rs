// src/core/classify.rs
use unicode_normalization::UnicodeNormalization as _;
use unicode_normalization::char::is_combining_mark;

pub const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

// TODO: decide whether 'w' and 'x' belong here; counts currently leave them out.
pub const CONSONANTS: [char; 18] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'z',
];

/// Letters that merge with a preceding `i` into one vowel unit.
const DIPHTHONG_TAILS: [char; 3] = ['a', 'e', 'u'];

/// The outcome of classifying the character under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Whether one unit of the category was found.
    pub counted: bool,
    /// Characters the cursor moves past; always at least one.
    pub consumed: usize,
}

impl Step {
    const SKIP: Self = Self {
        counted: false,
        consumed: 1,
    };
    const SINGLE: Self = Self {
        counted: true,
        consumed: 1,
    };
    const MERGED: Self = Self {
        counted: true,
        consumed: 2,
    };
}

/// Character, vowel and consonant counts for a lower-cased document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterCounts {
    pub with_spaces: usize,
    pub without_spaces: usize,
    pub vowels: usize,
    pub consonants: usize,
}

/// Counts characters of `lowered` as-is and vowels/consonants on its
/// diacritic-free form.
#[must_use]
pub fn classify_characters(lowered: &str) -> CharacterCounts {
    let letters = strip_diacritics(lowered);

    CharacterCounts {
        with_spaces: lowered.chars().count(),
        without_spaces: lowered.chars().filter(|c| *c != ' ').count(),
        vowels: count_units(&letters, classify_vowel),
        consonants: count_units(&letters, classify_consonant),
    }
}

/// Decomposes to NFD and drops the combining marks, so `é` becomes `e`.
#[must_use]
pub fn strip_diacritics(text: &str) -> Vec<char> {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// An `i` followed by `a`, `e` or `u` is one vowel spanning both letters.
#[must_use]
pub fn classify_vowel(chars: &[char], pos: usize) -> Step {
    match (chars.get(pos), chars.get(pos.saturating_add(1))) {
        (Some('i'), Some(next)) if DIPHTHONG_TAILS.contains(next) => Step::MERGED,
        (Some(c), _) if VOWELS.contains(c) => Step::SINGLE,
        _ => Step::SKIP,
    }
}

/// A `c` followed by `h` is one consonant spanning both letters.
#[must_use]
pub fn classify_consonant(chars: &[char], pos: usize) -> Step {
    match (chars.get(pos), chars.get(pos.saturating_add(1))) {
        (Some('c'), Some('h')) => Step::MERGED,
        (Some(c), _) if CONSONANTS.contains(c) => Step::SINGLE,
        _ => Step::SKIP,
    }
}

fn count_units(chars: &[char], classify: fn(&[char], usize) -> Step) -> usize {
    let mut count: usize = 0;
    let mut pos = 0;

    while pos < chars.len() {
        let step = classify(chars, pos);
        if step.counted {
            count = count.saturating_add(1);
        }
        pos = pos.saturating_add(step.consumed.max(1));
    }

    count
}
