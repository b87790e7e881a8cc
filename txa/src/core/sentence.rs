// src/core/sentence.rs
use tracing::trace;

const TERMINATOR: char = '.';

/// Splits raw text into lower-cased sentences.
///
/// Boundary detection runs on the original casing because a `.` only ends a
/// sentence when it is:
/// - the last character of the text
/// - directly followed by an upper-case letter
/// - the start of an ellipsis (`...`)
/// - followed by a space and an upper-case letter or a digit
///
/// A run of dots after a boundary is swallowed, and the character after it is
/// assumed to be the separating space and is not itself checked. Abbreviations
/// such as `Dr. Smith` and figures such as `costs 1. 5 more` are split the
/// same way as real sentences.
///
/// The result always holds at least one sentence; text without any boundary
/// (including the empty string) is returned whole.
#[must_use]
pub fn extract_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut cut = 0;
    let mut pos = 0;

    while pos < chars.len() {
        if chars.get(pos) != Some(&TERMINATOR) || !is_terminator(&chars, pos) {
            pos = pos.saturating_add(1);
            continue;
        }

        let sentence: String = chars.get(cut..pos).unwrap_or_default().iter().collect();
        trace!(position = pos, sentence = %sentence, "sentence boundary");
        sentences.push(sentence);

        let mut end = pos.saturating_add(1);
        while chars.get(end) == Some(&TERMINATOR) {
            end = end.saturating_add(1);
        }
        cut = end;
        pos = end.saturating_add(1);
    }

    if let Some(tail) = chars.get(cut..) {
        if tail.iter().any(|c| !c.is_whitespace()) {
            sentences.push(tail.iter().collect());
        }
    }

    if sentences.is_empty() {
        sentences.push(text.to_owned());
    }

    sentences.iter().map(|s| s.to_lowercase()).collect()
}

fn is_terminator(chars: &[char], pos: usize) -> bool {
    let at = |offset: usize| chars.get(pos.saturating_add(offset)).copied();

    match (at(1), at(2)) {
        (None, _) => true,
        (Some(next), _) if next.is_uppercase() => true,
        (Some(TERMINATOR), Some(TERMINATOR)) => true,
        (Some(' '), Some(after)) => after.is_uppercase() || after.is_ascii_digit(),
        _ => false,
    }
}
