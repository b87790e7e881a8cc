// tests/integration_tests/frequency_test.rs
use super::common::SAMPLE_TEXT;
use txa::analyse;
use txa::core::word::is_numeric_token;

#[test]
fn test_words_count_matches_non_numeric_table_entries() {
    for text in [SAMPLE_TEXT, "Room 101 and room 102.", "a b a b a", ""] {
        let analysis = analyse(text);
        let (total, unique) = analysis
            .word_frequencies
            .iter()
            .filter(|(word, _)| !is_numeric_token(word))
            .fold((0, 0), |(total, unique), (_, count)| (total + count, unique + 1));
        assert_eq!(analysis.metrics.words_count, total, "{text:?}");
        assert_eq!(analysis.metrics.unique_words_count, unique, "{text:?}");
    }
}

#[test]
fn test_character_frequencies_sum_to_letters() {
    let analysis = analyse(SAMPLE_TEXT);
    let lowered = SAMPLE_TEXT.to_lowercase();
    let non_letters = lowered
        .chars()
        .filter(|c| *c != ' ' && !c.is_alphabetic())
        .count();

    assert_eq!(analysis.character_frequencies.total(), 66);
    assert_eq!(
        analysis.character_frequencies.total(),
        analysis.metrics.characters_without_spaces - non_letters
    );
}

#[test]
fn test_character_frequencies_are_case_folded() {
    let analysis = analyse("AaA bB");
    assert_eq!(analysis.character_frequencies.get(&'a'), Some(3));
    assert_eq!(analysis.character_frequencies.get(&'b'), Some(2));
    assert_eq!(analysis.character_frequencies.get(&'A'), None);
}

#[test]
fn test_sorted_frequencies_descend() {
    let sorted = analyse(SAMPLE_TEXT).character_frequencies.sorted_by_count();
    let top: Vec<(char, usize)> = sorted.iter().take(4).map(|e| (e.value, e.count)).collect();
    assert_eq!(top, vec![('e', 10), ('a', 7), ('i', 7), ('t', 7)]);
    assert!(sorted.windows(2).all(|pair| pair[0].count >= pair[1].count));
}

#[test]
fn test_word_frequencies_sorted_with_ties_by_word() {
    let sorted = analyse(SAMPLE_TEXT).word_frequencies.sorted_by_count();
    let first: Vec<(&str, usize)> = sorted
        .iter()
        .take(3)
        .map(|e| (e.value.as_str(), e.count))
        .collect();
    assert_eq!(first, vec![("it", 2), ("the", 2), ("12", 1)]);
}
