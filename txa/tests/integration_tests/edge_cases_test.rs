// tests/integration_tests/edge_cases_test.rs
use txa::analyse;

#[test]
fn test_empty_text() {
    let analysis = analyse("");
    assert_eq!(analysis.metrics.characters_with_spaces, 0);
    assert_eq!(analysis.metrics.words_count, 0);
    assert_eq!(analysis.metrics.sentence_count, 1);
    assert_eq!(analysis.metrics.average_sentence_length, 0.0);
    assert_eq!(analysis.sentences, vec![String::new()]);
    assert!(analysis.word_frequencies.is_empty());
    assert!(analysis.character_frequencies.is_empty());
}

#[test]
fn test_whitespace_only_text() {
    let metrics = analyse("   ").metrics;
    assert_eq!(metrics.characters_with_spaces, 3);
    assert_eq!(metrics.characters_without_spaces, 0);
    assert_eq!(metrics.sentence_count, 1);
    assert_eq!(metrics.words_count, 0);
}

#[test]
fn test_only_periods() {
    let metrics = analyse("...").metrics;
    assert_eq!(metrics.sentence_count, 1);
    assert_eq!(metrics.words_count, 0);
}

#[test]
fn test_sentence_count_at_least_one() {
    for text in ["a", "no period here", ".", "x.y.z", "Dr. Who?", "3.5 apples"] {
        assert!(analyse(text).metrics.sentence_count >= 1, "{text:?}");
    }
}

#[test]
fn test_spaces_bound_character_counts() {
    for text in ["no-spaces", "with some spaces", "tab\tand space"] {
        let metrics = analyse(text).metrics;
        let has_spaces = text.contains(' ');
        assert!(metrics.characters_without_spaces <= metrics.characters_with_spaces);
        assert_eq!(
            metrics.characters_without_spaces == metrics.characters_with_spaces,
            !has_spaces,
            "{text:?}"
        );
    }
}

#[test]
fn test_only_numbers() {
    let analysis = analyse("1 2 3.");
    assert_eq!(analysis.metrics.words_count, 0);
    assert_eq!(analysis.metrics.unique_words_count, 0);
    assert_eq!(analysis.word_frequencies.len(), 3);
}

#[test]
fn test_decimal_after_space_splits_sentence() {
    let analysis = analyse("It cost 3. 50 people paid.");
    assert_eq!(analysis.sentences, vec!["it cost 3", " 50 people paid"]);
}
