//! Tests for data-row tokenization

use crate::app::services::canvass_parser::row_tokenizer::tokenize_row;

#[test]
fn test_label_and_trailing_votes() {
    let (precinct, votes) = tokenize_row("PRECINCT 12A   150   203", 2).unwrap();
    assert_eq!(precinct, "PRECINCT 12A");
    assert_eq!(votes, vec!["150".to_string(), "203".to_string()]);
}

#[test]
fn test_multi_word_label_rejoined_with_single_spaces() {
    let (precinct, votes) = tokenize_row("  EAST  HARRIS   BRIDGE    42  ", 1).unwrap();
    assert_eq!(precinct, "EAST HARRIS BRIDGE");
    assert_eq!(votes, vec!["42".to_string()]);
}

#[test]
fn test_exactly_candidate_count_tokens_leaves_empty_label() {
    let (precinct, votes) = tokenize_row("  150 203 ", 2).unwrap();
    assert_eq!(precinct, "");
    assert_eq!(votes.len(), 2);
}

#[test]
fn test_too_few_tokens_is_a_format_error() {
    assert!(tokenize_row("BADROW", 2).is_none());
    assert!(tokenize_row("", 1).is_none());
}
