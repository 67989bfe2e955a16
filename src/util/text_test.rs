use super::*;

// =============================================================
// Paragraph join/split
// =============================================================

#[test]
fn join_separates_with_blank_lines() {
    let sentences = vec!["First.".to_owned(), "Second.".to_owned()];
    assert_eq!(join_paragraphs(&sentences), "First.\n\nSecond.");
}

#[test]
fn join_of_empty_list_is_empty() {
    assert_eq!(join_paragraphs(&[]), "");
}

#[test]
fn split_drops_blank_paragraphs() {
    let text = "First.\n\n\n\n  \n\nSecond.";
    assert_eq!(split_paragraphs(text), ["First.", "Second."]);
}

#[test]
fn split_keeps_inner_whitespace() {
    let text = "Line one\nstill paragraph one.\n\nParagraph two.";
    let parts = split_paragraphs(text);
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0], "Line one\nstill paragraph one.");
}

#[test]
fn split_of_blank_text_is_empty() {
    assert!(split_paragraphs("   \n\n  ").is_empty());
}

#[test]
fn join_then_split_round_trips_clean_sentences() {
    let sentences = vec!["One.".to_owned(), "Two.".to_owned(), "Three.".to_owned()];
    assert_eq!(split_paragraphs(&join_paragraphs(&sentences)), sentences);
}

// =============================================================
// Counters
// =============================================================

#[test]
fn word_count_splits_on_any_whitespace() {
    assert_eq!(word_count("one two\tthree\nfour"), 4);
    assert_eq!(word_count("   "), 0);
}

#[test]
fn char_count_counts_scalars() {
    assert_eq!(char_count("abc"), 3);
    assert_eq!(char_count("héö"), 3);
}

#[test]
fn paragraph_count_matches_split() {
    let text = "A.\n\n\n\nB.\n\nC.";
    assert_eq!(paragraph_count(text), 3);
    assert_eq!(paragraph_count(""), 0);
}
