//! Text helpers for the summary editors.
//!
//! Chapter summaries live as sentence lists on the wire but edit as one
//! blank-line-separated text block. The split keeps inner whitespace intact
//! and only drops paragraphs that are entirely blank.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Join stored sentences into the editable text block.
#[must_use]
pub fn join_paragraphs(paragraphs: &[String]) -> String {
    paragraphs.join("\n\n")
}

/// Split the edited block back into sentences, dropping blank paragraphs.
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Whitespace-delimited word count.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Character count as shown in the editor footer.
#[must_use]
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Number of non-blank paragraphs in the edited block.
#[must_use]
pub fn paragraph_count(text: &str) -> usize {
    text.split("\n\n").filter(|p| !p.trim().is_empty()).count()
}
