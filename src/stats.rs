//! Statistics over extracted content markup.

use crate::dom::{self, Selection};
use crate::patterns::{HTML_TAG, WHITESPACE_NORMALIZE};

const WORDS_PER_MINUTE: usize = 200;

/// Tag-stripped, entity-decoded text with whitespace collapsed.
///
/// Tags become word boundaries, so adjacent block elements never run
/// together.
#[must_use]
pub fn plain_text(markup: &str) -> String {
    let spaced = HTML_TAG.replace_all(markup, " ");
    let doc = dom::parse_fragment(&spaced);
    let text = dom::text_content(&dom::fragment_root(&doc));
    WHITESPACE_NORMALIZE.replace_all(&text, " ").trim().to_string()
}

/// Number of whitespace-separated words in the text of `markup`.
#[must_use]
pub fn word_count(markup: &str) -> usize {
    plain_text(markup).split_whitespace().count()
}

/// Estimated reading time at 200 words per minute, rounded down, never zero.
#[must_use]
pub fn reading_time_minutes(markup: &str) -> usize {
    (word_count(markup) / WORDS_PER_MINUTE).max(1)
}

/// `src` values of `<img>` elements, in document order.
#[must_use]
pub fn image_sources(markup: &str) -> Vec<String> {
    let doc = dom::parse_fragment(markup);
    dom::fragment_root(&doc)
        .select("img")
        .nodes()
        .iter()
        .filter_map(|node| Selection::from(*node).attr("src"))
        .map(|src| src.trim().to_string())
        .filter(|src| !src.is_empty())
        .collect()
}
