//! Chapter title resolution.
//!
//! Precedence: explicit title selector, then title regex over the full
//! document markup, then a fixed list of common title selectors. Nothing
//! found is not an error; the caller decides on a synthetic title.

use regex::RegexBuilder;
use tracing::{debug, warn};

use crate::dom::{self, Document};
use crate::patterns::{HTML_TAG, TITLE_FALLBACK_SELECTORS, TITLE_MAX_LEN};
use crate::ExtractionOptions;

/// Resolve the chapter title, returning an empty string if nothing is found.
#[must_use]
pub fn resolve_title(doc: &Document, options: &ExtractionOptions) -> String {
    if let Some(selector) = options.title_selector() {
        if let Some(title) = title_from_selector(doc, selector) {
            debug!(selector, "title from configured selector");
            return title;
        }
    }

    if let Some(pattern) = options.title_regex() {
        if let Some(title) = title_from_regex(doc, pattern) {
            debug!(pattern, "title from configured regex");
            return title;
        }
    }

    for selector in TITLE_FALLBACK_SELECTORS {
        if let Some(title) = title_from_selector(doc, selector) {
            if dom::char_len(&title) < TITLE_MAX_LEN {
                debug!(selector, "title from fallback selector");
                return title;
            }
        }
    }

    String::new()
}

/// Resolve the chapter title, using `fallback` when nothing is found.
#[must_use]
pub fn resolve_title_or(doc: &Document, options: &ExtractionOptions, fallback: &str) -> String {
    let title = resolve_title(doc, options);
    if title.is_empty() {
        fallback.to_string()
    } else {
        title
    }
}

/// Trimmed text of the first element matching `selector`, if non-empty.
fn title_from_selector(doc: &Document, selector: &str) -> Option<String> {
    let found = match dom::select_first(doc, selector) {
        Ok(found) => found?,
        Err(err) => {
            warn!(selector, %err, "skipping invalid title selector");
            return None;
        }
    };

    let text = dom::text_content(&found).trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Tag-stripped first capture of `pattern` over the serialized document.
fn title_from_regex(doc: &Document, pattern: &str) -> Option<String> {
    let re = match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(err) => {
            warn!(pattern, %err, "skipping invalid title regex");
            return None;
        }
    };

    let html = dom::document_html(doc);
    let captured = re.captures(&html)?.get(1)?.as_str().trim();
    let text = HTML_TAG.replace_all(captured, "").trim().to_string();
    (!text.is_empty()).then_some(text)
}
