//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. The document handed in by a
//! collaborator is only ever read through these helpers; every removal happens
//! on a [`Detached`] clone produced by [`clone_subtree`] or on a fresh
//! document produced by [`parse_fragment`].

// Re-export core types for external use
pub use dom_query::{Document, Matcher, Selection};

pub use tendril::StrTendril;

use crate::encoding;
use crate::{Error, Result};

// === Parsing ===

/// Parse an HTML page into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Parse raw page bytes, decoding them to UTF-8 first.
#[must_use]
pub fn parse_bytes(html: &[u8]) -> Document {
    let decoded = encoding::decode_html(html);
    Document::from(&*decoded)
}

/// Parse a markup fragment so that all of it lands inside `<body>`.
///
/// Leading `<meta>`, `<link>` or `<script>` elements would otherwise be
/// hoisted into `<head>` by the HTML parser.
#[must_use]
pub fn parse_fragment(markup: &str) -> Document {
    Document::from(format!("<body>{markup}</body>"))
}

/// The container holding the nodes of a document built by [`parse_fragment`].
#[must_use]
pub fn fragment_root(doc: &Document) -> Selection<'_> {
    doc.select("body").first()
}

// === Selectors ===

/// Compile a CSS selector, reporting parse failures as configuration errors.
pub fn compile(selector: &str) -> Result<Matcher> {
    let trimmed = selector.trim();
    if trimmed.is_empty() {
        return Err(Error::Config("empty CSS selector".to_string()));
    }
    Matcher::new(trimmed).map_err(|_| Error::Config(format!("invalid CSS selector '{trimmed}'")))
}

/// Query all elements matching `selector`, in document order.
///
/// Unlike `Document::select`, an invalid selector is an error instead of a
/// panic.
pub fn select_all<'a>(doc: &'a Document, selector: &str) -> Result<Selection<'a>> {
    let matcher = compile(selector)?;
    Ok(doc.select_matcher(&matcher))
}

/// First element (in document order) matching `selector`, if any.
pub fn select_first<'a>(doc: &'a Document, selector: &str) -> Result<Option<Selection<'a>>> {
    let matches = select_all(doc, selector)?;
    Ok(matches.exists().then(|| matches.first()))
}

/// Remove every descendant of `root` matching any of `matchers`.
pub fn remove_matching(root: &Selection, matchers: &[Matcher]) {
    for matcher in matchers {
        root.select_matcher(matcher).remove();
    }
}

/// Remove every descendant of `root` matching any of the static `selectors`.
///
/// Selectors that fail to compile are skipped.
pub fn remove_selectors(root: &Selection, selectors: &[&str]) {
    for selector in selectors {
        if let Ok(matcher) = compile(selector) {
            root.select_matcher(&matcher).remove();
        }
    }
}

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get all attributes as key-value pairs
///
/// Returns empty vector if node has no attributes or if selection is empty.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Serialize the whole document.
#[inline]
#[must_use]
pub fn document_html(doc: &Document) -> StrTendril {
    doc.html()
}

/// Length in characters, the unit every threshold in this crate is measured in.
#[inline]
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

// === Cloning ===

/// An element copied into its own document.
///
/// Mutating a `Detached` subtree never touches the document it came from.
pub struct Detached {
    doc: Document,
    tag: String,
}

impl Detached {
    /// The cloned element inside the detached document.
    ///
    /// Falls back to the `<body>` holding the clone if the parser moved the
    /// element out of place.
    #[must_use]
    pub fn root(&self) -> Selection<'_> {
        match self.tag.as_str() {
            "html" | "head" | "body" => self.doc.select(&self.tag).first(),
            tag if table_wrapper(tag).is_some() => {
                let body = fragment_root(&self.doc);
                let found = body.select(tag).first();
                if found.exists() {
                    found
                } else {
                    body
                }
            }
            _ => {
                let body = fragment_root(&self.doc);
                let first = body.children().first();
                if tag_name(&first).as_deref() == Some(self.tag.as_str()) {
                    first
                } else {
                    body
                }
            }
        }
    }

    /// Trimmed inner markup of the cloned element.
    #[must_use]
    pub fn inner_markup(&self) -> String {
        inner_html(&self.root()).trim().to_string()
    }
}

/// Markup that puts a table part in a context where the parser keeps it.
///
/// Outside a table, `tr`, `td` and friends are dropped and only their
/// content survives.
fn table_wrapper(tag: &str) -> Option<(&'static str, &'static str)> {
    match tag {
        "thead" | "tbody" | "tfoot" | "caption" | "colgroup" => Some(("<table>", "</table>")),
        "col" => Some(("<table><colgroup>", "</colgroup></table>")),
        "tr" => Some(("<table><tbody>", "</tbody></table>")),
        "td" | "th" => Some(("<table><tbody><tr>", "</tr></tbody></table>")),
        _ => None,
    }
}

/// Deep-clone the first element of `sel` into a new document.
#[must_use]
pub fn clone_subtree(sel: &Selection) -> Detached {
    let element = sel.first();
    let tag = tag_name(&element).unwrap_or_default();
    let markup = outer_html(&element);

    let doc = match tag.as_str() {
        "html" | "head" | "body" => Document::from(markup),
        other => match table_wrapper(other) {
            Some((open, close)) => parse_fragment(&format!("{open}{markup}{close}")),
            None => parse_fragment(&markup),
        },
    };

    Detached { doc, tag }
}
