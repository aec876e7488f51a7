//! Markup sanitization for extracted content.
//!
//! Element and attribute removal run on the parsed tree. Comment removal,
//! void-element self-closing and whitespace collapsing run on the serialized
//! markup afterwards. The pipeline is idempotent: sanitizing already
//! sanitized markup returns it byte for byte.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{
    BR_RUN, HORIZONTAL_WHITESPACE, HTML_COMMENT, MULTIPLE_NEWLINES, PRE_LEADING_NEWLINES,
    SCRIPT_SELECTOR, VOID_TAG,
};

/// Configurable sanitizer.
///
/// # Example
///
/// ```rust
/// use chapter_extract::Sanitizer;
///
/// let sanitizer = Sanitizer {
///     preserve_images: false,
///     ..Sanitizer::default()
/// };
/// let clean = sanitizer.sanitize(r#"<p class="x" onclick="go()">Hi<img src="a.png"></p>"#);
/// assert_eq!(clean, "<p>Hi</p>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sanitizer {
    /// Keep `<img>` elements.
    ///
    /// Default: `true`
    pub preserve_images: bool,

    /// Keep `<a>` elements; when false they are unwrapped, keeping their text.
    ///
    /// Default: `true`
    pub preserve_links: bool,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            preserve_images: true,
            preserve_links: true,
        }
    }
}

impl Sanitizer {
    /// Sanitize a markup fragment.
    #[must_use]
    pub fn sanitize(&self, markup: &str) -> String {
        let markup = markup.replace("\r\n", "\n").replace('\r', "\n");

        let doc = dom::parse_fragment(&markup);
        let root = dom::fragment_root(&doc);

        dom::remove_selectors(&root, &[SCRIPT_SELECTOR]);
        if !self.preserve_images {
            dom::remove_selectors(&root, &["img"]);
        }
        if !self.preserve_links {
            root.strip_elements(&["a"]);
        }
        strip_presentation_attributes(&root);
        remove_empty_paragraphs(&root);

        let html = dom::inner_html(&root);
        normalize_serialized(&html)
    }
}

/// Sanitize with the default settings.
#[must_use]
pub fn sanitize(markup: &str) -> String {
    Sanitizer::default().sanitize(markup)
}

/// Event handlers, styling hooks and `data-*` attributes.
fn is_presentation_attribute(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    name.starts_with("on")
        || name.starts_with("data-")
        || matches!(name.as_str(), "style" | "class" | "id")
}

fn strip_presentation_attributes(root: &Selection) {
    for node in root.select("*").nodes() {
        let sel = Selection::from(*node);
        for (name, _) in dom::get_all_attributes(&sel) {
            if is_presentation_attribute(&name) {
                sel.remove_attr(&name);
            }
        }
    }
}

/// Remove `<p>` elements with no child elements and only whitespace text.
fn remove_empty_paragraphs(root: &Selection) {
    // Reverse document order, children before parents
    let paragraphs = root.select("p").nodes().to_vec();
    for node in paragraphs.into_iter().rev() {
        let sel = Selection::from(node);
        if sel.children().is_empty() && dom::text_content(&sel).trim().is_empty() {
            sel.remove();
        }
    }
}

fn normalize_serialized(html: &str) -> String {
    let html = HTML_COMMENT.replace_all(html, "");
    // Character references such as `&#13;` come back from the serializer as raw CRs
    let html = html.replace("\r\n", "\n").replace('\r', "\n");
    let html = VOID_TAG.replace_all(&html, "<${1}${2}/>");
    let html = BR_RUN.replace_all(&html, "<br/><br/>");
    let html = PRE_LEADING_NEWLINES.replace_all(&html, "${1}");
    let html = HORIZONTAL_WHITESPACE.replace_all(&html, " ");
    let html = MULTIPLE_NEWLINES.replace_all(&html, "\n\n");
    html.trim().to_string()
}
