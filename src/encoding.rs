//! Charset sniffing for fetched pages.
//!
//! Collaborators usually hand over raw response bodies. Before a page can be
//! parsed into a [`Document`](crate::dom::Document) it is decoded to UTF-8
//! using, in order: a byte-order mark, a `<meta charset>` declaration, a
//! `<meta http-equiv="Content-Type">` declaration, and finally UTF-8.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Only this many leading bytes are searched for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("META_CHARSET regex")
});

#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("HTTP_EQUIV_CHARSET regex")
});

/// Determine the encoding of an HTML byte buffer.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);

    [&*META_CHARSET, &*HTTP_EQUIV_CHARSET]
        .into_iter()
        .filter_map(|re| re.captures(&head))
        .filter_map(|caps| caps.get(1))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to UTF-8.
///
/// Invalid sequences are replaced with U+FFFD rather than failing, and any
/// byte-order mark is stripped.
///
/// # Examples
///
/// ```
/// use chapter_extract::encoding::decode_html;
///
/// let page = b"<html><head><meta charset=\"windows-1252\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(page).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> Cow<'_, str> {
    let encoding = sniff_encoding(html);
    let (decoded, _had_errors) = encoding.decode_with_bom_removal(html);
    decoded
}
