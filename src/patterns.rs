//! Compiled regex patterns and selector lists used by the strategies,
//! the title resolver and the sanitizer.
//!
//! All patterns are compiled once using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Density Strategy
// =============================================================================

/// Tags considered as prose-bearing candidates by the density strategy.
pub const DENSITY_CANDIDATE_TAGS: &[&str] =
    &["div", "article", "section", "main", "p", "td", "blockquote"];

/// Substrings of the lowercased `class + " " + id` that disqualify a
/// density candidate.
pub const DENSITY_SKIP_TOKENS: &[&str] = &[
    "nav", "menu", "sidebar", "footer", "header", "ad", "comment", "share", "social",
];

// =============================================================================
// Structural Heuristic Strategy
// =============================================================================

/// Common content containers, tried in order.
pub const STRUCTURAL_CONTAINERS: &[&str] = &[
    "article.content",
    "article.post-content",
    "article.entry-content",
    "article.story-content",
    "article",
    "main.content",
    "main",
    ".chapter-content",
    ".story-content",
    ".post-content",
    ".entry-content",
    ".article-content",
    ".content-body",
    ".post-body",
    ".text-content",
    ".content",
    ".post",
    ".story",
    ".article",
    "#content",
    "#main-content",
    "#article-content",
    "#story-content",
    "#post-content",
    "[role='main']",
    "[role='article']",
    "div.content",
    "div.main",
];

/// Boilerplate removed from a structural match before serialization.
pub const STRUCTURAL_BOILERPLATE: &[&str] = &[
    "nav",
    "aside",
    "header",
    "footer",
    ".ads",
    ".ad",
    ".advertisement",
    ".sidebar",
    ".side-bar",
    ".comments",
    ".comment-section",
    ".share",
    ".social",
    ".sharing",
    ".related",
    ".recommended",
    ".navigation",
    ".breadcrumb",
    ".author-bio",
    ".author-info",
    "script",
    "style",
    "noscript",
];

/// Minimum trimmed markup length for a structural match to be accepted.
pub const STRUCTURAL_MIN_MARKUP: usize = 100;

// =============================================================================
// Shared selectors
// =============================================================================

/// Scripting and styling elements stripped when `clean_scripts` is set.
pub const SCRIPT_SELECTOR: &str = "script, style, noscript";

// =============================================================================
// Title Resolver
// =============================================================================

/// Fallback title selectors, tried in order.
pub const TITLE_FALLBACK_SELECTORS: &[&str] = &[
    "h1.title",
    "h1.chapter-title",
    "h1.entry-title",
    "h1.post-title",
    "h1",
    "h2.title",
    "h2.chapter-title",
    ".chapter-title",
    ".story-title",
    "title",
];

/// Fallback titles must be shorter than this many characters.
pub const TITLE_MAX_LEN: usize = 200;

// =============================================================================
// Markup Cleaning Patterns
// =============================================================================

/// Void elements rewritten to self-closed form.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Matches any tag, used for stripping markup from captured text.
pub static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("HTML_TAG regex"));

/// Matches HTML comments, including multi-line ones.
pub static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--[\s\S]*?-->").expect("HTML_COMMENT regex"));

/// Matches a void element start tag with its attributes, with or without a
/// trailing slash. Quoted attribute values may contain `>` or `/`.
pub static VOID_TAG: LazyLock<Regex> = LazyLock::new(|| {
    let tags = VOID_ELEMENTS.join("|");
    Regex::new(&format!(r"(?i)<({tags})({ATTRIBUTES})\s*/?>")).expect("VOID_TAG regex")
});

/// Zero or more attributes of a start tag; quoted values may contain `>`.
const ATTRIBUTES: &str = r#"(?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'>]+))?)*"#;

/// Matches three or more consecutive line breaks.
pub static BR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:<br\s*/?>\s*){3,}").expect("BR_RUN regex"));

/// Matches runs of horizontal whitespace.
pub static HORIZONTAL_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("HORIZONTAL_WHITESPACE regex"));

/// Matches three or more consecutive newlines, ignoring horizontal
/// whitespace on the lines in between.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t]*\n){2,}").expect("MULTIPLE_NEWLINES regex"));

/// Matches line feeds directly after a `pre`, `textarea` or `listing` start
/// tag. The parser drops the first one, so they cannot survive a reparse.
pub static PRE_LEADING_NEWLINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)(<(?:pre|textarea|listing){ATTRIBUTES}\s*>)\n+"))
        .expect("PRE_LEADING_NEWLINES regex")
});

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));
