//! # chapter-extract
//!
//! Main-content extraction for chapter-style web pages.
//!
//! A page is handed to a [`ContentExtractor`], which runs an ordered chain of
//! detection strategies until one yields enough content. The accepted markup
//! is sanitized and returned together with the chapter title, the name of
//! the strategy that produced it and the warnings collected on the way.
//!
//! ## Quick Start
//!
//! ```rust
//! use chapter_extract::{extract, ExtractorConfig};
//!
//! let html = r#"<html><head><title>Chapter 1</title></head><body>
//!   <nav>Home | Index</nav>
//!   <article class="content">
//!     <p>It was a bright cold day in April, and the clocks were striking thirteen.</p>
//!     <p>Winston Smith slipped quickly through the glass doors of Victory Mansions.</p>
//!     <p>The hallway smelt of boiled cabbage and old rag mats.</p>
//!   </article>
//! </body></html>"#;
//!
//! let result = extract(html, &ExtractorConfig::default())?;
//! assert_eq!(result.title, "Chapter 1");
//! assert!(result.content.starts_with("<p>It was a bright cold day"));
//! # Ok::<(), chapter_extract::ExtractionFailure>(())
//! ```
//!
//! ## Strategies
//!
//! - **css_selector**: a configured selector, minus exclusion selectors
//! - **text_density**: the block with the best text-to-markup ratio
//! - **xpath_regex**: regex captures over the serialized page
//! - **dom_position**: well-known content containers
//! - **hybrid**: the above in priority order (the default)

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Content detection strategies.
pub mod strategy;

/// Markup sanitization.
pub mod sanitize;

/// Chapter title resolution.
pub mod title;

/// The strategy-chain orchestrator.
pub mod extractor;

/// TOML configuration.
pub mod config;

/// Word counts, reading time and image lists for extracted content.
pub mod stats;

// Public API - re-exports
pub use config::ExtractorConfig;
pub use error::{Error, Result, StrategyFailure};
pub use extractor::ContentExtractor;
pub use options::ExtractionOptions;
pub use result::{ExtractionFailure, ExtractionResult};
pub use sanitize::{sanitize, Sanitizer};
pub use strategy::{
    DensityStrategy, DetectionStrategy, HybridStrategy, PatternStrategy, SelectorStrategy,
    Strategy, StrategyKind, StructuralStrategy,
};
pub use title::{resolve_title, resolve_title_or};

/// Extracts the main content of an HTML page using `config`.
///
/// # Errors
///
/// Fails when the configuration names an unknown strategy or when every
/// configured strategy is exhausted.
pub fn extract(
    html: &str,
    config: &ExtractorConfig,
) -> std::result::Result<ExtractionResult, ExtractionFailure> {
    config.build_extractor()?.extract_html(html)
}

/// Extracts the main content of raw page bytes using `config`.
///
/// The character encoding is detected from a byte order mark or a
/// `<meta charset>` / `http-equiv` declaration, defaulting to UTF-8.
/// Invalid sequences are replaced with U+FFFD.
///
/// ```rust
/// use chapter_extract::{extract_bytes, ExtractorConfig};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><main><p>Caf\xE9 \
///     au lait, croissants and a long morning spent reading in the corner by the \
///     window while the rain kept falling.</p></main></body></html>";
/// let result = extract_bytes(html, &ExtractorConfig::default())?;
/// assert!(result.content.contains("Café"));
/// # Ok::<(), chapter_extract::ExtractionFailure>(())
/// ```
///
/// # Errors
///
/// See [`extract`].
pub fn extract_bytes(
    html: &[u8],
    config: &ExtractorConfig,
) -> std::result::Result<ExtractionResult, ExtractionFailure> {
    let extractor = config.build_extractor()?;
    let doc = dom::parse_bytes(html);
    extractor.extract(&doc)
}
