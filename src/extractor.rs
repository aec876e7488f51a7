//! The content extractor: drives the configured strategies in order.

use tracing::{debug, warn};

use crate::dom::{self, Document};
use crate::strategy::{DetectionStrategy, HybridStrategy, Strategy};
use crate::title::resolve_title;
use crate::{Error, ExtractionFailure, ExtractionOptions, ExtractionResult, Sanitizer};

/// Ordered strategies plus the options they run with.
///
/// An extractor holds no mutable state once built, so one instance can be
/// shared across threads and used on many documents.
///
/// # Example
///
/// ```rust
/// use chapter_extract::{ContentExtractor, ExtractionOptions, StructuralStrategy};
///
/// let extractor = ContentExtractor::new(
///     vec![StructuralStrategy::default().into()],
///     ExtractionOptions { min_content_length: 20, ..ExtractionOptions::default() },
/// );
/// let html = "<html><body><article><h1>One</h1><p>It was a dark and stormy night; \
///     the rain fell in torrents, except at occasional intervals.</p></article></body></html>";
///
/// let result = extractor.extract_html(html)?;
/// assert_eq!(result.strategy_used, "dom_position");
/// assert_eq!(result.title, "One");
/// # Ok::<(), chapter_extract::ExtractionFailure>(())
/// ```
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    strategies: Vec<DetectionStrategy>,
    options: ExtractionOptions,
}

impl Default for ContentExtractor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ContentExtractor {
    #[must_use]
    pub fn new(strategies: Vec<DetectionStrategy>, options: ExtractionOptions) -> Self {
        Self { strategies, options }
    }

    /// A single default hybrid strategy (density, then structural) with
    /// default options.
    #[must_use]
    pub fn with_defaults() -> Self {
        let hybrid = HybridStrategy::standard(None, &[], Default::default(), Default::default());
        Self::new(vec![hybrid.into()], ExtractionOptions::default())
    }

    /// Append a strategy to the end of the chain.
    #[must_use]
    pub fn add_strategy(mut self, strategy: impl Into<DetectionStrategy>) -> Self {
        self.strategies.push(strategy.into());
        self
    }

    /// A copy of this extractor using different options.
    #[must_use]
    pub fn with_options(&self, options: ExtractionOptions) -> Self {
        Self {
            strategies: self.strategies.clone(),
            options,
        }
    }

    #[must_use]
    pub fn strategies(&self) -> &[DetectionStrategy] {
        &self.strategies
    }

    #[must_use]
    pub fn options(&self) -> &ExtractionOptions {
        &self.options
    }

    /// Parse `html` and extract from it.
    ///
    /// # Errors
    ///
    /// See [`ContentExtractor::extract`].
    pub fn extract_html(&self, html: &str) -> Result<ExtractionResult, ExtractionFailure> {
        let doc = dom::parse(html);
        self.extract(&doc)
    }

    /// Try each strategy in order and return the first acceptable content.
    ///
    /// Failed strategies and candidates shorter than `min_content_length`
    /// are recorded as warnings and the next strategy is tried. The accepted
    /// content is sanitized; its length is checked after sanitization.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractionFailure`] carrying the last error and every
    /// accumulated warning once all strategies are exhausted, or a `Config`
    /// error when no strategies are configured.
    pub fn extract(&self, doc: &Document) -> Result<ExtractionResult, ExtractionFailure> {
        if self.strategies.is_empty() {
            return Err(ExtractionFailure::new(
                Error::Config("no extraction strategies configured".to_string()),
                Vec::new(),
            ));
        }

        let sanitizer = Sanitizer {
            preserve_images: self.options.preserve_images,
            ..Sanitizer::default()
        };
        let minimum = self.options.min_content_length;

        let mut warnings = Vec::new();
        let mut last_error = None;

        for strategy in &self.strategies {
            let name = strategy.name();
            debug!(strategy = name, "trying strategy");

            let raw = match strategy.extract(doc, &self.options) {
                Ok(raw) => raw,
                Err(err) => {
                    debug!(strategy = name, %err, "strategy failed");
                    warnings.push(format!("Strategy '{name}' failed: {err}"));
                    last_error = Some(err);
                    continue;
                }
            };

            let content = sanitizer.sanitize(&raw);
            let length = dom::char_len(&content);
            if length < minimum {
                let err = Error::ContentTooShort {
                    strategy: name.to_string(),
                    length,
                    minimum,
                };
                debug!(strategy = name, length, minimum, "content rejected");
                warnings.push(err.to_string());
                last_error = Some(err);
                continue;
            }

            debug!(strategy = name, length, "content accepted");
            return Ok(ExtractionResult {
                content,
                title: resolve_title(doc, &self.options),
                strategy_used: name.to_string(),
                warnings,
            });
        }

        warn!(attempted = self.strategies.len(), "every extraction strategy failed");
        let error = last_error.unwrap_or(Error::NoHeuristicMatch);
        Err(ExtractionFailure::new(error, warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{PatternStrategy, SelectorStrategy, StructuralStrategy};

    fn prose(n: usize) -> String {
        "the quick brown fox jumps ".repeat(n).trim().to_string()
    }

    #[test]
    fn short_candidate_is_rejected_and_chain_continues() {
        let html = format!(
            r#"<html><body><h1>Chapter 1</h1><div id="teaser">{}</div><article><p>{}</p></article></body></html>"#,
            "x".repeat(40),
            prose(10)
        );
        let extractor = ContentExtractor::new(
            vec![
                PatternStrategy::new([r#"<div id="teaser">(.*?)</div>"#]).into(),
                StructuralStrategy::default().into(),
            ],
            ExtractionOptions::default(),
        );

        let result = extractor.extract_html(&html).unwrap();

        assert_eq!(result.strategy_used, "dom_position");
        assert_eq!(result.title, "Chapter 1");
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("xpath_regex"));
        assert!(result.warnings[0].contains("too short"));
        assert!(dom::char_len(&result.content) >= 100);
    }

    #[test]
    fn failures_become_warnings_in_order() {
        let html = format!("<body><main><p>{}</p></main></body>", prose(10));
        let extractor = ContentExtractor::new(
            vec![SelectorStrategy::new("#missing", Vec::new()).into()],
            ExtractionOptions::default(),
        )
        .add_strategy(PatternStrategy::new(["<section>(.*?)</section>"]))
        .add_strategy(StructuralStrategy::default());

        let result = extractor.extract_html(&html).unwrap();

        assert_eq!(result.strategy_used, "dom_position");
        assert_eq!(
            result.warnings,
            [
                "Strategy 'css_selector' failed: selector '#missing' matched no elements",
                "Strategy 'xpath_regex' failed: no regex patterns matched",
            ]
        );
    }

    #[test]
    fn exhaustion_reports_last_error_and_all_warnings() {
        let html = format!("<body><div id=\"teaser\">{}</div></body>", "y".repeat(40));
        let extractor = ContentExtractor::new(
            vec![
                StructuralStrategy::default().into(),
                PatternStrategy::new([r#"<div id="teaser">(.*?)</div>"#]).into(),
            ],
            ExtractionOptions::default(),
        );

        let failure = extractor.extract_html(&html).unwrap_err();

        assert_eq!(failure.warnings.len(), 2);
        assert_eq!(
            failure.error,
            Error::ContentTooShort {
                strategy: "xpath_regex".to_string(),
                length: 40,
                minimum: 100,
            }
        );
    }

    #[test]
    fn empty_chain_is_config_error() {
        let extractor = ContentExtractor::new(Vec::new(), ExtractionOptions::default());
        let failure = extractor.extract_html("<p>x</p>").unwrap_err();
        assert!(matches!(failure.error, Error::Config(_)));
        assert!(failure.warnings.is_empty());
    }

    #[test]
    fn content_is_sanitized_before_length_check() {
        let html = format!(
            r#"<body><main><p class="lead" onclick="x()">{}</p><script>{}</script></main></body>"#,
            prose(3),
            "z".repeat(200)
        );
        let extractor = ContentExtractor::new(
            vec![StructuralStrategy::default().into()],
            ExtractionOptions {
                clean_scripts: false,
                ..ExtractionOptions::default()
            },
        );

        // Raw markup clears 100 characters only while the attributes are still there.
        let failure = extractor.extract_html(&html).unwrap_err();
        assert!(matches!(
            failure.error,
            Error::ContentTooShort { length: 84, minimum: 100, .. }
        ));

        let lenient = extractor.with_options(ExtractionOptions {
            min_content_length: 10,
            ..ExtractionOptions::default()
        });
        let result = lenient.extract_html(&format!(
            r#"<body><main><p class="lead" onclick="x()">{}</p><p> </p></main></body>"#,
            prose(5)
        ));
        assert_eq!(result.unwrap().content, format!("<p>{}</p>", prose(5)));
    }

    #[test]
    fn images_dropped_when_not_preserved() {
        let html = format!(
            r#"<body><main><p>{}</p><img src="cover.jpg"></main></body>"#,
            prose(10)
        );
        let extractor = ContentExtractor::new(
            vec![StructuralStrategy::default().into()],
            ExtractionOptions {
                preserve_images: false,
                ..ExtractionOptions::default()
            },
        );

        let result = extractor.extract_html(&html).unwrap();
        assert!(!result.content.contains("<img"));
    }

    #[test]
    fn defaults_use_single_hybrid() {
        let extractor = ContentExtractor::with_defaults();
        assert_eq!(extractor.strategies().len(), 1);
        assert_eq!(extractor.strategies()[0].name(), "hybrid");
        assert_eq!(extractor.options(), &ExtractionOptions::default());
    }
}
