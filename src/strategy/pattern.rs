//! Regex detection over the serialized document.

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use super::Strategy;
use crate::dom::{self, Document};
use crate::{Error, ExtractionOptions, Result};

/// Returns the first non-empty capture of an ordered list of patterns.
///
/// Patterns are matched case-insensitively with `.` matching newlines. A
/// pattern that does not compile is skipped, never fatal.
#[derive(Debug, Clone)]
pub struct PatternStrategy {
    patterns: Vec<String>,
    compiled: Vec<Regex>,
}

impl PatternStrategy {
    #[must_use]
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns.into_iter().map(Into::into).collect();
        let compiled = patterns
            .iter()
            .filter_map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .dot_matches_new_line(true)
                    .build()
                    .map_err(|err| warn!(%pattern, %err, "skipping invalid content pattern"))
                    .ok()
            })
            .collect();

        Self { patterns, compiled }
    }

    /// The patterns as configured, including any that failed to compile.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl Strategy for PatternStrategy {
    fn name(&self) -> &'static str {
        "xpath_regex"
    }

    fn extract(&self, doc: &Document, _options: &ExtractionOptions) -> Result<String> {
        if self.patterns.is_empty() {
            return Err(Error::Config("no regex patterns configured".to_string()));
        }

        let full_html = dom::document_html(doc);

        for re in &self.compiled {
            let Some(group) = re.captures(&full_html).and_then(|caps| caps.get(1)) else {
                continue;
            };
            let content = group.as_str().trim();
            if !content.is_empty() {
                debug!(pattern = re.as_str(), chars = dom::char_len(content), "pattern matched");
                return Ok(content.to_string());
            }
        }

        Err(Error::NoPatternMatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body><div id="story">
        Once upon a time.
    </div><div class="later">Later text</div></body></html>"#;

    #[test]
    fn empty_list_is_config_error() {
        let doc = dom::parse(PAGE);
        let strategy = PatternStrategy::new(Vec::<String>::new());
        assert!(matches!(
            strategy.extract(&doc, &ExtractionOptions::default()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn first_matching_pattern_wins() {
        let doc = dom::parse(PAGE);
        let strategy = PatternStrategy::new([
            r#"<div id="story">(.*?)</div>"#,
            r#"<div class="later">(.*?)</div>"#,
        ]);

        let content = strategy.extract(&doc, &ExtractionOptions::default()).unwrap();
        assert_eq!(content, "Once upon a time.");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let doc = dom::parse(PAGE);
        let strategy = PatternStrategy::new([r#"<DIV ID="STORY">(.*?)</DIV>"#]);
        assert_eq!(
            strategy.extract(&doc, &ExtractionOptions::default()).unwrap(),
            "Once upon a time."
        );
    }

    #[test]
    fn invalid_patterns_are_skipped() {
        let doc = dom::parse(PAGE);
        let strategy = PatternStrategy::new(["(unclosed", r#"class="later">(.*?)</div>"#]);

        assert_eq!(strategy.patterns().len(), 2);
        assert_eq!(
            strategy.extract(&doc, &ExtractionOptions::default()).unwrap(),
            "Later text"
        );
    }

    #[test]
    fn empty_capture_falls_through() {
        let doc = dom::parse(r#"<body><span class="a">   </span><span class="b">B</span></body>"#);
        let strategy = PatternStrategy::new([
            r#"<span class="a">(.*?)</span>"#,
            r#"<span class="b">(.*?)</span>"#,
        ]);
        assert_eq!(strategy.extract(&doc, &ExtractionOptions::default()).unwrap(), "B");
    }

    #[test]
    fn pattern_without_group_never_matches() {
        let doc = dom::parse(PAGE);
        let strategy = PatternStrategy::new(["story"]);
        assert_eq!(
            strategy.extract(&doc, &ExtractionOptions::default()),
            Err(Error::NoPatternMatch)
        );
    }
}
