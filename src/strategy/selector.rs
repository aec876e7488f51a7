//! Selector-based detection.

use tracing::debug;

use super::Strategy;
use crate::dom::{self, Document};
use crate::patterns::SCRIPT_SELECTOR;
use crate::{Error, ExtractionOptions, Result};

/// Extracts the first element matching a configured CSS selector.
///
/// Descendants matching any exclusion selector are removed from a clone of
/// the match before it is serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorStrategy {
    pub selector: String,
    pub exclude_selectors: Vec<String>,
}

impl SelectorStrategy {
    #[must_use]
    pub fn new(selector: impl Into<String>, exclude_selectors: Vec<String>) -> Self {
        Self {
            selector: selector.into(),
            exclude_selectors,
        }
    }
}

impl Strategy for SelectorStrategy {
    fn name(&self) -> &'static str {
        "css_selector"
    }

    fn extract(&self, doc: &Document, options: &ExtractionOptions) -> Result<String> {
        if self.selector.trim().is_empty() {
            return Err(Error::Config("no CSS selector configured".to_string()));
        }

        let exclusions = self
            .exclude_selectors
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| dom::compile(s))
            .collect::<Result<Vec<_>>>()?;

        let Some(found) = dom::select_first(doc, &self.selector)? else {
            return Err(Error::NoMatch {
                selector: self.selector.clone(),
            });
        };

        let detached = dom::clone_subtree(&found);
        let root = detached.root();
        dom::remove_matching(&root, &exclusions);
        if options.clean_scripts {
            dom::remove_selectors(&root, &[SCRIPT_SELECTOR]);
        }

        let markup = detached.inner_markup();
        debug!(selector = %self.selector, chars = dom::char_len(&markup), "selector matched");
        Ok(markup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div class="chapter" id="first">
            <p>First chapter body.</p>
            <div class="ads">Buy now</div>
            <script>track()</script>
          </div>
          <div class="chapter" id="second"><p>Second.</p></div>
        </body></html>
    "#;

    #[test]
    fn empty_selector_is_config_error() {
        let doc = dom::parse(PAGE);
        let result = SelectorStrategy::new("  ", Vec::new()).extract(&doc, &ExtractionOptions::default());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn invalid_selector_is_config_error() {
        let doc = dom::parse(PAGE);
        let result = SelectorStrategy::new("div[[", Vec::new()).extract(&doc, &ExtractionOptions::default());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn no_match_reports_selector() {
        let doc = dom::parse(PAGE);
        let result =
            SelectorStrategy::new("article.content", Vec::new()).extract(&doc, &ExtractionOptions::default());
        assert_eq!(
            result,
            Err(Error::NoMatch {
                selector: "article.content".to_string()
            })
        );
    }

    #[test]
    fn uses_earliest_match_and_applies_exclusions() {
        let doc = dom::parse(PAGE);
        let strategy = SelectorStrategy::new(".chapter", vec![".ads".to_string()]);

        let markup = strategy.extract(&doc, &ExtractionOptions::default()).unwrap();

        assert!(markup.starts_with("<p>First chapter body.</p>"));
        assert!(!markup.contains("Buy now"));
        assert!(!markup.contains("track()"));
        assert!(!markup.contains("Second."));
    }

    #[test]
    fn keeps_scripts_when_cleaning_disabled() {
        let doc = dom::parse(PAGE);
        let options = ExtractionOptions {
            clean_scripts: false,
            ..ExtractionOptions::default()
        };

        let markup = SelectorStrategy::new("#first", Vec::new()).extract(&doc, &options).unwrap();
        assert!(markup.contains("<script>track()</script>"));
    }

    #[test]
    fn table_row_match_keeps_cells() {
        let doc = dom::parse(
            r#"<table><tr class="row"><td>cell one</td><td>cell two</td></tr></table>"#,
        );

        let markup = SelectorStrategy::new("tr.row", Vec::new())
            .extract(&doc, &ExtractionOptions::default())
            .unwrap();
        assert_eq!(markup, "<td>cell one</td><td>cell two</td>");
    }

    #[test]
    fn original_document_is_untouched() {
        let doc = dom::parse(PAGE);
        let before = dom::document_html(&doc).to_string();

        let strategy = SelectorStrategy::new("#first", vec![".ads".to_string()]);
        strategy.extract(&doc, &ExtractionOptions::default()).unwrap();

        assert_eq!(dom::document_html(&doc).to_string(), before);
    }
}
