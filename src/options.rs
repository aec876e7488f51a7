//! Per-call extraction options.
//!
//! `ExtractionOptions` is handed to every strategy and to the title resolver.
//! It is never mutated during an extraction call.

/// Default minimum length (in characters) of accepted content.
pub const DEFAULT_MIN_CONTENT_LENGTH: usize = 100;

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use chapter_extract::ExtractionOptions;
///
/// let options = ExtractionOptions {
///     title_selector: Some("h1.chapter-title".to_string()),
///     min_content_length: 250,
///     ..ExtractionOptions::default()
/// };
/// assert!(options.clean_scripts);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOptions {
    /// CSS selector tried first by the title resolver.
    ///
    /// Default: `None`
    pub title_selector: Option<String>,

    /// Regex (one capturing group) applied to the full document markup
    /// when the title selector yields nothing.
    ///
    /// Default: `None`
    pub title_regex: Option<String>,

    /// Minimum length of accepted content, in characters.
    ///
    /// Shorter candidates are recorded as warnings and the next strategy is
    /// tried.
    ///
    /// Default: `100`
    pub min_content_length: usize,

    /// Keep `<img>` elements in sanitized content.
    ///
    /// Default: `true`
    pub preserve_images: bool,

    /// Remove `script`, `style` and `noscript` descendants from candidates.
    ///
    /// Default: `true`
    pub clean_scripts: bool,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            title_selector: None,
            title_regex: None,
            min_content_length: DEFAULT_MIN_CONTENT_LENGTH,
            preserve_images: true,
            clean_scripts: true,
        }
    }
}

impl ExtractionOptions {
    /// Title selector, treating an empty string as unset.
    #[must_use]
    pub fn title_selector(&self) -> Option<&str> {
        self.title_selector.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Title regex, treating an empty string as unset.
    #[must_use]
    pub fn title_regex(&self) -> Option<&str> {
        self.title_regex.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ExtractionOptions::default();

        assert!(opts.title_selector.is_none());
        assert!(opts.title_regex.is_none());
        assert_eq!(opts.min_content_length, 100);
        assert!(opts.preserve_images);
        assert!(opts.clean_scripts);
    }

    #[test]
    fn test_blank_title_settings_are_unset() {
        let opts = ExtractionOptions {
            title_selector: Some("   ".to_string()),
            title_regex: Some(String::new()),
            ..ExtractionOptions::default()
        };

        assert_eq!(opts.title_selector(), None);
        assert_eq!(opts.title_regex(), None);
    }

    #[test]
    fn test_custom_options() {
        let opts = ExtractionOptions {
            title_selector: Some("h1".to_string()),
            min_content_length: 10,
            clean_scripts: false,
            ..ExtractionOptions::default()
        };

        assert_eq!(opts.title_selector(), Some("h1"));
        assert_eq!(opts.min_content_length, 10);
        assert!(!opts.clean_scripts);
        assert!(opts.preserve_images);
    }
}
