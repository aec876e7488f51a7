//! Extractor configuration loaded from TOML.
//!
//! Every key is optional; missing keys fall back to the defaults below.
//! Only TOML is read. A YAML file with the same keys must be rewritten in
//! TOML syntax before it loads.
//!
//! ```toml
//! [contentDetection]
//! strategy = "hybrid"
//! cssSelector = "div.chapter-body"
//! excludeSelectors = [".author-note"]
//! regexPatterns = ['<div id="story">(.*?)</div>']
//!
//! [contentDetection.textDensity]
//! minDensityScore = 0.3
//! minBlockSize = 100
//!
//! [contentDetection.domPosition]
//! maxDepth = 10
//! minWidth = 300
//!
//! [chapterExtraction]
//! titleSelector = "h1.chapter-title"
//! titleRegex = '<h2 class="t">(.*?)</h2>'
//!
//! [extraction]
//! minContentLength = 100
//! cleanScripts = true
//! preserveImages = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::options::DEFAULT_MIN_CONTENT_LENGTH;
use crate::strategy::{
    DensityStrategy, DetectionStrategy, HybridStrategy, PatternStrategy, SelectorStrategy,
    StrategyKind, StructuralStrategy,
};
use crate::{ContentExtractor, Error, ExtractionOptions, Result};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractorConfig {
    pub content_detection: ContentDetectionConfig,
    pub chapter_extraction: ChapterExtractionConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentDetectionConfig {
    /// Strategy name, parsed with [`StrategyKind::from_str`](std::str::FromStr).
    pub strategy: String,
    pub css_selector: Option<String>,
    pub exclude_selectors: Vec<String>,
    pub text_density: TextDensityConfig,
    pub regex_patterns: Vec<String>,
    pub dom_position: DomPositionConfig,
}

impl Default for ContentDetectionConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default().as_str().to_string(),
            css_selector: None,
            exclude_selectors: Vec::new(),
            text_density: TextDensityConfig::default(),
            regex_patterns: Vec::new(),
            dom_position: DomPositionConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextDensityConfig {
    pub min_density_score: f64,
    pub min_block_size: usize,
}

impl Default for TextDensityConfig {
    fn default() -> Self {
        let density = DensityStrategy::default();
        Self {
            min_density_score: density.min_density_score,
            min_block_size: density.min_block_size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomPositionConfig {
    pub max_depth: usize,
    pub min_width: usize,
}

impl Default for DomPositionConfig {
    fn default() -> Self {
        let structural = StructuralStrategy::default();
        Self {
            max_depth: structural.max_depth,
            min_width: structural.min_width,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChapterExtractionConfig {
    pub title_selector: Option<String>,
    pub title_regex: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractionConfig {
    pub min_content_length: usize,
    pub clean_scripts: bool,
    pub preserve_images: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_content_length: DEFAULT_MIN_CONTENT_LENGTH,
            clean_scripts: true,
            preserve_images: true,
        }
    }
}

impl ExtractorConfig {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigLoad` for malformed TOML or mistyped values.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::ConfigLoad(e.to_string()))
    }

    /// Read, parse and validate a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigLoad` when the file cannot be read or parsed, and
    /// `Config` when it fails [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .map_err(|e| Error::ConfigLoad(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&data)?;
        config.validate()?;
        debug!(path = %path.display(), strategy = %config.content_detection.strategy, "loaded configuration");
        Ok(config)
    }

    /// The configured strategy kind.
    ///
    /// # Errors
    ///
    /// Returns `Config` for an unknown strategy name.
    pub fn strategy_kind(&self) -> Result<StrategyKind> {
        self.content_detection.strategy.parse()
    }

    /// Check that the selected strategy has the parameters it needs.
    ///
    /// # Errors
    ///
    /// Returns `Config` naming the first problem found.
    pub fn validate(&self) -> Result<()> {
        let detection = &self.content_detection;
        match self.strategy_kind()? {
            StrategyKind::CssSelector if self.css_selector().is_none() => Err(Error::Config(
                "contentDetection.cssSelector is required for css_selector strategy".to_string(),
            )),
            StrategyKind::XpathRegex if detection.regex_patterns.is_empty() => Err(Error::Config(
                "contentDetection.regexPatterns is required for xpath_regex strategy".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn css_selector(&self) -> Option<&str> {
        self.content_detection
            .css_selector
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }

    fn density(&self) -> DensityStrategy {
        let td = self.content_detection.text_density;
        DensityStrategy::new(td.min_density_score, td.min_block_size)
    }

    fn structural(&self) -> StructuralStrategy {
        let dp = self.content_detection.dom_position;
        StructuralStrategy::new(dp.max_depth, dp.min_width)
    }

    /// Build the configured detection strategy.
    ///
    /// # Errors
    ///
    /// Returns `Config` for an unknown strategy name.
    pub fn build_strategy(&self) -> Result<DetectionStrategy> {
        let detection = &self.content_detection;
        let strategy = match self.strategy_kind()? {
            StrategyKind::CssSelector => SelectorStrategy::new(
                self.css_selector().unwrap_or_default(),
                detection.exclude_selectors.clone(),
            )
            .into(),
            StrategyKind::TextDensity => self.density().into(),
            StrategyKind::XpathRegex => {
                PatternStrategy::new(detection.regex_patterns.iter().cloned()).into()
            }
            StrategyKind::DomPosition => self.structural().into(),
            StrategyKind::Hybrid => HybridStrategy::standard(
                self.css_selector(),
                &detection.exclude_selectors,
                self.density(),
                self.structural(),
            )
            .into(),
        };
        Ok(strategy)
    }

    /// The per-call options derived from this configuration.
    #[must_use]
    pub fn extraction_options(&self) -> ExtractionOptions {
        ExtractionOptions {
            title_selector: self.chapter_extraction.title_selector.clone(),
            title_regex: self.chapter_extraction.title_regex.clone(),
            min_content_length: self.extraction.min_content_length,
            preserve_images: self.extraction.preserve_images,
            clean_scripts: self.extraction.clean_scripts,
        }
    }

    /// An extractor running the configured strategy with the configured options.
    ///
    /// # Errors
    ///
    /// Returns `Config` for an unknown strategy name.
    pub fn build_extractor(&self) -> Result<ContentExtractor> {
        Ok(ContentExtractor::new(
            vec![self.build_strategy()?],
            self.extraction_options(),
        ))
    }
}
