//! Content Detection Strategies
//!
//! Each strategy is a stateless unit that tries to locate the main-content
//! subtree of one parsed page and returns its markup, or a typed [`Error`]
//! describing why nothing was found.
//!
//! - `selector`: a configured CSS selector, minus exclusion selectors
//! - `density`: highest text-to-markup ratio among prose-bearing blocks
//! - `pattern`: regex capture over the serialized document
//! - `structural`: a fixed list of common content containers
//! - `hybrid`: the above in strict priority order
//!
//! Strategies never mutate the document they are given. Anything they remove
//! is removed from a [`Detached`](crate::dom::Detached) clone.

use std::fmt;
use std::str::FromStr;

use crate::dom::Document;
use crate::{Error, ExtractionOptions, Result};

pub mod density;
pub mod hybrid;
pub mod pattern;
pub mod selector;
pub mod structural;

pub use density::DensityStrategy;
pub use hybrid::HybridStrategy;
pub use pattern::PatternStrategy;
pub use selector::SelectorStrategy;
pub use structural::StructuralStrategy;

/// Capability shared by every detection strategy.
///
/// Implementations must be pure functions of `(doc, options)` so that one
/// instance can serve many documents, from many threads.
pub trait Strategy: Send + Sync {
    /// Stable name reported in results and warnings.
    fn name(&self) -> &'static str;

    /// Locate the main content of `doc` and return its trimmed markup.
    fn extract(&self, doc: &Document, options: &ExtractionOptions) -> Result<String>;
}

/// The closed set of strategies an extractor can be built from.
#[derive(Debug, Clone)]
pub enum DetectionStrategy {
    Selector(SelectorStrategy),
    Density(DensityStrategy),
    Pattern(PatternStrategy),
    Structural(StructuralStrategy),
    Hybrid(HybridStrategy),
}

impl DetectionStrategy {
    /// The configuration kind this strategy corresponds to.
    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Selector(_) => StrategyKind::CssSelector,
            Self::Density(_) => StrategyKind::TextDensity,
            Self::Pattern(_) => StrategyKind::XpathRegex,
            Self::Structural(_) => StrategyKind::DomPosition,
            Self::Hybrid(_) => StrategyKind::Hybrid,
        }
    }
}

impl Strategy for DetectionStrategy {
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    fn extract(&self, doc: &Document, options: &ExtractionOptions) -> Result<String> {
        match self {
            Self::Selector(s) => s.extract(doc, options),
            Self::Density(s) => s.extract(doc, options),
            Self::Pattern(s) => s.extract(doc, options),
            Self::Structural(s) => s.extract(doc, options),
            Self::Hybrid(s) => s.extract(doc, options),
        }
    }
}

impl From<SelectorStrategy> for DetectionStrategy {
    fn from(s: SelectorStrategy) -> Self {
        Self::Selector(s)
    }
}

impl From<DensityStrategy> for DetectionStrategy {
    fn from(s: DensityStrategy) -> Self {
        Self::Density(s)
    }
}

impl From<PatternStrategy> for DetectionStrategy {
    fn from(s: PatternStrategy) -> Self {
        Self::Pattern(s)
    }
}

impl From<StructuralStrategy> for DetectionStrategy {
    fn from(s: StructuralStrategy) -> Self {
        Self::Structural(s)
    }
}

impl From<HybridStrategy> for DetectionStrategy {
    fn from(s: HybridStrategy) -> Self {
        Self::Hybrid(s)
    }
}

/// Strategy names as they appear in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    CssSelector,
    TextDensity,
    XpathRegex,
    DomPosition,
    #[default]
    Hybrid,
}

impl StrategyKind {
    pub const ALL: [Self; 5] = [
        Self::CssSelector,
        Self::TextDensity,
        Self::XpathRegex,
        Self::DomPosition,
        Self::Hybrid,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CssSelector => "css_selector",
            Self::TextDensity => "text_density",
            Self::XpathRegex => "xpath_regex",
            Self::DomPosition => "dom_position",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                Error::Config(format!(
                    "unknown strategy '{wanted}' (expected one of: css_selector, text_density, xpath_regex, dom_position, hybrid)"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_names() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.as_str().parse::<StrategyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_config_error() {
        assert!(matches!("readability".parse::<StrategyKind>(), Err(Error::Config(_))));
    }

    #[test]
    fn enum_reports_variant_names() {
        assert_eq!(DetectionStrategy::from(DensityStrategy::default()).name(), "text_density");
        assert_eq!(DetectionStrategy::from(StructuralStrategy::default()).name(), "dom_position");
        assert_eq!(
            DetectionStrategy::from(SelectorStrategy::new("main", Vec::new())).name(),
            "css_selector"
        );
    }

    #[test]
    fn strategies_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DetectionStrategy>();
    }
}
