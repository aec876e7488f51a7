//! Priority-ordered combination of other strategies.

use tracing::debug;

use super::{DensityStrategy, DetectionStrategy, SelectorStrategy, Strategy, StructuralStrategy};
use crate::dom::Document;
use crate::error::StrategyFailure;
use crate::{Error, ExtractionOptions, Result};

/// Tries sub-strategies in order and returns the first non-empty result.
///
/// A later sub-strategy is never preferred over an earlier one, however good
/// its output might be.
#[derive(Debug, Clone, Default)]
pub struct HybridStrategy {
    pub strategies: Vec<DetectionStrategy>,
}

impl HybridStrategy {
    #[must_use]
    pub fn new(strategies: Vec<DetectionStrategy>) -> Self {
        Self { strategies }
    }

    /// The usual chain: selector (when one is configured), density, structural.
    #[must_use]
    pub fn standard(
        css_selector: Option<&str>,
        exclude_selectors: &[String],
        density: DensityStrategy,
        structural: StructuralStrategy,
    ) -> Self {
        let mut strategies = Vec::with_capacity(3);

        if let Some(selector) = css_selector.filter(|s| !s.trim().is_empty()) {
            strategies.push(SelectorStrategy::new(selector, exclude_selectors.to_vec()).into());
        }
        strategies.push(density.into());
        strategies.push(structural.into());

        Self { strategies }
    }
}

impl Strategy for HybridStrategy {
    fn name(&self) -> &'static str {
        "hybrid"
    }

    fn extract(&self, doc: &Document, options: &ExtractionOptions) -> Result<String> {
        if self.strategies.is_empty() {
            return Err(Error::Config(
                "no strategies configured for hybrid extraction".to_string(),
            ));
        }

        let mut failures = Vec::new();
        for strategy in &self.strategies {
            match strategy.extract(doc, options) {
                Ok(content) if !content.is_empty() => {
                    debug!(strategy = strategy.name(), "hybrid sub-strategy succeeded");
                    return Ok(content);
                }
                Ok(_) => debug!(strategy = strategy.name(), "hybrid sub-strategy returned nothing"),
                Err(err) => {
                    debug!(strategy = strategy.name(), %err, "hybrid sub-strategy failed");
                    failures.push(StrategyFailure::new(strategy.name(), err));
                }
            }
        }

        Err(Error::AllStrategiesFailed(failures))
    }
}
