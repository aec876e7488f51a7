//! Error types for chapter-extract.
//!
//! Every variant is recoverable: strategy failures are turned into warnings
//! by the [`ContentExtractor`](crate::ContentExtractor) and only surface to the
//! caller once every configured strategy has been tried.

use std::fmt;

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A required parameter is missing or invalid for the selected strategy.
    #[error("configuration error: {0}")]
    Config(String),

    /// The configured selector matched no elements.
    #[error("selector '{selector}' matched no elements")]
    NoMatch {
        /// The selector that was queried.
        selector: String,
    },

    /// No candidate block cleared the density thresholds.
    #[error("no suitable content block found (min density: {min_density:.2}, min size: {min_block_size})")]
    NoSuitableBlock {
        /// Density threshold in effect.
        min_density: f64,
        /// Minimum text length in effect.
        min_block_size: usize,
    },

    /// None of the configured regex patterns produced a non-empty capture.
    #[error("no regex patterns matched")]
    NoPatternMatch,

    /// Every structural container selector was exhausted.
    #[error("no content found using DOM position heuristics")]
    NoHeuristicMatch,

    /// Content was found but is shorter than the configured minimum.
    #[error("strategy '{strategy}' returned content too short ({length} < {minimum} characters)")]
    ContentTooShort {
        /// Name of the strategy that produced the content.
        strategy: String,
        /// Length of the (sanitized) content in characters.
        length: usize,
        /// Configured minimum content length.
        minimum: usize,
    },

    /// Every sub-strategy of a hybrid strategy failed.
    #[error("all hybrid strategies failed: {}", join_failures(.0))]
    AllStrategiesFailed(Vec<StrategyFailure>),

    /// Reading or parsing a configuration file failed.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(String),
}

/// A single strategy's failure, as collected by the hybrid strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyFailure {
    /// Name of the strategy that failed.
    pub strategy: String,
    /// The error it returned.
    pub error: Box<Error>,
}

impl StrategyFailure {
    #[must_use]
    pub fn new(strategy: impl Into<String>, error: Error) -> Self {
        Self {
            strategy: strategy.into(),
            error: Box::new(error),
        }
    }
}

impl fmt::Display for StrategyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.strategy, self.error)
    }
}

fn join_failures(failures: &[StrategyFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
