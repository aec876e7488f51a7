//! Result types for extraction output.
//!
//! Both shapes are built once by the orchestrator and handed to the caller;
//! nothing in this crate mutates them afterwards.

use serde::Serialize;

use crate::Error;

/// Result of a successful extraction from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Sanitized main-content markup.
    ///
    /// Always at least `min_content_length` characters long.
    pub content: String,

    /// Resolved chapter title, or an empty string when nothing was found.
    pub title: String,

    /// Name of the strategy whose candidate was accepted.
    pub strategy_used: String,

    /// Warnings recorded for strategies tried before the accepted one.
    pub warnings: Vec<String>,
}

/// Failure returned when every configured strategy was exhausted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{error}")]
pub struct ExtractionFailure {
    /// The last error encountered.
    pub error: Error,

    /// Every warning accumulated while trying the strategies.
    pub warnings: Vec<String>,
}

impl ExtractionFailure {
    #[must_use]
    pub fn new(error: Error, warnings: Vec<String>) -> Self {
        Self { error, warnings }
    }
}

impl From<Error> for ExtractionFailure {
    fn from(error: Error) -> Self {
        Self::new(error, Vec::new())
    }
}
