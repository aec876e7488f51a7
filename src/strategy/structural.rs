//! Structural heuristics: well-known content containers.

use tracing::{debug, trace};

use super::Strategy;
use crate::dom::{self, Document};
use crate::patterns::{STRUCTURAL_BOILERPLATE, STRUCTURAL_CONTAINERS, STRUCTURAL_MIN_MARKUP};
use crate::{Error, ExtractionOptions, Result};

/// Tries a fixed, ordered list of common content-container selectors.
///
/// The first container whose cleaned markup exceeds 100 characters wins.
/// `max_depth` and `min_width` are carried from configuration for future
/// tuning and do not influence the container list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralStrategy {
    pub max_depth: usize,
    pub min_width: usize,
}

impl Default for StructuralStrategy {
    fn default() -> Self {
        Self {
            max_depth: 10,
            min_width: 300,
        }
    }
}

impl StructuralStrategy {
    #[must_use]
    pub fn new(max_depth: usize, min_width: usize) -> Self {
        Self { max_depth, min_width }
    }
}

impl Strategy for StructuralStrategy {
    fn name(&self) -> &'static str {
        "dom_position"
    }

    fn extract(&self, doc: &Document, _options: &ExtractionOptions) -> Result<String> {
        for container in STRUCTURAL_CONTAINERS {
            let Ok(Some(found)) = dom::select_first(doc, container) else {
                continue;
            };

            let detached = dom::clone_subtree(&found);
            dom::remove_selectors(&detached.root(), STRUCTURAL_BOILERPLATE);

            let markup = detached.inner_markup();
            let chars = dom::char_len(&markup);
            if chars > STRUCTURAL_MIN_MARKUP {
                debug!(container, chars, "structural container accepted");
                return Ok(markup);
            }
            trace!(container, chars, "structural container too small");
        }

        Err(Error::NoHeuristicMatch)
    }
}
