//! Text-density detection.
//!
//! Every prose-bearing element under `<body>` is scored by the ratio of its
//! visible text to its serialized markup, boosted for long blocks and for
//! blocks holding several paragraphs. The single highest-scoring block wins.

use dom_query::{NodeRef, Selection};
use tracing::{debug, trace};

use super::Strategy;
use crate::dom::{self, Document};
use crate::patterns::{DENSITY_CANDIDATE_TAGS, DENSITY_SKIP_TOKENS, SCRIPT_SELECTOR};
use crate::{Error, ExtractionOptions, Result};

/// Default minimum text/markup ratio.
pub const DEFAULT_MIN_DENSITY_SCORE: f64 = 0.3;

/// Default minimum visible text length, in characters.
pub const DEFAULT_MIN_BLOCK_SIZE: usize = 100;

const LONG_BLOCK: usize = 500;
const VERY_LONG_BLOCK: usize = 1000;
const LONG_BLOCK_BOOST: f64 = 1.2;
const VERY_LONG_BLOCK_BOOST: f64 = 1.3;
const PARAGRAPH_BOOST: f64 = 1.5;
const PARAGRAPH_BOOST_MIN: usize = 2;

/// Selects the block with the highest text density.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityStrategy {
    pub min_density_score: f64,
    pub min_block_size: usize,
}

impl Default for DensityStrategy {
    fn default() -> Self {
        Self {
            min_density_score: DEFAULT_MIN_DENSITY_SCORE,
            min_block_size: DEFAULT_MIN_BLOCK_SIZE,
        }
    }
}

impl DensityStrategy {
    /// Non-positive thresholds fall back to the defaults.
    #[must_use]
    pub fn new(min_density_score: f64, min_block_size: usize) -> Self {
        Self {
            min_density_score: if min_density_score > 0.0 {
                min_density_score
            } else {
                DEFAULT_MIN_DENSITY_SCORE
            },
            min_block_size: if min_block_size > 0 {
                min_block_size
            } else {
                DEFAULT_MIN_BLOCK_SIZE
            },
        }
    }

    /// Score one candidate block.
    ///
    /// Returns `None` when the element is not a candidate or fails a threshold.
    #[must_use]
    pub fn score(&self, sel: &Selection) -> Option<f64> {
        let tag = dom::tag_name(sel)?;
        if !DENSITY_CANDIDATE_TAGS.contains(&tag.as_str()) {
            return None;
        }

        if is_boilerplate(sel) {
            return None;
        }

        let text_len = dom::char_len(dom::text_content(sel).trim());
        if text_len < self.min_block_size {
            return None;
        }

        let markup_len = dom::char_len(&dom::inner_html(sel));
        if markup_len == 0 {
            return None;
        }

        let density = text_len as f64 / markup_len as f64;
        if density < self.min_density_score {
            return None;
        }

        let mut score = density;
        if text_len > LONG_BLOCK {
            score *= LONG_BLOCK_BOOST;
        }
        if text_len > VERY_LONG_BLOCK {
            score *= VERY_LONG_BLOCK_BOOST;
        }
        if sel.select("p").length() > PARAGRAPH_BOOST_MIN {
            score *= PARAGRAPH_BOOST;
        }

        Some(score)
    }

    /// Find the best block under `<body>`, in a single document-order pass.
    ///
    /// Ties keep the earliest block.
    #[must_use]
    pub fn best_block<'a>(&self, doc: &'a Document) -> Option<Selection<'a>> {
        let body = doc.select("body");
        let mut best: Option<(NodeRef<'a>, f64)> = None;

        for node in body.select("*").nodes() {
            let sel = Selection::from(*node);
            let Some(score) = self.score(&sel) else {
                continue;
            };
            trace!(tag = ?dom::tag_name(&sel), score, "density candidate");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((*node, score));
            }
        }

        best.map(|(node, _)| Selection::from(node))
    }
}

/// Class/id tokens that mark navigation, ads and other page furniture.
fn is_boilerplate(sel: &Selection) -> bool {
    let combined = format!(
        "{} {}",
        dom::class_name(sel).unwrap_or_default(),
        dom::id(sel).unwrap_or_default()
    )
    .to_lowercase();

    DENSITY_SKIP_TOKENS.iter().any(|token| combined.contains(token))
}

impl Strategy for DensityStrategy {
    fn name(&self) -> &'static str {
        "text_density"
    }

    fn extract(&self, doc: &Document, options: &ExtractionOptions) -> Result<String> {
        let Some(best) = self.best_block(doc) else {
            return Err(Error::NoSuitableBlock {
                min_density: self.min_density_score,
                min_block_size: self.min_block_size,
            });
        };

        let detached = dom::clone_subtree(&best);
        if options.clean_scripts {
            dom::remove_selectors(&detached.root(), &[SCRIPT_SELECTOR]);
        }

        let markup = detached.inner_markup();
        debug!(tag = ?dom::tag_name(&best), chars = dom::char_len(&markup), "density winner");
        Ok(markup)
    }
}
