//! Tuning knobs for a resolution run.

use serde::{Deserialize, Serialize};

/// Default minimum score for the fuzzy stage.
pub const DEFAULT_SCORE_CUTOFF: f64 = 80.0;

/// Options for one pipeline run.
///
/// The exact-match cascade order is fixed and deliberately not
/// configurable; only the fuzzy score cutoff can be tuned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Minimum similarity score (0-100) for a fuzzy candidate to
    /// qualify. A candidate scoring exactly at the cutoff is accepted.
    pub score_cutoff: f64,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            score_cutoff: DEFAULT_SCORE_CUTOFF,
        }
    }
}

impl PipelineOptions {
    #[must_use]
    pub fn with_score_cutoff(score_cutoff: f64) -> Self {
        Self { score_cutoff }
    }
}
