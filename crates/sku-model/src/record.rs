//! Sales records and their resolution state.

use serde::{Deserialize, Serialize};

use crate::strategy::{FuzzyScorer, MatchStrategy, NormVariant};

/// Confidence assigned to exact-variant hits and the TOTALE override.
pub const EXACT_CONFIDENCE: f64 = 100.0;
/// Fixed confidence of the truncation tier; the weakest tier by design.
pub const PARTIAL_CONFIDENCE: f64 = 90.0;

/// Category applied to subtotal/aggregate rows.
pub const TOTALE_CATEGORY: &str = "TOTALE";
/// Category applied when no stage produced a match.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One sales row handed to the resolution engine.
///
/// The resolution field starts unset and is written at most once by the
/// cascade; only the subtotal override may replace an existing value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Raw article code as found in the transactional source. An absent
    /// code is represented by the empty string.
    pub article_code: String,
    /// Outcome of the cascade, `None` until a stage resolves the record.
    pub resolution: Option<Resolution>,
}

impl SalesRecord {
    pub fn new(article_code: impl Into<String>) -> Self {
        Self {
            article_code: article_code.into(),
            resolution: None,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    /// Sets the resolution if the record is still unresolved. Later
    /// stages never overwrite an earlier stage's result.
    pub fn resolve(&mut self, resolution: Resolution) {
        if self.resolution.is_none() {
            self.resolution = Some(resolution);
        }
    }

    /// Replaces any prior resolution. Used only by the subtotal
    /// override; the cascade itself goes through [`Self::resolve`].
    pub fn force_resolution(&mut self, resolution: Resolution) {
        self.resolution = Some(resolution);
    }
}

/// Outcome of matching one record against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Category label projected from the catalog (`FAMIGLIA`).
    pub category: String,
    /// Strategy that produced the label.
    pub strategy: MatchStrategy,
    /// Match strength in [0, 100]; unset for `no_match` records.
    pub confidence: Option<f64>,
}

impl Resolution {
    /// Exact canonical-code hit under one normalization variant.
    #[must_use]
    pub fn exact(variant: NormVariant, category: String) -> Self {
        Self {
            category,
            strategy: MatchStrategy::Exact(variant),
            confidence: Some(EXACT_CONFIDENCE),
        }
    }

    /// Approximate hit from one similarity scorer.
    #[must_use]
    pub fn fuzzy(scorer: FuzzyScorer, category: String, score: f64) -> Self {
        Self {
            category,
            strategy: MatchStrategy::Fuzzy(scorer),
            confidence: Some(score),
        }
    }

    /// Truncation hit from the last-resort tier.
    #[must_use]
    pub fn partial(category: String) -> Self {
        Self {
            category,
            strategy: MatchStrategy::PartialMatch,
            confidence: Some(PARTIAL_CONFIDENCE),
        }
    }

    /// Forced result for subtotal/aggregate rows.
    #[must_use]
    pub fn special_case() -> Self {
        Self {
            category: TOTALE_CATEGORY.to_string(),
            strategy: MatchStrategy::SpecialCase,
            confidence: Some(EXACT_CONFIDENCE),
        }
    }

    /// Fallback for records no stage could resolve.
    #[must_use]
    pub fn no_match() -> Self {
        Self {
            category: UNKNOWN_CATEGORY.to_string(),
            strategy: MatchStrategy::NoMatch,
            confidence: None,
        }
    }
}
