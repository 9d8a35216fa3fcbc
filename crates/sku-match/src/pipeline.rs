//! The three-tier resolution cascade.
//!
//! A strict sequence, not a state machine: exact, then fuzzy over the
//! remainder, then partial over what is left, followed by the subtotal
//! override and the `no_match` fallback. Later stages only ever touch
//! still-unresolved records, so re-running a stage is harmless.

use sku_model::{CatalogEntry, MatchStrategy, PipelineOptions, Resolution, SalesRecord};

use crate::index::CatalogIndex;
use crate::{exact, fuzzy, partial};

/// Substring (of the uppercased raw code) marking subtotal rows.
const SUBTOTAL_MARKER: &str = "TOTALE";

/// Per-strategy resolution counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub exact: usize,
    pub fuzzy: usize,
    pub partial: usize,
    pub special_case: usize,
    pub unmatched: usize,
}

impl RunSummary {
    /// Records that received a real category (everything but `no_match`).
    #[must_use]
    pub fn matched(&self) -> usize {
        self.total - self.unmatched
    }

    /// Matched share of the input, in [0, 1]. Zero for empty input.
    #[must_use]
    pub fn match_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.matched() as f64 / self.total as f64
    }
}

/// Runs the full cascade over a batch of sales records.
///
/// Records are annotated in place and never reordered; every record
/// ends up with exactly one of a resolved category, the forced subtotal
/// override, or the `Unknown`/`no_match` fallback.
///
/// # Errors
///
/// Returns [`sku_model::ResolveError::EmptyCatalog`] when the catalog
/// has no usable rows; the records are left untouched in that case.
pub fn run(
    records: &mut [SalesRecord],
    catalog: &[CatalogEntry],
    options: &PipelineOptions,
) -> sku_model::Result<RunSummary> {
    let index = CatalogIndex::build(catalog)?;
    tracing::debug!(catalog_rows = index.len(), records = records.len(), "index built");

    exact::resolve(records, &index);
    fuzzy::resolve(records, &index, options.score_cutoff);
    partial::resolve(records, &index);

    // Subtotal rows must never carry a product category, whatever the
    // cascade decided for them.
    for record in records.iter_mut() {
        if record.article_code.to_uppercase().contains(SUBTOTAL_MARKER) {
            record.force_resolution(Resolution::special_case());
        }
    }

    for record in records.iter_mut() {
        if !record.is_resolved() {
            record.resolve(Resolution::no_match());
        }
    }

    let summary = summarize(records);
    tracing::info!(
        total = summary.total,
        exact = summary.exact,
        fuzzy = summary.fuzzy,
        partial = summary.partial,
        special_case = summary.special_case,
        unmatched = summary.unmatched,
        "code resolution complete"
    );
    Ok(summary)
}

fn summarize(records: &[SalesRecord]) -> RunSummary {
    let mut summary = RunSummary {
        total: records.len(),
        ..RunSummary::default()
    };
    for record in records {
        let Some(resolution) = &record.resolution else {
            continue;
        };
        match resolution.strategy {
            MatchStrategy::Exact(_) => summary.exact += 1,
            MatchStrategy::Fuzzy(_) => summary.fuzzy += 1,
            MatchStrategy::PartialMatch => summary.partial += 1,
            MatchStrategy::SpecialCase => summary.special_case += 1,
            MatchStrategy::NoMatch => summary.unmatched += 1,
        }
    }
    summary
}
