//! Approximate resolution for codes the exact cascade missed.
//!
//! This is the dominant cost center: every distinct unresolved code is
//! scored against the whole catalog with three scorers. Records are
//! deduplicated to distinct aggressive codes first so identical codes
//! are scored once and the winning label is broadcast to every record
//! sharing them.

use std::collections::{BTreeMap, BTreeSet};

use sku_model::{FuzzyScorer, NormVariant, Resolution, SalesRecord};

use crate::index::CatalogIndex;
use crate::normalize::normalize_code;
use crate::score;

/// Resolves still-unresolved records by the best approximate match.
///
/// For each scorer in [`FuzzyScorer::EVALUATION_ORDER`] the first
/// catalog code reaching that scorer's maximum wins; across scorers a
/// strictly higher score is required to displace an earlier scorer's
/// best, so ties go to the earlier scorer. Candidates below
/// `score_cutoff` never qualify.
pub fn resolve(records: &mut [SalesRecord], index: &CatalogIndex, score_cutoff: f64) {
    let codes: Vec<String> = records
        .iter()
        .map(|record| normalize_code(&record.article_code).aggressive)
        .collect();

    let mut seen = BTreeSet::new();
    let mut distinct = Vec::new();
    for (record, code) in records.iter().zip(&codes) {
        if record.is_resolved() || code.is_empty() {
            continue;
        }
        if seen.insert(code.clone()) {
            distinct.push(code.clone());
        }
    }

    let mut winners: BTreeMap<String, (String, FuzzyScorer, f64)> = BTreeMap::new();
    for code in distinct {
        if let Some(best) = best_match(&code, index, score_cutoff) {
            winners.insert(code, best);
        }
    }
    tracing::debug!(
        scored = seen.len(),
        matched = winners.len(),
        score_cutoff,
        "fuzzy pass"
    );

    for (record, code) in records.iter_mut().zip(&codes) {
        if record.is_resolved() {
            continue;
        }
        if let Some((label, scorer, best_score)) = winners.get(code) {
            record.resolve(Resolution::fuzzy(*scorer, label.clone(), *best_score));
        }
    }
}

/// Best qualifying catalog match for one code across all scorers.
fn best_match(
    code: &str,
    index: &CatalogIndex,
    score_cutoff: f64,
) -> Option<(String, FuzzyScorer, f64)> {
    let mut best: Option<(&str, FuzzyScorer, f64)> = None;
    for scorer in FuzzyScorer::EVALUATION_ORDER {
        let mut scorer_best: Option<(&str, f64)> = None;
        for candidate in index.aggressive_codes() {
            let candidate_score = score::score(scorer, code, candidate);
            if candidate_score < score_cutoff {
                continue;
            }
            // Strict comparison keeps the first maximum in catalog order.
            if scorer_best.is_none_or(|(_, s)| candidate_score > s) {
                scorer_best = Some((candidate, candidate_score));
            }
        }
        if let Some((candidate, candidate_score)) = scorer_best
            && best.is_none_or(|(_, _, s)| candidate_score > s)
        {
            best = Some((candidate, scorer, candidate_score));
        }
    }

    let (candidate, scorer, best_score) = best?;
    let label = index.lookup(NormVariant::Aggressive, candidate)?;
    Some((label.to_string(), scorer, best_score))
}
