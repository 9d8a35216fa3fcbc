//! Last-resort resolution through small truncations of the code.
//!
//! Trades precision for recall: a truncation hit carries a fixed
//! confidence of 90, the weakest tier in the cascade.

use std::collections::{BTreeMap, BTreeSet};

use sku_model::{NormVariant, Resolution, SalesRecord};

use crate::index::CatalogIndex;
use crate::normalize::normalize_code;

/// Codes shorter than this are too ambiguous to truncate safely.
const MIN_CODE_LEN: usize = 4;

/// Resolves still-unresolved records by looking up truncations of their
/// aggressive code: drop-last-1, drop-last-2, drop-first-1, drop-first-2,
/// in that order, first hit wins.
pub fn resolve(records: &mut [SalesRecord], index: &CatalogIndex) {
    let codes: Vec<String> = records
        .iter()
        .map(|record| normalize_code(&record.article_code).aggressive)
        .collect();

    let mut seen = BTreeSet::new();
    let mut winners: BTreeMap<String, String> = BTreeMap::new();
    for (record, code) in records.iter().zip(&codes) {
        if record.is_resolved() || code.len() < MIN_CODE_LEN {
            continue;
        }
        if !seen.insert(code.clone()) {
            continue;
        }
        if let Some(label) = truncation_match(code, index) {
            winners.insert(code.clone(), label.to_string());
        }
    }
    tracing::debug!(
        scored = seen.len(),
        matched = winners.len(),
        "partial pass"
    );

    for (record, code) in records.iter_mut().zip(&codes) {
        if record.is_resolved() {
            continue;
        }
        if let Some(label) = winners.get(code) {
            record.resolve(Resolution::partial(label.clone()));
        }
    }
}

/// First truncation of the code present in the aggressive index.
/// Aggressive codes are ASCII, so byte slicing is safe here.
fn truncation_match<'a>(code: &str, index: &'a CatalogIndex) -> Option<&'a str> {
    let truncations = [
        &code[..code.len() - 1],
        &code[..code.len() - 2],
        &code[1..],
        &code[2..],
    ];
    truncations
        .into_iter()
        .find_map(|truncated| index.lookup(NormVariant::Aggressive, truncated))
}
