//! Exact resolution over the normalization cascade.

use sku_model::{NormVariant, Resolution, SalesRecord};

use crate::index::CatalogIndex;
use crate::normalize::normalize_code;

/// Resolves records whose canonical code appears verbatim in the index.
///
/// Variants are tried in [`NormVariant::CASCADE`] order; a record
/// resolved by an earlier variant is skipped by all later ones, so a
/// minimal-rewriting match always wins over a lossier one.
pub fn resolve(records: &mut [SalesRecord], index: &CatalogIndex) {
    let code_sets: Vec<_> = records
        .iter()
        .map(|record| normalize_code(&record.article_code))
        .collect();

    for variant in NormVariant::CASCADE {
        let mut hits = 0usize;
        for (record, codes) in records.iter_mut().zip(&code_sets) {
            if record.is_resolved() {
                continue;
            }
            if let Some(label) = index.lookup(variant, codes.variant(variant)) {
                record.resolve(Resolution::exact(variant, label.to_string()));
                hits += 1;
            }
        }
        tracing::debug!(variant = variant.as_str(), hits, "exact variant pass");
    }
}
