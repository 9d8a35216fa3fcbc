//! Per-variant catalog index construction.

use std::collections::{BTreeMap, BTreeSet};

use sku_model::{CatalogEntry, NormVariant, ResolveError};

use crate::normalize::normalize_code;

/// Read-only lookup from canonical code to category label, one map per
/// normalization variant. Built once per run and shared by every
/// resolver stage; nothing mutates it after [`CatalogIndex::build`].
///
/// Catalog rows are deduplicated by their conservative variant with the
/// first occurrence winning. Rows that collide only under a looser
/// variant are not deduplicated; their map entries are last-write-wins.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    conservative: BTreeMap<String, String>,
    aggressive: BTreeMap<String, String>,
    ocr_corrected: BTreeMap<String, String>,
    no_leading_zeros: BTreeMap<String, String>,
    /// Distinct aggressive codes in catalog order, scanned by the fuzzy
    /// stage. Kept separate from the map so candidate ordering follows
    /// the catalog, not key order.
    aggressive_codes: Vec<String>,
}

impl CatalogIndex {
    /// Builds the index from catalog rows.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::EmptyCatalog`] when no rows survive
    /// deduplication.
    pub fn build(entries: &[CatalogEntry]) -> Result<Self, ResolveError> {
        let mut seen = BTreeSet::new();
        let mut conservative = BTreeMap::new();
        let mut aggressive = BTreeMap::new();
        let mut ocr_corrected = BTreeMap::new();
        let mut no_leading_zeros = BTreeMap::new();
        let mut aggressive_codes = Vec::new();

        for entry in entries {
            let set = normalize_code(&entry.raw_code);
            if !seen.insert(set.conservative.clone()) {
                continue;
            }
            conservative.insert(set.conservative, entry.label.clone());
            if !aggressive.contains_key(&set.aggressive) {
                aggressive_codes.push(set.aggressive.clone());
            }
            aggressive.insert(set.aggressive, entry.label.clone());
            ocr_corrected.insert(set.ocr_corrected, entry.label.clone());
            no_leading_zeros.insert(set.no_leading_zeros, entry.label.clone());
        }

        if seen.is_empty() {
            return Err(ResolveError::EmptyCatalog);
        }

        Ok(Self {
            conservative,
            aggressive,
            ocr_corrected,
            no_leading_zeros,
            aggressive_codes,
        })
    }

    /// Looks up a canonical code in the map for one variant.
    #[must_use]
    pub fn lookup(&self, variant: NormVariant, code: &str) -> Option<&str> {
        self.map(variant).get(code).map(String::as_str)
    }

    /// Distinct aggressive-variant codes in catalog order.
    #[must_use]
    pub fn aggressive_codes(&self) -> &[String] {
        &self.aggressive_codes
    }

    /// Number of catalog rows surviving deduplication.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conservative.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conservative.is_empty()
    }

    fn map(&self, variant: NormVariant) -> &BTreeMap<String, String> {
        match variant {
            NormVariant::Conservative => &self.conservative,
            NormVariant::Aggressive => &self.aggressive,
            NormVariant::OcrCorrected => &self.ocr_corrected,
            NormVariant::NoLeadingZeros => &self.no_leading_zeros,
        }
    }
}
