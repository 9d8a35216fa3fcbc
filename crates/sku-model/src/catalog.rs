//! Canonical product catalog rows.

use serde::{Deserialize, Serialize};

/// One row of the canonical catalog: a raw product code and the
/// descriptive category label projected onto matched sales records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Product code as it appears in the catalog source.
    pub raw_code: String,
    /// Category label (the `FAMIGLIA` value in the output table).
    pub label: String,
}

impl CatalogEntry {
    pub fn new(raw_code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            raw_code: raw_code.into(),
            label: label.into(),
        }
    }
}
