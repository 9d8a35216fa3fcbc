//! Multi-strategy resolution of noisy product codes against a canonical
//! catalog.
//!
//! Input codes suffer from OCR-like character substitution, inconsistent
//! punctuation, leading zeros, and truncation, so no single comparison
//! method suffices. The engine resolves each record with the cheapest
//! method that succeeds:
//!
//! 1. **Exact** - canonical-code equality over a fixed cascade of
//!    normalization variants ([`exact`])
//! 2. **Fuzzy** - best approximate match across three similarity
//!    scorers, subject to a score cutoff ([`fuzzy`])
//! 3. **Partial** - small truncations of the normalized code looked up
//!    verbatim ([`partial`])
//!
//! [`pipeline::run`] orchestrates the cascade, applies the subtotal
//! override, and backfills `no_match` on whatever remains.

pub mod exact;
pub mod fuzzy;
pub mod index;
pub mod normalize;
pub mod partial;
pub mod pipeline;
pub mod score;

pub use index::CatalogIndex;
pub use normalize::{NormalizedCodeSet, normalize_code, normalize_text};
pub use pipeline::{RunSummary, run};
