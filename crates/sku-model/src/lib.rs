pub mod catalog;
pub mod error;
pub mod options;
pub mod record;
pub mod strategy;

pub use catalog::CatalogEntry;
pub use error::{ResolveError, Result};
pub use options::PipelineOptions;
pub use record::{Resolution, SalesRecord};
pub use strategy::{FuzzyScorer, MatchStrategy, NormVariant};
