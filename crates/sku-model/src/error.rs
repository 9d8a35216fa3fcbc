use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("catalog has no usable rows after deduplication")]
    EmptyCatalog,
    #[error("unknown match strategy: {0}")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
