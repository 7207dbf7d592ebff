use thiserror::Error;

/// Errors that can occur while tokenizing or building documents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("document requires a non-empty name")]
    MissingName,
}
