//! Sample data error types

use thiserror::Error;

/// Errors raised while loading or validating the dashboard snapshot
#[derive(Error, Debug)]
pub enum DataError {
    /// The embedded JSON could not be parsed
    #[error("Malformed sample data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required collection is empty
    #[error("Missing sample data: {0}")]
    Missing(&'static str),

    /// A value violates a snapshot invariant
    #[error("Invalid sample data: {0}")]
    Invalid(String),
}

/// Result type for data operations
pub type DataResult<T> = Result<T, DataError>;
