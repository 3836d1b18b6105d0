//! Error types for the tablesum library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tablesum operations.
#[derive(Debug, Error)]
pub enum TableSummaryError {
    /// The input is not a well-formed table.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A derived structure is inconsistent or missing expected fields.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The table has no rows to compute percentages over.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Creating or removing a directory failed.
    #[error("Filesystem error for '{path}': {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory to remove does not exist.
    #[error("Directory not found: '{path}'")]
    NotFound { path: PathBuf },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tablesum operations.
pub type Result<T> = std::result::Result<T, TableSummaryError>;
