//! Error types for wikimeta operations.

use thiserror::Error;

/// Errors that can occur when handing a document tree to wikimeta.
///
/// Extraction itself never fails: malformed nodes degrade to empty
/// contributions. Only values that are not traversable nodes are rejected.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid document tree: {0}")]
    InvalidTree(String),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
