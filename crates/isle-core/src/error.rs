//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `IsleError` as one
//! variant where they need to surface configuration problems.

use thiserror::Error;

/// The top-level error type for `isle-core`.
#[derive(Debug, Error)]
pub enum IsleError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid date: {0}")]
    Date(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `isle-core`.
pub type IsleResult<T> = Result<T, IsleError>;
