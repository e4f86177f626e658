//! Error types for html2draft operations.

use thiserror::Error;

/// Errors that can occur while converting markup.
#[derive(Error, Debug)]
pub enum Error {
    /// Strict mode met a block-level tag outside the supported set.
    #[error("unsupported tag <{tag}> in strict mode")]
    UnsupportedTag { tag: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
