//! Unified error types for the crate.

use thiserror::Error;

/// Top-level error for chat-log operations.
#[derive(Debug, Error)]
pub enum ChatLogError {
    /// I/O or filesystem errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
