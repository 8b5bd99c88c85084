//! I/O error types
//!
//! Provides a unified error type for reading barren-land payloads and
//! writing area lists.

use thiserror::Error;

/// Error type for payload I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error while reading or writing a stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not a brace-delimited list of quoted strings
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// One quoted entry is not four non-negative integers
    #[error("malformed rectangle {entry:?}: {reason}")]
    MalformedRect { entry: String, reason: String },

    /// An error from the core library (e.g. inverted rectangle corners)
    #[error("core error: {0}")]
    Core(#[from] fertile_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
