//! Error types for fertile-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] fertile_core::Error),

    /// Seed cell outside the grid
    #[error("invalid seed position: ({row}, {col})")]
    InvalidSeed { row: u32, col: u32 },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
