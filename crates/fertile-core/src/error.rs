//! Error types for fertile-core
//!
//! Provides a unified error type for all grid operations. Every variant is a
//! caller error: coordinates and dimensions are validated up front and
//! nothing is clamped.

use thiserror::Error;

/// Fertile-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grid dimensions must both be positive
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinate outside `[0, height) x [0, width)`
    #[error("cell ({row}, {col}) out of bounds for {height} rows x {width} cols")]
    OutOfBounds {
        row: u32,
        col: u32,
        height: u32,
        width: u32,
    },

    /// Rectangle whose bottom-left corner lies above or right of its top-right corner
    #[error(
        "inverted rectangle: bottom-left ({}, {}) vs top-right ({}, {})",
        .bottom_left.0, .bottom_left.1, .top_right.0, .top_right.1
    )]
    InvertedRect {
        bottom_left: (u32, u32),
        top_right: (u32, u32),
    },

    /// Numeric cell state outside 0..=2
    #[error("invalid cell value: {0}")]
    InvalidCellValue(u8),
}

/// Result type alias for grid operations
pub type Result<T> = std::result::Result<T, Error>;
