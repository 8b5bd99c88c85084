//! Field configuration

use fertile_core::{Error, Result};

/// Default field width in columns
pub const DEFAULT_WIDTH: u32 = 400;

/// Default field height in rows
pub const DEFAULT_HEIGHT: u32 = 600;

/// Dimensions of the field to analyze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConfig {
    /// Number of columns
    pub width: u32,
    /// Number of rows
    pub height: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl FieldConfig {
    /// Create a configuration with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Set the width
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the height
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Check that both dimensions are positive
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
