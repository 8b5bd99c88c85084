//! Coord, Rect - Cell addresses and inclusive rectangles
//!
//! Coordinates are always (row, col). Input formats that speak (x, y) must
//! go through [`Coord::from_xy`], which performs the axis swap.

use crate::error::{Error, Result};
use std::ops::RangeInclusive;

/// A cell address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Coord {
    /// Row index (0 at the first row)
    pub row: u32,
    /// Column index (0 at the first column)
    pub col: u32,
}

impl Coord {
    /// Create a coordinate from a (row, col) pair
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Create a coordinate from an (x, y) = (column, row) pair
    pub const fn from_xy(x: u32, y: u32) -> Self {
        Self { row: y, col: x }
    }
}

impl From<(u32, u32)> for Coord {
    /// Interprets the tuple as (row, col).
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

/// An inclusive rectangle of cells
///
/// `bottom_left` holds the smaller row and column, `top_right` the larger.
/// Both ends are part of the rectangle, so a rectangle whose corners are
/// equal covers exactly one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Corner with the smallest row and column
    pub bottom_left: Coord,
    /// Corner with the largest row and column
    pub top_right: Coord,
}

impl Rect {
    /// Create a rectangle from its two corners
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvertedRect`] if `bottom_left` lies above or right
    /// of `top_right`.
    pub fn new(bottom_left: Coord, top_right: Coord) -> Result<Self> {
        let rect = Self {
            bottom_left,
            top_right,
        };
        rect.validate()?;
        Ok(rect)
    }

    /// Create a rectangle covering a single cell
    pub const fn cell(coord: Coord) -> Self {
        Self {
            bottom_left: coord,
            top_right: coord,
        }
    }

    /// Check that the corners are in order
    ///
    /// The fields are public, so a rectangle built without [`Rect::new`]
    /// can be inverted; everything that writes cells validates first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvertedRect`] if `bottom_left` lies above or right
    /// of `top_right`.
    pub fn validate(&self) -> Result<()> {
        if !self.is_valid() {
            return Err(Error::InvertedRect {
                bottom_left: (self.bottom_left.row, self.bottom_left.col),
                top_right: (self.top_right.row, self.top_right.col),
            });
        }
        Ok(())
    }

    /// Check if the corners are in order
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.bottom_left.row <= self.top_right.row && self.bottom_left.col <= self.top_right.col
    }

    /// Rows covered, inclusive
    #[inline]
    pub fn rows(&self) -> RangeInclusive<u32> {
        self.bottom_left.row..=self.top_right.row
    }

    /// Columns covered, inclusive
    #[inline]
    pub fn cols(&self) -> RangeInclusive<u32> {
        self.bottom_left.col..=self.top_right.col
    }

    /// Number of rows covered (0 if inverted)
    #[inline]
    pub fn height(&self) -> u32 {
        span(self.bottom_left.row, self.top_right.row)
    }

    /// Number of columns covered (0 if inverted)
    #[inline]
    pub fn width(&self) -> u32 {
        span(self.bottom_left.col, self.top_right.col)
    }

    /// Number of cells covered
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Check if a cell lies inside the rectangle
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.rows().contains(&coord.row) && self.cols().contains(&coord.col)
    }
}

/// Inclusive length of `lo..=hi`, 0 when `hi < lo`.
#[inline]
fn span(lo: u32, hi: u32) -> u32 {
    hi.checked_sub(lo).map_or(0, |d| d.saturating_add(1))
}
