//! Grid - The fertility field
//!
//! `Grid` is a fixed-size field of [`Cell`] states. It is created all
//! fertile, carved with barren rectangles, and then consumed in place by the
//! region scanner.
//!
//! # Cell layout
//!
//! - Cells are stored in one row-major `Vec<Cell>`
//! - The cell at `(row, col)` lives at index `row * width + col`
//! - Row 0 is the first row stored and the first line rendered by `Display`

mod access;
mod fill;
mod neighbors;

pub use neighbors::Neighbors;

use crate::error::{Error, Result};
use std::fmt;
use tracing::debug;

/// Per-cell fertility state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    /// Excluded from every region
    Barren = 0,
    /// Eligible to belong to a region
    #[default]
    Fertile = 1,
    /// Fertile land already counted by a flood fill
    Consumed = 2,
}

impl Cell {
    /// Convert a numeric state (0, 1 or 2) into a cell
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCellValue`] for any other value.
    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Cell::Barren),
            1 => Ok(Cell::Fertile),
            2 => Ok(Cell::Consumed),
            v => Err(Error::InvalidCellValue(v)),
        }
    }

    /// Numeric state of this cell
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Check if the cell still belongs to an uncounted region
    #[inline]
    pub fn is_fertile(self) -> bool {
        self == Cell::Fertile
    }

    /// Character used by the `Display` rendering of a grid
    fn glyph(self) -> char {
        match self {
            Cell::Barren => '.',
            Cell::Fertile => '#',
            Cell::Consumed => '*',
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Cell::from_u8(value)
    }
}

/// Fixed-size field of cell states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell fertile
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is zero,
    /// or if the grid would hold more than `u32::MAX` cells.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, Cell::Fertile)
    }

    /// Create a new grid with every cell set to `value`
    ///
    /// The cell count is capped at `u32::MAX` so that any region area fits
    /// in a `u32`.
    pub fn new_filled(width: u32, height: u32, value: Cell) -> Result<Self> {
        let cells = width as u64 * height as u64;
        if width == 0 || height == 0 || cells > u32::MAX as u64 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        debug!(width, height, ?value, "created grid");
        Ok(Self {
            width,
            height,
            cells: vec![value; size],
        })
    }

    /// Number of columns
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn size(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of a single row
    ///
    /// Returns `None` if `row >= height`.
    pub fn row(&self, row: u32) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row as usize * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Count the cells currently in a given state
    pub fn count(&self, value: Cell) -> u64 {
        self.cells.iter().filter(|&&c| c == value).count() as u64
    }
}

impl fmt::Display for Grid {
    /// One line per row: `.` barren, `#` fertile, `*` consumed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.width as usize) {
            for cell in line {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
