//! Cell access functions
//!
//! Bounds-checked reads and writes of single cells. Every accessor fails
//! with [`Error::OutOfBounds`] instead of clamping.

use super::{Cell, Grid};
use crate::error::{Error, Result};
use crate::geometry::Coord;

impl Grid {
    /// Check if a cell address lies inside the grid
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Validate a cell address and return its index into the cell vector.
    pub(crate) fn index_of(&self, row: u32, col: u32) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(Error::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row as usize * self.width as usize + col as usize)
    }

    /// Get the state of the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the cell is outside the grid.
    pub fn get(&self, row: u32, col: u32) -> Result<Cell> {
        let idx = self.index_of(row, col)?;
        Ok(self.cells[idx])
    }

    /// Set the state of the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the cell is outside the grid.
    pub fn set(&mut self, row: u32, col: u32, value: Cell) -> Result<()> {
        let idx = self.index_of(row, col)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Get the state of a cell by address.
    pub fn get_at(&self, coord: Coord) -> Result<Cell> {
        self.get(coord.row, coord.col)
    }

    /// Set the state of a cell by address.
    pub fn set_at(&mut self, coord: Coord, value: Cell) -> Result<()> {
        self.set(coord.row, coord.col, value)
    }

    /// Get a cell without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the cell vector.
    #[inline]
    pub fn get_unchecked(&self, coord: Coord) -> Cell {
        self.cells[coord.row as usize * self.width as usize + coord.col as usize]
    }

    /// Set a cell without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the cell vector.
    #[inline]
    pub fn set_unchecked(&mut self, coord: Coord, value: Cell) {
        let idx = coord.row as usize * self.width as usize + coord.col as usize;
        self.cells[idx] = value;
    }
}
