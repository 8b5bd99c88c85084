//! Orthogonal neighbor enumeration

use super::Grid;
use crate::error::Result;
use crate::geometry::Coord;

/// The in-bounds orthogonal neighbors of a cell
///
/// Yields up, down, left, right in that order, skipping directions that
/// would leave the grid.
#[derive(Debug, Clone)]
pub struct Neighbors {
    coords: [Coord; 4],
    len: u8,
    pos: u8,
}

impl Neighbors {
    fn push(&mut self, coord: Coord) {
        self.coords[self.len as usize] = coord;
        self.len += 1;
    }

    /// Remaining neighbors as a slice
    pub fn as_slice(&self) -> &[Coord] {
        &self.coords[self.pos as usize..self.len as usize]
    }
}

impl Iterator for Neighbors {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.pos == self.len {
            return None;
        }
        let coord = self.coords[self.pos as usize];
        self.pos += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.len - self.pos) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Neighbors {}

impl Grid {
    /// Enumerate the orthogonal neighbors of `(row, col)` that lie inside
    /// the grid.
    ///
    /// A corner cell has 2 neighbors, an edge cell 3 and an interior cell 4.
    /// On a grid one cell wide or tall the counts drop accordingly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) if
    /// `(row, col)` itself is outside the grid.
    pub fn neighbors(&self, row: u32, col: u32) -> Result<Neighbors> {
        self.index_of(row, col)?;
        Ok(self.neighbors_unchecked(Coord::new(row, col)))
    }

    /// Enumerate the in-grid orthogonal neighbors of a cell already known
    /// to be inside the grid.
    ///
    /// The result is unspecified for a cell outside the grid.
    pub fn neighbors_unchecked(&self, coord: Coord) -> Neighbors {
        let Coord { row, col } = coord;
        let mut out = Neighbors {
            coords: [Coord::default(); 4],
            len: 0,
            pos: 0,
        };
        if row > 0 {
            out.push(Coord::new(row - 1, col));
        }
        if row + 1 < self.height {
            out.push(Coord::new(row + 1, col));
        }
        if col > 0 {
            out.push(Coord::new(row, col - 1));
        }
        if col + 1 < self.width {
            out.push(Coord::new(row, col + 1));
        }
        out
    }
}
