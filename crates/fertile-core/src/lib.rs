//! Fertile Core - Grid data structures for fertile land analysis
//!
//! This crate provides the passive data structures the region scanner works
//! on:
//!
//! - [`Grid`] - Fixed-size row-major field of [`Cell`] states
//! - [`Cell`] - Per-cell state (barren, fertile, consumed)
//! - [`Coord`] - A (row, col) cell address
//! - [`Rect`] - An inclusive rectangle of cells
//!
//! # Example
//!
//! ```
//! use fertile_core::{Cell, Coord, Grid, Rect};
//!
//! let mut grid = Grid::new(10, 4).unwrap();
//! let bar = Rect::new(Coord::new(1, 0), Coord::new(2, 9)).unwrap();
//! grid.fill_rectangle(&bar, Cell::Barren).unwrap();
//!
//! assert_eq!(grid.count(Cell::Barren), 20);
//! assert_eq!(grid.count(Cell::Fertile), 20);
//! ```

pub mod error;
pub mod geometry;
pub mod grid;

pub use error::{Error, Result};
pub use geometry::{Coord, Rect};
pub use grid::{Cell, Grid, Neighbors};
