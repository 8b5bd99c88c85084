//! Rectangular bulk fill
//!
//! Used to carve barren land before scanning, although the fill itself
//! writes whatever state it is given.

use super::{Cell, Grid};
use crate::error::Result;
use crate::geometry::Rect;
use tracing::debug;

impl Grid {
    /// Set every cell of an inclusive rectangle to `value`.
    ///
    /// The rectangle is validated before any cell is written, so a failed
    /// call leaves the grid untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::InvertedRect`](crate::Error::InvertedRect) if the corners
    ///   are out of order
    /// - [`Error::OutOfBounds`](crate::Error::OutOfBounds) if either corner
    ///   lies outside the grid
    pub fn fill_rectangle(&mut self, rect: &Rect, value: Cell) -> Result<()> {
        self.check_rect(rect)?;

        let width = self.width as usize;
        let (c0, c1) = (
            rect.bottom_left.col as usize,
            rect.top_right.col as usize,
        );
        for row in rect.rows() {
            let start = row as usize * width;
            self.cells[start + c0..=start + c1].fill(value);
        }

        debug!(
            bottom_left = ?rect.bottom_left,
            top_right = ?rect.top_right,
            ?value,
            "filled rectangle"
        );
        Ok(())
    }

    /// Fill several rectangles with the same value.
    ///
    /// Every rectangle is validated first; on error no rectangle is applied.
    pub fn fill_rectangles(&mut self, rects: &[Rect], value: Cell) -> Result<()> {
        for rect in rects {
            self.check_rect(rect)?;
        }
        for rect in rects {
            self.fill_rectangle(rect, value)?;
        }
        Ok(())
    }

    /// Validate corner order, then both corners against the grid.
    fn check_rect(&self, rect: &Rect) -> Result<()> {
        rect.validate()?;
        self.index_of(rect.bottom_left.row, rect.bottom_left.col)?;
        self.index_of(rect.top_right.row, rect.top_right.col)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::geometry::Coord;

    #[test]
    fn test_fill_rectangle_inclusive() {
        let mut grid = Grid::new(400, 600).unwrap();
        let rect = Rect::new(Coord::new(35, 0), Coord::new(63, 77)).unwrap();
        grid.fill_rectangle(&rect, Cell::Barren).unwrap();

        for row in rect.rows() {
            for col in rect.cols() {
                assert_eq!(grid.get(row, col), Ok(Cell::Barren));
            }
        }
        assert_eq!(grid.count(Cell::Barren), rect.area());
        assert_eq!(grid.get(34, 0), Ok(Cell::Fertile));
        assert_eq!(grid.get(63, 78), Ok(Cell::Fertile));
    }

    #[test]
    fn test_fill_whole_grid() {
        let mut grid = Grid::new(5, 5).unwrap();
        let rect = Rect::new(Coord::new(0, 0), Coord::new(4, 4)).unwrap();
        grid.fill_rectangle(&rect, Cell::Consumed).unwrap();
        assert_eq!(grid.count(Cell::Consumed), 25);
    }

    #[test]
    fn test_fill_out_of_bounds_leaves_grid_untouched() {
        let mut grid = Grid::new(5, 5).unwrap();
        let rect = Rect::new(Coord::new(1, 1), Coord::new(5, 3)).unwrap();
        assert!(matches!(
            grid.fill_rectangle(&rect, Cell::Barren),
            Err(Error::OutOfBounds { row: 5, .. })
        ));
        assert_eq!(grid.count(Cell::Fertile), 25);
    }

    #[test]
    fn test_fill_rectangles_all_or_nothing() {
        let mut grid = Grid::new(5, 5).unwrap();
        let good = Rect::cell(Coord::new(0, 0));
        let bad = Rect::cell(Coord::new(0, 9));
        assert!(grid.fill_rectangles(&[good, bad], Cell::Barren).is_err());
        assert_eq!(grid.count(Cell::Barren), 0);

        grid.fill_rectangles(&[good, Rect::cell(Coord::new(4, 4))], Cell::Barren)
            .unwrap();
        assert_eq!(grid.count(Cell::Barren), 2);
    }

    #[test]
    fn test_fill_inverted_rect() {
        let mut grid = Grid::new(10, 10).unwrap();
        let inverted_cols = Rect {
            bottom_left: Coord::new(0, 5),
            top_right: Coord::new(2, 1),
        };
        let inverted_rows = Rect {
            bottom_left: Coord::new(5, 0),
            top_right: Coord::new(1, 3),
        };
        for rect in [inverted_cols, inverted_rows] {
            assert!(matches!(
                grid.fill_rectangle(&rect, Cell::Barren),
                Err(Error::InvertedRect { .. })
            ));
        }
        assert!(matches!(
            grid.fill_rectangles(&[Rect::cell(Coord::new(0, 0)), inverted_rows], Cell::Barren),
            Err(Error::InvertedRect { .. })
        ));
        assert_eq!(grid.count(Cell::Fertile), 100);
    }
}
