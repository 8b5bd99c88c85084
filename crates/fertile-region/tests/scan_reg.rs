//! Region scan regression test
//!
//! Run with:
//! ```
//! cargo test -p fertile-region --test scan_reg
//! ```

use fertile_core::{Cell, Coord, Grid, Rect};
use fertile_region::{compute_sorted_areas, flood_fill, sorted_areas};
use fertile_test::RegParams;

fn rect(r0: u32, c0: u32, r1: u32, c1: u32) -> Rect {
    Rect::new(Coord::new(r0, c0), Coord::new(r1, c1)).unwrap()
}

#[test]
fn scan_reg() {
    let mut rp = RegParams::new("scan");

    // -----------------------------------------------------------
    // A fresh grid is one region covering every cell
    // -----------------------------------------------------------
    for (w, h) in [(1, 1), (5, 5), (1, 37), (400, 600)] {
        let mut grid = Grid::new(w, h).unwrap();
        let areas = compute_sorted_areas(&mut grid);
        rp.compare_areas(&[w * h], &areas);
    }

    // -----------------------------------------------------------
    // Three isolated single cells in an otherwise barren grid
    // -----------------------------------------------------------
    let mut grid = Grid::new(10, 14).unwrap();
    grid.fill_rectangle(&rect(0, 0, 13, 9), Cell::Barren).unwrap();
    for (row, col) in [(2, 2), (7, 5), (12, 8)] {
        grid.set(row, col, Cell::Fertile).unwrap();
    }
    let areas = compute_sorted_areas(&mut grid);
    rp.compare_areas(&[1, 1, 1], &areas);

    // -----------------------------------------------------------
    // Two fertile rectangles sharing an edge merge into one region
    // -----------------------------------------------------------
    let mut grid = Grid::new_filled(20, 20, Cell::Barren).unwrap();
    let a = rect(2, 2, 5, 8); // 4 x 7
    let b = rect(6, 4, 10, 6); // 5 x 3, touches a along row 5/6
    grid.fill_rectangle(&a, Cell::Fertile).unwrap();
    grid.fill_rectangle(&b, Cell::Fertile).unwrap();
    let areas = compute_sorted_areas(&mut grid);
    rp.compare_areas(&[(a.area() + b.area()) as u32], &areas);

    // Touching only at a corner keeps them apart
    let mut grid = Grid::new_filled(20, 20, Cell::Barren).unwrap();
    grid.fill_rectangle(&rect(0, 0, 1, 1), Cell::Fertile).unwrap();
    grid.fill_rectangle(&rect(2, 2, 4, 4), Cell::Fertile).unwrap();
    let areas = compute_sorted_areas(&mut grid);
    rp.compare_areas(&[4, 9], &areas);

    // -----------------------------------------------------------
    // A barren ring splits inside from outside
    // -----------------------------------------------------------
    let mut grid = Grid::new(9, 9).unwrap();
    grid.fill_rectangle(&rect(2, 2, 6, 6), Cell::Barren).unwrap();
    grid.fill_rectangle(&rect(3, 3, 5, 5), Cell::Fertile).unwrap();
    let before = grid.count(Cell::Fertile);
    let areas = sorted_areas(&grid);
    rp.compare_areas(&[9, 56], &areas);
    rp.compare_values(before as f64, areas.iter().sum::<u32>() as f64, 0.0);

    // -----------------------------------------------------------
    // A flood fill from one cell counts only that region
    // -----------------------------------------------------------
    let mut grid = Grid::new(9, 9).unwrap();
    grid.fill_rectangle(&rect(0, 4, 8, 4), Cell::Barren).unwrap();
    let left = flood_fill(&mut grid, Coord::new(8, 0)).unwrap();
    rp.compare_values(36.0, left as f64, 0.0);
    let rest = compute_sorted_areas(&mut grid);
    rp.compare_areas(&[36], &rest);

    assert!(rp.cleanup(), "scan regression test failed");
}
