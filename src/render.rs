use crate::maze::{Cell, Grid};

/// Stamps a solved route onto a fresh display copy of the grid.
///
/// The returned grid is a throwaway view for rendering; the carved original
/// and the solved working copy are left untouched.
pub fn overlay(grid: &Grid, path: &[(u16, u16)]) -> Grid {
    let mut view = grid.clone();
    for &coord in path {
        view[coord] = Cell::Route;
    }
    view
}

/// Prints the grid to stdout, one two-column styled cell per coordinate.
pub fn display(grid: &Grid) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            print!("{}", grid[(x, y)]);
        }
        println!();
    }
}
