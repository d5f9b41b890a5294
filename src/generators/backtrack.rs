use rand::{Rng, rngs::StdRng};

use crate::maze::{Cell, Grid};

/// Randomized iterative backtracking: carve a depth-first spanning tree over
/// the odd/odd chamber cells, opening the connector cell midway between each
/// carved pair, then punch the entrance and exit openings.
///
/// Dimensions are validated by the caller; both are odd and at least 3 here.
pub fn recursive_backtrack(width: u16, height: u16, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(width, height, Cell::Wall);

    // Start carving from a random chamber cell
    let start = (
        rng.random_range(0..width / 2) * 2 + 1,
        rng.random_range(0..height / 2) * 2 + 1,
    );
    grid[start] = Cell::Passage;
    tracing::debug!("[carve] starting at {:?}", start);

    // The stack keeps only carved chamber cells
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        // Chamber neighbors two cells away that are still sealed off
        let neighbors = grid.neighbors_with_step(cell, 2, |c| c == Cell::Wall);
        if neighbors.is_empty() {
            // Dead end: backtrack to the previously carved chamber
            continue;
        }

        let next = neighbors[rng.random_range(0..neighbors.len())];
        // Open the chosen chamber and the connector between the two
        grid[next] = Cell::Passage;
        grid[((cell.0 + next.0) / 2, (cell.1 + next.1) / 2)] = Cell::Passage;

        // Put the cell back first so we can look at another neighbor of this cell later
        stack.push(cell);
        // Put the neighbor to carve the maze in that neighbor's direction
        stack.push(next);
    }

    // Entrance on the top row, exit on the bottom row. The two columns are
    // chosen independently and may coincide.
    let entrance = rng.random_range(0..width / 2) * 2 + 1;
    let exit = rng.random_range(0..width / 2) * 2 + 1;
    grid[(entrance, 0)] = Cell::Passage;
    grid[(exit, height - 1)] = Cell::Passage;
    tracing::debug!("[carve] entrance at x={}, exit at x={}", entrance, exit);

    grid
}
