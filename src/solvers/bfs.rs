use std::collections::{HashMap, VecDeque};

use super::Path;
use crate::maze::{Cell, Grid};

/// Breadth-first search from the entrance. The frontier expands in
/// non-decreasing distance order, so the first cell dequeued on the last row
/// ends the shortest route by cell count. Returns `None` when the frontier
/// drains first.
pub fn solve_bfs(grid: &mut Grid, start: (u16, u16)) -> Option<Path> {
    let last_row = grid.height() - 1;

    let mut frontier = VecDeque::from([start]);
    // Maps each discovered cell to the cell it was reached from; doubles as
    // the dedup set that keeps a cell from being enqueued twice.
    let mut origins: HashMap<(u16, u16), (u16, u16)> = HashMap::new();

    while let Some(cell) = frontier.pop_front() {
        grid[cell] = Cell::Visited;

        if cell.1 == last_row {
            // Walk the origin map back to the entrance, then flip it forward
            let mut path = vec![cell];
            let mut node = cell;
            while let Some(&parent) = origins.get(&node) {
                node = parent;
                path.push(node);
            }
            path.reverse();
            return Some(path);
        }

        for neighbor in grid.neighbors_with_step(cell, 1, |c| c == Cell::Passage) {
            if !origins.contains_key(&neighbor) {
                origins.insert(neighbor, cell);
                frontier.push_back(neighbor);
            }
        }
    }

    None
}
