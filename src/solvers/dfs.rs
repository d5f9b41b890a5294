use super::Path;
use crate::maze::{Cell, Grid};

/// Depth-first descent with explicit backtracking. Always takes the first
/// unvisited passage neighbor in the fixed +x, -x, +y, -y order, so the
/// result is deterministic but not necessarily shortest. Dead-end detours are
/// popped off the ancestor stack and never appear in the returned path.
pub fn solve_dfs(grid: &mut Grid, start: (u16, u16)) -> Option<Path> {
    let last_row = grid.height() - 1;

    // Ancestors of the current cell, in descent order
    let mut stack: Path = Vec::new();
    let mut current = start;
    grid[current] = Cell::Visited;

    while current.1 < last_row {
        let neighbors = grid.neighbors_with_step(current, 1, |c| c == Cell::Passage);
        match neighbors.first() {
            Some(&next) => {
                grid[next] = Cell::Visited;
                stack.push(current);
                current = next;
            }
            // Dead end: drop back to the previous ancestor, or give up when
            // there is nothing left to back out to
            None => current = stack.pop()?,
        }
    }

    stack.push(current);
    Some(stack)
}
