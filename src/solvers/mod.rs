mod bfs;
mod dfs;

use bfs::solve_bfs;
use dfs::solve_dfs;

use crate::{
    error::MazeError,
    maze::{Cell, Grid},
};

/// An ordered route from the entrance to a cell on the last row. Consecutive
/// coordinates are cardinally adjacent and open in the pre-solve grid.
pub type Path = Vec<(u16, u16)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Bfs,
    Dfs,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Strategy::Dfs => write!(f, "Depth-First Search (DFS)"),
        }
    }
}

/// Solves the maze on the given working copy.
///
/// The solver stamps [`Cell::Visited`] on the passage cells it consumes, so
/// callers keeping the carved layout should pass a clone. The start is the
/// leftmost passage cell on row 0; a grid without one is malformed and fails
/// with [`MazeError::NoStartFound`].
///
/// `Ok(None)` means the search exhausted the reachable cells without touching
/// the last row. That cannot happen for grids produced by
/// [`generate`](crate::generators::generate), whose spanning tree connects
/// both openings, but externally supplied grids may disconnect the rows.
pub fn solve(grid: &mut Grid, strategy: Strategy) -> Result<Option<Path>, MazeError> {
    let start = find_start(grid)?;
    tracing::debug!("[solve] {} from start {:?}", strategy, start);
    let path = match strategy {
        Strategy::Bfs => solve_bfs(grid, start),
        Strategy::Dfs => solve_dfs(grid, start),
    };
    Ok(path)
}

/// Leftmost passage cell on row 0.
fn find_start(grid: &Grid) -> Result<(u16, u16), MazeError> {
    (0..grid.width())
        .map(|x| (x, 0))
        .find(|&c| grid.get(c) == Ok(Cell::Passage))
        .ok_or(MazeError::NoStartFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::generate;

    const SEEDS: [u64; 5] = [0, 1, 7, 42, 1337];

    fn entrance_of(grid: &Grid) -> (u16, u16) {
        find_start(grid).unwrap()
    }

    /// Asserts the path runs entrance to last row over passage cells of the
    /// pre-solve grid, one cardinal step at a time.
    fn assert_valid_path(grid: &Grid, path: &[(u16, u16)]) {
        assert_eq!(path[0], entrance_of(grid));
        assert_eq!(path.last().unwrap().1, grid.height() - 1);
        for &coord in path {
            assert_eq!(grid[coord], Cell::Passage, "cell {coord:?} not open");
        }
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let dist = a.0.abs_diff(b.0) + a.1.abs_diff(b.1);
            assert_eq!(dist, 1, "{a:?} and {b:?} are not cardinally adjacent");
        }
    }

    #[test]
    fn generated_mazes_are_always_solvable() {
        for seed in SEEDS {
            for (w, h) in [(3, 3), (11, 11), (21, 15), (31, 31)] {
                let grid = generate(w, h, Some(seed)).unwrap();
                for strategy in [Strategy::Bfs, Strategy::Dfs] {
                    let path = solve(&mut grid.clone(), strategy)
                        .unwrap()
                        .unwrap_or_else(|| {
                            panic!("{strategy} found no path at {w}x{h}, seed {seed}")
                        });
                    assert_valid_path(&grid, &path);
                }
            }
        }
    }

    #[test]
    fn bfs_path_is_never_longer_than_dfs() {
        for seed in SEEDS {
            let grid = generate(31, 31, Some(seed)).unwrap();
            let bfs = solve(&mut grid.clone(), Strategy::Bfs).unwrap().unwrap();
            let dfs = solve(&mut grid.clone(), Strategy::Dfs).unwrap().unwrap();
            assert!(
                bfs.len() <= dfs.len(),
                "seed {seed}: BFS {} cells vs DFS {} cells",
                bfs.len(),
                dfs.len()
            );
        }
    }

    #[test]
    fn solving_is_deterministic() {
        for strategy in [Strategy::Bfs, Strategy::Dfs] {
            let grid = generate(21, 21, Some(42)).unwrap();
            let a = solve(&mut grid.clone(), strategy).unwrap();
            let b = solve(&mut grid.clone(), strategy).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn solving_leaves_the_original_grid_untouched() {
        let grid = generate(11, 11, Some(3)).unwrap();
        let mut work = grid.clone();
        solve(&mut work, Strategy::Bfs).unwrap().unwrap();
        assert_ne!(grid, work);
        // The working copy only gained visited markers; no wall was moved
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                assert_eq!(grid[(x, y)].is_open(), work[(x, y)].is_open());
            }
        }
    }

    #[test]
    fn all_walls_means_no_start() {
        let mut grid = Grid::new(5, 5, Cell::Wall);
        assert_eq!(
            solve(&mut grid, Strategy::Bfs),
            Err(MazeError::NoStartFound)
        );
        assert_eq!(
            solve(&mut grid, Strategy::Dfs),
            Err(MazeError::NoStartFound)
        );
    }

    #[test]
    fn walled_off_entrance_is_not_found() {
        // Seal the single chamber below the entrance of the smallest maze
        for strategy in [Strategy::Bfs, Strategy::Dfs] {
            let mut grid = generate(3, 3, Some(5)).unwrap();
            grid[(1, 1)] = Cell::Wall;
            assert_eq!(solve(&mut grid, strategy), Ok(None));
        }
    }

    #[test]
    fn severed_maze_is_not_found() {
        // Turning a full interior row back into wall cuts every route
        for strategy in [Strategy::Bfs, Strategy::Dfs] {
            let mut grid = generate(11, 11, Some(8)).unwrap();
            for x in 0..grid.width() {
                grid[(x, 5)] = Cell::Wall;
            }
            assert_eq!(solve(&mut grid, strategy), Ok(None));
        }
    }
}
