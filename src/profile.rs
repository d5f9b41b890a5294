use std::time::{Duration, Instant};

use crate::{
    error::MazeError,
    generators::generate,
    solvers::{Strategy, solve},
};

/// Square maze sizes exercised by the timing harness.
pub const SIZES: [u16; 5] = [11, 21, 31, 41, 51];

/// Average solve times for one maze size.
pub struct SizeTiming {
    pub size: u16,
    pub avg_bfs: Duration,
    pub avg_dfs: Duration,
}

/// Times BFS against DFS across the size ladder.
///
/// Each iteration generates a fresh unseeded maze and solves it once per
/// strategy on an independent working copy, so the two strategies race on
/// identical layouts.
pub fn profile(iterations: usize) -> Result<Vec<SizeTiming>, MazeError> {
    let iterations = iterations.max(1);
    let mut results = Vec::with_capacity(SIZES.len());

    for size in SIZES {
        let mut total_bfs = Duration::ZERO;
        let mut total_dfs = Duration::ZERO;

        for _ in 0..iterations {
            let grid = generate(size, size, None)?;

            let mut work = grid.clone();
            let started = Instant::now();
            solve(&mut work, Strategy::Bfs)?;
            total_bfs += started.elapsed();

            let mut work = grid.clone();
            let started = Instant::now();
            solve(&mut work, Strategy::Dfs)?;
            total_dfs += started.elapsed();
        }

        tracing::info!(
            "[profile] {size}x{size}: BFS {:?}, DFS {:?} over {iterations} iterations",
            total_bfs / iterations as u32,
            total_dfs / iterations as u32,
        );
        results.push(SizeTiming {
            size,
            avg_bfs: total_bfs / iterations as u32,
            avg_dfs: total_dfs / iterations as u32,
        });
    }

    Ok(results)
}
