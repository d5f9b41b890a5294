use mazer::profile::{SizeTiming, profile};

fn main() {
    tracing_subscriber::fmt().init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let iterations = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(5);

    match profile(iterations) {
        Ok(results) => {
            println!("Average solve time over {iterations} iterations per size:");
            println!("{:>7} {:>7} {:>14} {:>14}", "size", "cells", "BFS", "DFS");
            for SizeTiming {
                size,
                avg_bfs,
                avg_dfs,
            } in results
            {
                println!(
                    "{:>4}x{:<2} {:>7} {:>14.3?} {:>14.3?}",
                    size,
                    size,
                    size as u32 * size as u32,
                    avg_bfs,
                    avg_dfs
                );
            }
        }
        Err(e) => eprintln!("profiling failed: {e}"),
    }
}
