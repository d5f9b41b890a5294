use mazer::{Strategy, generate, overlay, render, solve};

fn main() -> std::io::Result<()> {
    let _guard = init_logging();

    let mut input = String::new();
    println!("Enter maze dimensions (width height). Both must be odd and at least 3:");
    std::io::stdin().read_line(&mut input)?;

    // Parse the input dimensions
    let dims = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<u16>().ok())
        .collect::<Vec<_>>();

    if dims.len() != 2 {
        eprintln!("Please enter two valid numbers for width and height.");
        return Ok(());
    }
    let (width, height) = (dims[0], dims[1]);

    println!("Enter a seed for a reproducible maze, or leave empty for a random one:");
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    let seed = match parse_seed(&input) {
        Ok(seed) => seed,
        Err(_) => {
            eprintln!("Please enter a valid seed number, or leave the line empty.");
            return Ok(());
        }
    };

    let grid = match generate(width, height, seed) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("{e}");
            return Ok(());
        }
    };
    tracing::info!("[main] generated {width}x{height} maze (seed: {seed:?})");
    render::display(&grid);

    // Let user select the solving algorithm
    println!("Select maze solving algorithm:");
    println!("1. {}", Strategy::Bfs);
    println!("2. {}", Strategy::Dfs);
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    let strategy = match input.trim() {
        "1" => Strategy::Bfs,
        "2" => Strategy::Dfs,
        _ => {
            eprintln!("Invalid selection.");
            return Ok(());
        }
    };

    // Solve on a working copy so the carved grid stays pristine
    let mut work = grid.clone();
    match solve(&mut work, strategy) {
        Ok(Some(path)) => {
            tracing::info!("[main] {strategy} found a path of {} cells", path.len());
            render::display(&overlay(&grid, &path));
            println!("Maze solved! Path length: {} cells.", path.len());
        }
        Ok(None) => {
            println!("No path found to the last row.");
        }
        Err(e) => {
            eprintln!("{e}");
        }
    }
    Ok(())
}

/// Empty input requests an unseeded maze; anything else must parse as a seed.
/// A typo must not silently fall back to randomness.
fn parse_seed(input: &str) -> Result<Option<u64>, std::num::ParseIntError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

/// Route log output to a file; stdout belongs to the maze view.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let appender = tracing_appender::rolling::never(".", "mazer.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_seed_input_means_random() {
        assert_eq!(parse_seed(""), Ok(None));
        assert_eq!(parse_seed("  \n"), Ok(None));
    }

    #[test]
    fn malformed_seed_input_is_rejected_not_randomized() {
        assert_eq!(parse_seed("42\n"), Ok(Some(42)));
        assert!(parse_seed("42x").is_err());
        assert!(parse_seed("-1").is_err());
    }
}
