use rand::{SeedableRng, rngs::StdRng};

mod backtrack;

use backtrack::recursive_backtrack;

use crate::{error::MazeError, maze::Grid};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Carves a perfect maze of the given dimensions.
///
/// `width` and `height` are full grid dimensions, walls included, and must
/// both be odd and at least 3; anything else is rejected before any cell is
/// touched. Chamber cells sit at odd/odd coordinates and the carved chambers
/// form a spanning tree, so exactly one route exists between any two of them.
/// A random entrance is punched on row 0 and a random exit on the last row.
///
/// The same seed always yields the same grid.
pub fn generate(width: u16, height: u16, seed: Option<u64>) -> Result<Grid, MazeError> {
    if width < 3 || height < 3 || width % 2 == 0 || height % 2 == 0 {
        return Err(MazeError::InvalidDimensions { width, height });
    }
    let mut rng = get_rng(seed);
    Ok(recursive_backtrack(width, height, &mut rng))
}
