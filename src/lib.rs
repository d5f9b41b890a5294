//! Perfect-maze generation and solving on rectangular grids.
//!
//! [`generate`] carves a spanning tree over the odd/odd chamber cells of a
//! [`Grid`] and punches an entrance and exit; [`solve`] runs either
//! breadth-first or depth-first search over a working copy and yields the
//! discovered [`Path`]; [`overlay`] stamps a path onto a display copy.
//! Every entry point takes an explicit seed, so identical inputs reproduce
//! identical mazes and paths.

pub mod error;
pub mod generators;
pub mod maze;
pub mod profile;
pub mod render;
pub mod solvers;

pub use error::MazeError;
pub use generators::generate;
pub use maze::{Cell, Grid};
pub use render::overlay;
pub use solvers::{Path, Strategy, solve};
