use thiserror::Error;

/// Failures surfaced by generation and solving.
///
/// A solve that drains its frontier without reaching the last row is not an
/// error; it is reported as `Ok(None)` by [`solve`](crate::solvers::solve).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Generation requires odd dimensions of at least 3 in both axes.
    #[error("invalid maze dimensions {width}x{height}: both must be odd and at least 3")]
    InvalidDimensions { width: u16, height: u16 },
    /// Grid access outside the buffer. A caller bug, not recoverable input.
    #[error("grid access out of bounds at ({x}, {y})")]
    OutOfBounds { x: u16, y: u16 },
    /// The grid given to the solver has no passage cell on its entrance row.
    #[error("no start cell found on the entrance row")]
    NoStartFound,
}
