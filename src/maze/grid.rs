use super::cell::Cell;
use crate::error::MazeError;

/// Row-major cell buffer shared by the generator, the solvers, and the path
/// overlay. Cloned freely; working and display copies never alias the carved
/// original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid of the given dimensions with every cell set to `cell`.
    pub fn new(width: u16, height: u16, cell: Cell) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Checks if the given coordinate is within the bounds of the grid.
    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    /// Checked read of a cell state.
    pub fn get(&self, coord: (u16, u16)) -> Result<Cell, MazeError> {
        if !self.is_in_bounds(coord) {
            return Err(MazeError::OutOfBounds {
                x: coord.0,
                y: coord.1,
            });
        }
        Ok(self.data[self.ravel_index(coord.0, coord.1)])
    }

    /// Checked write; overwrites the cell in place.
    pub fn set(&mut self, coord: (u16, u16), cell: Cell) -> Result<(), MazeError> {
        if !self.is_in_bounds(coord) {
            return Err(MazeError::OutOfBounds {
                x: coord.0,
                y: coord.1,
            });
        }
        let idx = self.ravel_index(coord.0, coord.1);
        self.data[idx] = cell;
        Ok(())
    }

    /// Returns the in-bounds cardinal neighbors at offset magnitude `step`
    /// whose cell state satisfies `predicate`, in fixed +x, -x, +y, -y order.
    ///
    /// Carving walks chamber to chamber at step 2; traversal walks the carved
    /// grid at step 1. The order is fixed so that runs with the same seed
    /// reproduce the same maze and the same paths; correctness does not
    /// depend on it.
    pub fn neighbors_with_step(
        &self,
        coord: (u16, u16),
        step: u16,
        predicate: impl Fn(Cell) -> bool,
    ) -> Vec<(u16, u16)> {
        // Widen to i32 so offsets near either edge cannot wrap
        let (x, y) = (coord.0 as i32, coord.1 as i32);
        let step = step as i32;
        [(x + step, y), (x - step, y), (x, y + step), (x, y - step)]
            .into_iter()
            .filter(|&(nx, ny)| {
                0 <= nx && nx < self.width as i32 && 0 <= ny && ny < self.height as i32
            })
            .map(|(nx, ny)| (nx as u16, ny as u16))
            .filter(|&c| predicate(self[c]))
            .collect()
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Grid {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}
