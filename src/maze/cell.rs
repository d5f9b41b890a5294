use crossterm::style::{Color, Stylize};

use std::fmt;

/// Represents a cell in the grid: wall material, carved open space, or one of
/// the two transient markers stamped onto working/display copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Solid wall material.
    Wall,
    /// Carved open space.
    Passage,
    /// An open cell already consumed by a solver. Only appears on working
    /// copies, never on the carved original.
    Visited,
    /// An open cell on a solved route, stamped by the path overlay.
    Route,
}

impl Cell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Whether the cell is open space, i.e. anything but wall material.
    pub fn is_open(self) -> bool {
        !matches!(self, Cell::Wall)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Cell::Wall => "  ".on(Color::Black),
            Cell::Passage => "  ".on(Color::White),
            Cell::Visited => "  ".on(Color::Grey),
            Cell::Route => "  ".on(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Cell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_wall_is_closed() {
        assert!(!Cell::Wall.is_open());
        assert!(Cell::Passage.is_open());
        assert!(Cell::Visited.is_open());
        assert!(Cell::Route.is_open());
    }
}
