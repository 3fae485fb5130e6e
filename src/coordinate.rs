//! Board positions.

use core::fmt;

/// Offsets of a cell and its eight neighbours.
static NEIGHBOURHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A 0-based position on a grid: `x` is the row, `y` the column.
///
/// Components are signed so positions just off the board (neighbours of edge
/// cells, a human typing `0`) can be represented and rejected by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if the position lies inside a `size`×`size` grid.
    pub fn within(&self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.x as i64)) && (0..size).contains(&(self.y as i64))
    }

    /// This position and its eight neighbours, row by row. May contain
    /// positions outside any grid.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOURHOOD
            .iter()
            .map(move |&(dx, dy)| Coordinate::new(self.x + dx, self.y + dy))
    }

    /// Chebyshev distance; `<= 1` means the two cells touch.
    pub fn chebyshev(&self, other: &Coordinate) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

/// Prints the 1-based "row column" form players type in.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x as i64 + 1, self.y as i64 + 1)
    }
}
