//! Vessel definitions: a line of cells with a hit-point counter.

use alloc::vec::Vec;
use core::fmt;

use crate::coordinate::Coordinate;

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells advance along the column axis (`y`).
    Horizontal,
    /// Cells advance along the row axis (`x`).
    Vertical,
}

/// A vessel placed at `origin`, extending `length` cells along `orientation`.
///
/// Construction never checks bounds; [`Grid::place_vessel`](crate::Grid::place_vessel)
/// does.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Vessel {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    hit_points: usize,
}

impl Vessel {
    /// Create an undamaged vessel. Lengths below 1 are raised to 1.
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        let length = length.max(1);
        Self {
            origin,
            length,
            orientation,
            hit_points: length,
        }
    }

    /// Iterator over the occupied cells, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let length = i32::try_from(self.length).unwrap_or(i32::MAX);
        (0..length).map(move |i| match self.orientation {
            Orientation::Horizontal => Coordinate::new(self.origin.x, self.origin.y + i),
            Orientation::Vertical => Coordinate::new(self.origin.x + i, self.origin.y),
        })
    }

    /// Occupied cells in order from the origin.
    pub fn occupied_coordinates(&self) -> Vec<Coordinate> {
        self.cells().collect()
    }

    /// Returns `true` if `target` is one of the vessel's cells.
    pub fn is_hit_by(&self, target: Coordinate) -> bool {
        self.cells().any(|c| c == target)
    }

    /// Take one hit point away. Returns `true` if this hit sank the vessel.
    pub fn register_hit(&mut self) -> bool {
        if self.hit_points == 0 {
            return false;
        }
        self.hit_points -= 1;
        self.hit_points == 0
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hit_points(&self) -> usize {
        self.hit_points
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ origin: ({}, {}), length: {}, orientation: {:?}, hit_points: {} }}",
            self.origin.x, self.origin.y, self.length, self.orientation, self.hit_points,
        )
    }
}
