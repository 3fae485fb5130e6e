//! Grid state: cell matrix, placed vessels, shot history.
//!
//! A grid enforces the two rules of the game board. Vessels never touch,
//! not even diagonally: every placed vessel reserves the ring of cells
//! around it. A cell can be fired upon once: hits, misses and the ring
//! revealed around a sunk vessel are all remembered as targeted.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use log::debug;

use crate::common::{BoardError, ShotResult};
use crate::coordinate::Coordinate;
use crate::vessel::Vessel;

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    Occupied,
    Hit,
    Miss,
    /// Revealed ring around a sunk vessel.
    Buffer,
}

impl CellState {
    fn glyph(self, reveal_ships: bool) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Occupied if reveal_ships => 'S',
            CellState::Occupied => '.',
            CellState::Hit => 'X',
            CellState::Miss => 'o',
            CellState::Buffer => '*',
        }
    }
}

/// A resolved shot, kept for the current turn batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub target: Coordinate,
    pub result: ShotResult,
}

pub struct Grid {
    size: usize,
    hidden: bool,
    sunk_count: usize,
    cells: Vec<CellState>,
    occupied: BTreeSet<Coordinate>,
    vessels: Vec<Vessel>,
    targeted: BTreeSet<Coordinate>,
    buffer: BTreeSet<Coordinate>,
    recent: Vec<Shot>,
}

impl Grid {
    /// Create an empty `size`×`size` grid with its vessels visible.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            hidden: false,
            sunk_count: 0,
            cells: vec![CellState::Empty; size * size],
            occupied: BTreeSet::new(),
            vessels: Vec::new(),
            targeted: BTreeSet::new(),
            buffer: BTreeSet::new(),
            recent: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Hidden grids render occupied cells as empty by default.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Number of vessels with no hit points left.
    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Returns `true` when every placed vessel is sunk.
    pub fn all_sunk(&self) -> bool {
        self.sunk_count == self.vessels.len()
    }

    pub fn occupied_coordinates(&self) -> &BTreeSet<Coordinate> {
        &self.occupied
    }

    /// Cell state at `coord`, or `None` outside the grid.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.index(coord).map(|i| self.cells[i])
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.within(self.size)
    }

    /// Returns `true` if a shot at `coord` would be rejected as already targeted.
    pub fn is_targeted(&self, coord: Coordinate) -> bool {
        self.targeted.contains(&coord)
    }

    /// Cells that can still be fired upon.
    pub fn untargeted_count(&self) -> usize {
        self.size * self.size - self.targeted.len()
    }

    /// Shots resolved against this grid since the last [`Grid::begin_turn_batch`].
    pub fn recent_shots(&self) -> &[Shot] {
        &self.recent
    }

    /// Start a new turn batch: forget the recent-shot log but keep all
    /// shot history.
    pub fn begin_turn_batch(&mut self) {
        self.recent.clear();
    }

    /// Place `vessel`, reserving the ring of cells around it.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if vessel.length() > self.size {
            return Err(BoardError::OutOfBounds(vessel.origin()));
        }
        for cell in vessel.cells() {
            if !self.contains(cell) {
                return Err(BoardError::OutOfBounds(cell));
            }
        }
        for cell in vessel.cells() {
            if self.occupied.contains(&cell) || self.buffer.contains(&cell) {
                return Err(BoardError::OverlapOrAdjacency(cell));
            }
        }

        for cell in vessel.cells() {
            self.set_cell(cell, CellState::Occupied);
            self.occupied.insert(cell);
        }
        let ring = self.ring(&vessel);
        self.buffer.extend(ring);
        debug!("placed {:?}", vessel);
        self.vessels.push(vessel);
        Ok(())
    }

    /// Fire at `target` and report what the shot did.
    pub fn fire_at(&mut self, target: Coordinate) -> Result<ShotResult, BoardError> {
        if !self.contains(target) {
            return Err(BoardError::OutOfBounds(target));
        }
        if self.targeted.contains(&target) {
            return Err(BoardError::AlreadyTargeted(target));
        }
        self.targeted.insert(target);

        let result = match self.vessels.iter().position(|v| v.is_hit_by(target)) {
            Some(idx) => {
                self.set_cell(target, CellState::Hit);
                if self.vessels[idx].register_hit() {
                    self.sunk_count += 1;
                    let vessel = self.vessels[idx];
                    self.reveal_ring(&vessel);
                    ShotResult::Sunk
                } else {
                    ShotResult::Hit
                }
            }
            None => {
                self.set_cell(target, CellState::Miss);
                ShotResult::Miss
            }
        };
        self.recent.push(Shot { target, result });
        Ok(result)
    }

    /// Render the grid as text. Occupied cells show only when `reveal_ships`
    /// is set; hits, misses and revealed rings always show.
    pub fn render(&self, reveal_ships: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_grid(&mut out, reveal_ships);
        out
    }

    fn write_grid<W: Write>(&self, out: &mut W, reveal_ships: bool) -> fmt::Result {
        write!(out, "   ")?;
        for c in 0..self.size {
            write!(out, "{:>3}", c + 1)?;
        }
        for r in 0..self.size {
            writeln!(out)?;
            write!(out, "{:>3}", r + 1)?;
            for c in 0..self.size {
                write!(out, "{:>3}", self.cells[r * self.size + c].glyph(reveal_ships))?;
            }
        }
        Ok(())
    }

    /// In-bounds cells touching `vessel` that the vessel does not occupy.
    fn ring(&self, vessel: &Vessel) -> Vec<Coordinate> {
        let mut ring = Vec::new();
        for cell in vessel.cells() {
            for near in cell.neighbourhood() {
                if self.contains(near) && !self.occupied.contains(&near) && !ring.contains(&near) {
                    ring.push(near);
                }
            }
        }
        ring
    }

    fn reveal_ring(&mut self, vessel: &Vessel) {
        for near in self.ring(vessel) {
            if self.cell(near) == Some(CellState::Empty) {
                self.set_cell(near, CellState::Buffer);
            }
            self.targeted.insert(near);
        }
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.x as usize * self.size + coord.y as usize)
        } else {
            None
        }
    }

    fn set_cell(&mut self, coord: Coordinate, state: CellState) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = state;
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, !self.hidden)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("size", &self.size)
            .field("hidden", &self.hidden)
            .field("sunk_count", &self.sunk_count)
            .field("vessels", &self.vessels)
            .field("targeted", &self.targeted.len())
            .finish()
    }
}
