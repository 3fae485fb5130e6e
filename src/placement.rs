//! Random fleet placement with a bounded retry budget.

use log::debug;
use rand::Rng;

use crate::common::BoardError;
use crate::config::GameConfig;
use crate::coordinate::Coordinate;
use crate::grid::Grid;
use crate::vessel::{Orientation, Vessel};

/// A vessel of `length` at a random origin and orientation. The vessel may
/// stick out of the grid; placement rejects it in that case.
pub fn random_vessel<R: Rng + ?Sized>(rng: &mut R, size: usize, length: usize) -> Vessel {
    let orientation = if rng.random_bool(0.5) {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let origin = Coordinate::new(
        rng.random_range(0..size) as i32,
        rng.random_range(0..size) as i32,
    );
    Vessel::new(origin, length, orientation)
}

/// Try once to place the whole fleet on a fresh grid. Returns `None` when
/// `config.placement_attempts` random positions were used up, which happens
/// when earlier vessels left no room for a later one.
pub fn try_random_grid<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Option<Grid> {
    let mut grid = Grid::new(config.size);
    let mut attempts = 0;
    for &length in &config.fleet {
        loop {
            attempts += 1;
            if attempts > config.placement_attempts {
                return None;
            }
            let vessel = random_vessel(rng, config.size, length);
            match grid.place_vessel(vessel) {
                Ok(()) => break,
                Err(BoardError::OutOfBounds(_)) | Err(BoardError::OverlapOrAdjacency(_)) => {}
                Err(_) => return None,
            }
        }
    }
    grid.begin_turn_batch();
    Some(grid)
}

/// Build a grid holding the whole fleet, rebuilding from scratch whenever a
/// layout dead-ends.
pub fn random_grid<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Grid, BoardError> {
    config.validate()?;
    for rebuild in 0..config.max_rebuilds {
        if let Some(grid) = try_random_grid(config, rng) {
            debug!("fleet placed after {} rebuilds", rebuild);
            return Ok(grid);
        }
    }
    Err(BoardError::UnableToPlaceFleet {
        rebuilds: config.max_rebuilds,
    })
}
