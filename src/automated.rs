use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::agent::Agent;
use crate::common::{AgentError, ShotResult};
use crate::coordinate::Coordinate;
use crate::grid::Grid;

/// Computer opponent that fires at uniformly random cells.
///
/// It keeps no memory of earlier shots; repeated targets are refused by the
/// grid and the turn loop simply asks again.
pub struct AutomatedAgent {
    name: &'static str,
    rng: SmallRng,
}

impl AutomatedAgent {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            name: "Computer",
            rng,
        }
    }

    /// Agent with a reproducible stream of targets.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }
}

impl Agent for AutomatedAgent {
    fn name(&self) -> &str {
        self.name
    }

    fn choose_target(&mut self, opponent: &Grid) -> Result<Coordinate, AgentError> {
        let size = opponent.size();
        if size == 0 {
            return Err(AgentError::NoTargetsLeft);
        }
        Ok(Coordinate::new(
            self.rng.random_range(0..size) as i32,
            self.rng.random_range(0..size) as i32,
        ))
    }

    fn handle_shot_result(&mut self, target: Coordinate, result: ShotResult) {
        info!("{} shot at {}: {:?}", self.name, target, result);
    }
}
