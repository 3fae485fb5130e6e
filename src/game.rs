use alloc::boxed::Box;

use log::info;
use rand::Rng;

use crate::{
    agent::Agent,
    common::{AgentError, BoardError},
    config::GameConfig,
    grid::Grid,
    placement::random_grid,
};

/// One of the two seats at the table. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SideId {
    First,
    Second,
}

impl SideId {
    pub fn opponent(self) -> SideId {
        match self {
            SideId::First => SideId::Second,
            SideId::Second => SideId::First,
        }
    }

    fn index(self) -> usize {
        match self {
            SideId::First => 0,
            SideId::Second => 1,
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Finished { winner: SideId },
}

/// Final numbers of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: SideId,
    pub turn_cycles: usize,
    /// Accepted shots fired by each side.
    pub shots: [usize; 2],
    /// Vessels each side lost.
    pub sunk: [usize; 2],
}

/// Two agents, their grids, and whose turn it is.
pub struct Match {
    config: GameConfig,
    agents: [Box<dyn Agent>; 2],
    grids: [Grid; 2],
    active: SideId,
    turn_cycles: usize,
    shots: [usize; 2],
    status: MatchStatus,
}

impl Match {
    /// Create a match with both fleets placed at random. The second side's
    /// grid is hidden.
    pub fn new<R: Rng + ?Sized>(
        config: GameConfig,
        first: Box<dyn Agent>,
        second: Box<dyn Agent>,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        config.validate()?;
        let mut game = Self::with_grids(
            config.clone(),
            (first, Grid::new(config.size)),
            (second, Grid::new(config.size)),
        );
        game.setup_grids(rng)?;
        Ok(game)
    }

    /// Create a match from grids laid out by the caller.
    ///
    /// A side loses once it has lost `config.fleet_size()` vessels, or every
    /// vessel on its grid if the grid holds fewer.
    pub fn with_grids(
        config: GameConfig,
        first: (Box<dyn Agent>, Grid),
        second: (Box<dyn Agent>, Grid),
    ) -> Self {
        let mut game = Match {
            config,
            agents: [first.0, second.0],
            grids: [first.1, second.1],
            active: SideId::First,
            turn_cycles: 0,
            shots: [0; 2],
            status: MatchStatus::InProgress,
        };
        game.update_status();
        game
    }

    /// Lay out a fresh random fleet for both sides and restart the match.
    pub fn setup_grids<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let first = random_grid(&self.config, rng)?;
        let mut second = random_grid(&self.config, rng)?;
        second.set_hidden(true);
        self.grids = [first, second];
        self.active = SideId::First;
        self.turn_cycles = 0;
        self.shots = [0; 2];
        self.status = MatchStatus::InProgress;
        info!(
            "match ready: {}x{} board, {} vessels per side",
            self.config.size,
            self.config.size,
            self.config.fleet_size()
        );
        Ok(())
    }

    /// Play one turn cycle of the active side: shots continue while they
    /// hit and the match is not over, then the turn passes.
    pub fn run_turn_cycle(&mut self) -> Result<MatchStatus, AgentError> {
        if self.is_finished() {
            return Ok(self.status);
        }
        let me = self.active.index();
        let them = self.active.opponent().index();
        self.grids[them].begin_turn_batch();

        loop {
            let repeat = self.agents[me].take_turn(&mut self.grids[them])?;
            self.shots[me] += 1;
            self.update_status();
            if self.is_finished() || !repeat {
                break;
            }
        }

        self.turn_cycles += 1;
        if let MatchStatus::Finished { winner } = self.status {
            info!(
                "{} wins after {} turn cycles",
                self.agents[winner.index()].name(),
                self.turn_cycles
            );
        } else {
            self.active = self.active.opponent();
        }
        Ok(self.status)
    }

    /// Run turn cycles until one side has lost its whole fleet.
    pub fn play_out(&mut self) -> Result<MatchSummary, AgentError> {
        loop {
            if let MatchStatus::Finished { winner } = self.run_turn_cycle()? {
                return Ok(self.summary_for(winner));
            }
        }
    }

    /// Final numbers, once the match is finished.
    pub fn summary(&self) -> Option<MatchSummary> {
        match self.status {
            MatchStatus::Finished { winner } => Some(self.summary_for(winner)),
            MatchStatus::InProgress => None,
        }
    }

    fn summary_for(&self, winner: SideId) -> MatchSummary {
        MatchSummary {
            winner,
            turn_cycles: self.turn_cycles,
            shots: self.shots,
            sunk: [self.grids[0].sunk_count(), self.grids[1].sunk_count()],
        }
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, MatchStatus::Finished { .. })
    }

    /// Side whose turn cycle runs next.
    pub fn active_side(&self) -> SideId {
        self.active
    }

    pub fn turn_cycles(&self) -> usize {
        self.turn_cycles
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Grid defended by `side`.
    pub fn grid(&self, side: SideId) -> &Grid {
        &self.grids[side.index()]
    }

    pub fn agent(&self, side: SideId) -> &dyn Agent {
        self.agents[side.index()].as_ref()
    }

    fn fleet_lost(&self, grid: &Grid) -> bool {
        grid.sunk_count() >= self.config.fleet_size() || grid.all_sunk()
    }

    fn update_status(&mut self) {
        // Defender first: the shooter takes a simultaneous wipe-out.
        let active = self.active;
        for side in [active.opponent(), active] {
            if self.fleet_lost(&self.grids[side.index()]) {
                self.status = MatchStatus::Finished {
                    winner: side.opponent(),
                };
                return;
            }
        }
    }
}
