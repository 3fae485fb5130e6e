use log::debug;

use crate::common::{AgentError, BoardError, ShotResult};
use crate::coordinate::Coordinate;
use crate::grid::Grid;

/// Interface implemented by the two kinds of player.
///
/// An agent only decides where to shoot. The match owns both grids and
/// lends the opponent grid to the agent for the length of one turn.
pub trait Agent {
    /// Name used in logs and console messages.
    fn name(&self) -> &str;

    /// Pick the next coordinate to fire at. Legality is checked by the
    /// grid, not here.
    fn choose_target(&mut self, opponent: &Grid) -> Result<Coordinate, AgentError>;

    /// Inform the agent that the grid refused its last target.
    fn handle_rejection(&mut self, _target: Coordinate, _error: &BoardError) {}

    /// Inform the agent of the outcome of an accepted shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _result: ShotResult) {}

    /// Fire one accepted shot at `opponent`, retrying on board-rule
    /// violations. Returns `true` if the shot earns another one.
    fn take_turn(&mut self, opponent: &mut Grid) -> Result<bool, AgentError> {
        if opponent.untargeted_count() == 0 {
            return Err(AgentError::NoTargetsLeft);
        }
        loop {
            let target = self.choose_target(opponent)?;
            match opponent.fire_at(target) {
                Ok(result) => {
                    debug!("{} fired at {} -> {:?}", self.name(), target, result);
                    self.handle_shot_result(target, result);
                    return Ok(result.grants_repeat());
                }
                Err(err) => {
                    debug!("{} rejected at {}: {}", self.name(), target, err);
                    self.handle_rejection(target, &err);
                }
            }
        }
    }
}
