//! Common types for the game: shot outcomes and the error taxonomy.

use alloc::string::String;

use crate::config::ConfigError;
use crate::coordinate::Coordinate;

/// Outcome of a shot that the grid accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed in open water.
    Miss,
    /// Shot hit a vessel that still has hit points left.
    Hit,
    /// Shot took the last hit point of a vessel.
    Sunk,
}

impl ShotResult {
    /// Hits and sinks earn the shooter another shot.
    pub fn grants_repeat(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk)
    }
}

/// Errors returned by Grid operations and fleet placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid on at least one axis.
    OutOfBounds(Coordinate),
    /// Coordinate was already fired upon or revealed around a sunk vessel.
    AlreadyTargeted(Coordinate),
    /// Vessel would overlap or touch an already placed vessel.
    OverlapOrAdjacency(Coordinate),
    /// Random placement gave up after rebuilding the board `rebuilds` times.
    UnableToPlaceFleet { rebuilds: usize },
    /// Game configuration was rejected before placement started.
    InvalidConfig(ConfigError),
}

impl From<ConfigError> for BoardError {
    fn from(err: ConfigError) -> Self {
        BoardError::InvalidConfig(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => write!(f, "That shot is off the board! ({})", c),
            BoardError::AlreadyTargeted(c) => write!(f, "You already fired there! ({})", c),
            BoardError::OverlapOrAdjacency(c) => {
                write!(f, "Vessel would touch another vessel at {}", c)
            }
            BoardError::UnableToPlaceFleet { rebuilds } => {
                write!(f, "Unable to place the fleet after {} board rebuilds", rebuilds)
            }
            BoardError::InvalidConfig(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors that end an agent's turn without a shot being resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// The input source reached end of file.
    InputClosed,
    /// Reading from or writing to the console failed.
    Io(String),
    /// Every cell of the opponent grid has already been targeted.
    NoTargetsLeft,
}

impl core::fmt::Display for AgentError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AgentError::InputClosed => write!(f, "Input closed before a shot was entered"),
            AgentError::Io(msg) => write!(f, "Console error: {}", msg),
            AgentError::NoTargetsLeft => write!(f, "No untargeted cells left on the board"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AgentError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for AgentError {
    fn from(err: std::io::Error) -> Self {
        AgentError::Io(std::string::ToString::to_string(&err))
    }
}
