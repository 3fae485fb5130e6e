//! Commonly used types and utilities for ease of import.

pub use crate::{
    Agent, AutomatedAgent, BoardError, Coordinate, GameConfig, Grid, Match, MatchStatus,
    MatchSummary, Orientation, ShotResult, SideId, Vessel,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, HumanAgent};
