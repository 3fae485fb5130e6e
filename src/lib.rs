#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod agent;
mod automated;
mod common;
mod config;
mod coordinate;
mod game;
mod grid;
#[cfg(feature = "std")]
mod human;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
pub mod prelude;
mod vessel;

pub use agent::*;
pub use automated::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use human::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use placement::{random_grid, try_random_grid};
pub use vessel::*;
