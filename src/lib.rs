#![cfg_attr(not(feature = "std"), no_std)]

//! Rules engine for one side of a two-grid Battleship game: ship geometry,
//! fleet validation, random placement and shot resolution.

extern crate alloc;

mod common;
mod config;
mod fleet;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod opponent;
mod placement;
pub mod prelude;
mod ship;
pub mod targeting;

pub use common::*;
pub use config::*;
pub use fleet::{validate_fleet, FleetBuilder};
pub use grid::{Grid, ListenerId};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use opponent::{Opponent, ShipInfo};
pub use placement::{random_fleet, FleetGenerator};
pub use ship::{Orientation, Ship, ShipBounds};
pub use targeting::{DensityTargeting, RandomTargeting, TargetPolicy};
