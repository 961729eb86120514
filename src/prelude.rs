//! Commonly used types and utilities for ease of import.

pub use crate::{
    BoardError, GuessCell, GuessResult, Grid, Opponent, Orientation, Ship, TargetPolicy,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
