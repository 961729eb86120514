//! The fleet owner: a validated, immutable set of ships on a grid.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::BoardError;
use crate::config::{DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SHIP_SIZES};
use crate::fleet::validate_fleet;
use crate::placement::random_fleet;
use crate::ship::Ship;

// grids store one cell per coordinate, so the area has to be addressable
fn check_area(columns: usize, rows: usize) -> Result<(), BoardError> {
    match columns.checked_mul(rows) {
        Some(_) => Ok(()),
        None => Err(BoardError::GridTooLarge { columns, rows }),
    }
}

/// A ship together with its position in the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipInfo<'a> {
    pub index: usize,
    pub ship: &'a Ship,
}

/// Holder of a fleet that can be asked which ship, if any, occupies a cell.
///
/// The fleet is checked once at construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opponent {
    columns: usize,
    rows: usize,
    ships: Vec<Ship>,
}

impl Opponent {
    /// Take ownership of `ships` after checking bounds and overlap.
    pub fn new(columns: usize, rows: usize, ships: Vec<Ship>) -> Result<Self, BoardError> {
        check_area(columns, rows)?;
        validate_fleet(&ships, columns, rows)?;
        Ok(Self {
            columns,
            rows,
            ships,
        })
    }

    /// Place ships of the given sizes at random, in order.
    pub fn random<R: Rng + ?Sized>(
        columns: usize,
        rows: usize,
        ship_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        check_area(columns, rows)?;
        let ships = random_fleet(columns, rows, ship_sizes, rng)?;
        Self::new(columns, rows, ships)
    }

    /// Random opponent with the default grid and fleet.
    pub fn standard<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        Self::random(DEFAULT_COLUMNS, DEFAULT_ROWS, &DEFAULT_SHIP_SIZES, rng)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The fleet in its original order. A ship's index here is its identity.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Find the ship covering (`column`, `row`).
    pub fn ship_at(&self, column: usize, row: usize) -> Option<ShipInfo<'_>> {
        self.ships
            .iter()
            .enumerate()
            .find(|(_, ship)| ship.contains(column, row))
            .map(|(index, ship)| ShipInfo { index, ship })
    }

    /// Total number of cells covered by the fleet.
    pub fn fleet_cells(&self) -> usize {
        self.ships.iter().map(Ship::size).sum()
    }
}
