//! Fleet validation and manual, one-ship-at-a-time placement.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::common::BoardError;
use crate::opponent::Opponent;
use crate::ship::Ship;

/// Check that every ship lies inside a `columns` × `rows` grid and that no two
/// ships share a cell.
///
/// Ships are scanned in order and the first problem found is reported.
pub fn validate_fleet(ships: &[Ship], columns: usize, rows: usize) -> Result<(), BoardError> {
    let mut occupied = BTreeSet::new();
    for ship in ships {
        check_bounds(ship, columns, rows)?;
        for (column, row) in ship.cells() {
            if !occupied.insert((column, row)) {
                return Err(BoardError::OverlapDetected { column, row });
            }
        }
    }
    Ok(())
}

fn check_bounds(ship: &Ship, columns: usize, rows: usize) -> Result<(), BoardError> {
    let (right, bottom) = ship.bottom_right();
    if right >= columns || bottom >= rows {
        return Err(BoardError::OutOfBounds {
            column: right,
            row: bottom,
        });
    }
    Ok(())
}

/// Builds a fleet by placing ships one at a time, rejecting each placement
/// that would leave the grid or collide with an earlier ship.
#[derive(Debug, Clone)]
pub struct FleetBuilder {
    columns: usize,
    rows: usize,
    ships: Vec<Ship>,
}

impl FleetBuilder {
    /// Start an empty fleet for a `columns` × `rows` grid.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            ships: Vec::new(),
        }
    }

    /// Add a ship to the fleet. On error the builder is left unchanged.
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        check_bounds(&ship, self.columns, self.rows)?;
        if let Some(other) = self.ships.iter().find(|placed| placed.overlaps(&ship)) {
            return Err(BoardError::OverlapDetected {
                column: other.left().max(ship.left()),
                row: other.top().max(ship.top()),
            });
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Undo the most recent placement.
    pub fn remove_last(&mut self) -> Option<Ship> {
        self.ships.pop()
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Finish placement and hand the fleet to an [`Opponent`].
    pub fn build(self) -> Result<Opponent, BoardError> {
        Opponent::new(self.columns, self.rows, self.ships)
    }
}
