//! Random fleet placement with bounded rejection retries.

use alloc::vec::Vec;
use log::{debug, trace, warn};
use rand::Rng;

use crate::common::BoardError;
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::ship::{Orientation, Ship};

/// Places ships of requested sizes at random positions on a `columns` × `rows`
/// grid.
///
/// Sizes are placed in the order given, each one retried until it no longer
/// overlaps the ships placed before it. The result depends only on the
/// sequence of values drawn from the random source, so a seeded generator
/// always yields the same fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetGenerator {
    columns: usize,
    rows: usize,
    max_attempts: usize,
}

impl FleetGenerator {
    /// Create a generator using the default attempt ceiling.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Override how many attempts a single ship gets before giving up.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Place one ship for every entry of `sizes`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        sizes: &[usize],
        rng: &mut R,
    ) -> Result<Vec<Ship>, BoardError> {
        let mut placed = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let ship = self.place_one(size, &placed, rng)?;
            placed.push(ship);
        }
        debug!(
            "placed {} ships on {}x{} grid: {:?}",
            placed.len(),
            self.columns,
            self.rows,
            placed
        );
        Ok(placed)
    }

    fn place_one<R: Rng + ?Sized>(
        &self,
        size: usize,
        placed: &[Ship],
        rng: &mut R,
    ) -> Result<Ship, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidGeometry);
        }
        let fits_horizontal = size <= self.columns && self.rows > 0;
        let fits_vertical = size <= self.rows && self.columns > 0;
        if !fits_horizontal && !fits_vertical {
            return Err(BoardError::UnplaceableShip { size });
        }

        for attempt in 1..=self.max_attempts {
            let mut orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if size > self.columns {
                orientation = Orientation::Vertical;
            }
            if size > self.rows {
                orientation = Orientation::Horizontal;
            }

            let (max_left, max_top) = match orientation {
                Orientation::Horizontal => (self.columns - size, self.rows - 1),
                Orientation::Vertical => (self.columns - 1, self.rows - size),
            };
            let mut left = rng.random_range(0..=max_left);
            let mut top = rng.random_range(0..=max_top);
            // keep the far edge on the grid
            match orientation {
                Orientation::Horizontal if left + size > self.columns => {
                    left = self.columns - size
                }
                Orientation::Vertical if top + size > self.rows => top = self.rows - size,
                _ => {}
            }

            let ship = Ship::at(left, top, size, orientation)?;
            if placed.iter().any(|other| other.overlaps(&ship)) {
                trace!("attempt {} for size {} overlaps at {:?}", attempt, size, ship);
                continue;
            }
            return Ok(ship);
        }

        warn!(
            "gave up placing ship of size {} after {} attempts",
            size, self.max_attempts
        );
        Err(BoardError::PlacementExhausted {
            size,
            attempts: self.max_attempts,
        })
    }
}

/// Place a random fleet with the default attempt ceiling.
pub fn random_fleet<R: Rng + ?Sized>(
    columns: usize,
    rows: usize,
    sizes: &[usize],
    rng: &mut R,
) -> Result<Vec<Ship>, BoardError> {
    FleetGenerator::new(columns, rows).generate(sizes, rng)
}
