//! Target selection policies for whoever is shooting at a [`Grid`].
//!
//! The grid itself never chooses where to shoot; these policies only read it.

use alloc::vec;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::common::GuessCell;
use crate::grid::Grid;
use crate::ship::Orientation;

/// Chooses the next cell to shoot at.
pub trait TargetPolicy {
    /// Pick an `Unset` cell as `(column, row)`, or `None` if every cell has
    /// already been shot.
    fn select_target(&mut self, rng: &mut SmallRng, grid: &Grid<'_>) -> Option<(usize, usize)>;
}

/// Picks uniformly among the cells not shot yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTargeting;

impl RandomTargeting {
    pub fn new() -> Self {
        Self
    }
}

impl TargetPolicy for RandomTargeting {
    fn select_target(&mut self, rng: &mut SmallRng, grid: &Grid<'_>) -> Option<(usize, usize)> {
        uniform_unset(rng, grid)
    }
}

fn uniform_unset<R: Rng + ?Sized>(rng: &mut R, grid: &Grid<'_>) -> Option<(usize, usize)> {
    let open: Vec<(usize, usize)> = grid
        .cells()
        .filter(|(_, _, cell)| cell.is_unset())
        .map(|(column, row, _)| (column, row))
        .collect();
    open.choose(rng).copied()
}

/// Placements covering this many known hits weigh `HIT_BIAS` times more per hit.
const HIT_BIAS: f64 = 10.0;

/// Hunts by sampling cells in proportion to how many placements of the
/// still-floating ships could cover them.
#[derive(Debug, Clone, Copy)]
pub struct DensityTargeting {
    temperature: f64,
}

impl Default for DensityTargeting {
    fn default() -> Self {
        Self { temperature: 0.5 }
    }
}

impl DensityTargeting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower temperatures favour the densest cells; zero or below always picks
    /// the single densest cell.
    pub fn with_temperature(temperature: f64) -> Self {
        Self { temperature }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

impl TargetPolicy for DensityTargeting {
    fn select_target(&mut self, rng: &mut SmallRng, grid: &Grid<'_>) -> Option<(usize, usize)> {
        let pdf = density(grid);
        let columns = grid.columns();
        if self.temperature <= 0.0 {
            return pdf
                .iter()
                .enumerate()
                .filter(|(_, p)| **p > 0.0)
                .fold(None, |best: Option<(usize, f64)>, (i, &p)| match best {
                    Some((_, bp)) if bp >= p => best,
                    _ => Some((i, p)),
                })
                .map(|(i, _)| (i % columns, i / columns));
        }

        // relative to the peak, so the densest cell keeps weight 1 at any temperature
        let peak = pdf.iter().copied().fold(0.0f64, f64::max);
        if peak.is_nan() || peak <= 0.0 {
            return uniform_unset(rng, grid);
        }
        let adjusted: Vec<f64> = pdf
            .iter()
            .map(|&p| libm::pow(p / peak, 1.0 / self.temperature))
            .collect();
        let total: f64 = adjusted.iter().sum();
        if total.is_nan() || total <= 0.0 {
            return uniform_unset(rng, grid);
        }
        let threshold: f64 = rng.random_range(0.0..total);
        let mut cumulative = 0.0;
        for (i, &v) in adjusted.iter().enumerate() {
            cumulative += v;
            if v > 0.0 && threshold < cumulative {
                return Some((i % columns, i / columns));
            }
        }
        // rounding left the threshold past the last weight
        adjusted
            .iter()
            .rposition(|&v| v > 0.0)
            .map(|i| (i % columns, i / columns))
    }
}

/// Probability of each cell, row by row, holding an undiscovered ship
/// segment. Cells already shot are zero. When no placement fits any remaining
/// ship, the mass is spread evenly over the unshot cells.
pub fn density(grid: &Grid<'_>) -> Vec<f64> {
    let (columns, rows) = (grid.columns(), grid.rows());
    let mut matrix = vec![0.0f64; columns * rows];
    let ships = grid.opponent().ships();

    for (index, ship) in ships.iter().enumerate() {
        if grid.ships_sunk()[index] {
            continue;
        }
        let len = ship.size();
        let orientations: &[Orientation] = if len == 1 {
            &[Orientation::Horizontal]
        } else {
            &[Orientation::Horizontal, Orientation::Vertical]
        };
        for &orient in orientations {
            let (dc, dr) = match orient {
                Orientation::Horizontal => (1, 0),
                Orientation::Vertical => (0, 1),
            };
            let max_col = columns.checked_sub(if dc == 1 { len } else { 1 });
            let max_row = rows.checked_sub(if dr == 1 { len } else { 1 });
            let (Some(max_col), Some(max_row)) = (max_col, max_row) else {
                continue;
            };
            for r in 0..=max_row {
                for c in 0..=max_col {
                    let mut valid = true;
                    let mut n_hits = 0;
                    for k in 0..len {
                        match grid.get(c + k * dc, r + k * dr) {
                            Ok(GuessCell::Unset) => {}
                            Ok(GuessCell::Hit(i)) if i == index => n_hits += 1,
                            _ => {
                                valid = false;
                                break;
                            }
                        }
                    }
                    if !valid {
                        continue;
                    }
                    let weight = libm::pow(HIT_BIAS, n_hits as f64);
                    for k in 0..len {
                        let (cc, rr) = (c + k * dc, r + k * dr);
                        if let Ok(GuessCell::Unset) = grid.get(cc, rr) {
                            matrix[rr * columns + cc] += weight;
                        }
                    }
                }
            }
        }
    }

    normalize(grid, matrix)
}

fn normalize(grid: &Grid<'_>, mut matrix: Vec<f64>) -> Vec<f64> {
    let total: f64 = matrix.iter().sum();
    if total == 0.0 {
        let open = grid.cells().filter(|(_, _, cell)| cell.is_unset()).count();
        if open > 0 {
            let uniform = 1.0 / open as f64;
            for (column, row, cell) in grid.cells() {
                if cell.is_unset() {
                    matrix[row * grid.columns() + column] = uniform;
                }
            }
        }
        return matrix;
    }
    for v in matrix.iter_mut() {
        *v /= total;
    }
    matrix
}
