//! Guess grid: resolves shots against an opponent's fleet and tracks sinking.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::{fmt, mem};
use log::debug;

use crate::common::{BoardError, GuessCell, GuessResult};
use crate::opponent::{Opponent, ShipInfo};

/// Handle returned by [`Grid::add_listener`], used to remove the listener again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener<'a> = Box<dyn FnMut(&Grid<'_>, usize, usize) + 'a>;

/// One side's view of the shots fired at an [`Opponent`].
///
/// Cells start out `Unset` and are changed only by [`Grid::shoot_at`]. Every
/// failing call leaves the grid exactly as it was.
///
/// Listeners run synchronously after each successful shot, in registration
/// order, and receive the grid by shared reference. They cannot shoot at the
/// grid that is notifying them.
pub struct Grid<'a> {
    opponent: &'a Opponent,
    columns: usize,
    rows: usize,
    guesses: Vec<GuessCell>,
    hits: Vec<usize>,
    sunk: Vec<bool>,
    shots: usize,
    listeners: Vec<(ListenerId, Listener<'a>)>,
    next_listener: u64,
}

impl<'a> Grid<'a> {
    /// Create a grid over `opponent`. The dimensions must match the opponent's.
    pub fn new(columns: usize, rows: usize, opponent: &'a Opponent) -> Result<Self, BoardError> {
        if columns != opponent.columns() || rows != opponent.rows() {
            return Err(BoardError::DimensionMismatch);
        }
        Ok(Self::for_opponent(opponent))
    }

    /// Create a grid sized to `opponent`.
    pub fn for_opponent(opponent: &'a Opponent) -> Self {
        let (columns, rows) = (opponent.columns(), opponent.rows());
        let fleet = opponent.ships().len();
        Self {
            opponent,
            columns,
            rows,
            guesses: vec![GuessCell::Unset; columns * rows],
            hits: vec![0; fleet],
            sunk: vec![false; fleet],
            shots: 0,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The fleet being shot at.
    pub fn opponent(&self) -> &'a Opponent {
        self.opponent
    }

    fn index(&self, column: usize, row: usize) -> Result<usize, BoardError> {
        if column >= self.columns || row >= self.rows {
            return Err(BoardError::OutOfBounds { column, row });
        }
        Ok(row * self.columns + column)
    }

    /// Current state of (`column`, `row`).
    pub fn get(&self, column: usize, row: usize) -> Result<GuessCell, BoardError> {
        self.index(column, row).map(|i| self.guesses[i])
    }

    /// Iterate all cells as `(column, row, state)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, GuessCell)> + '_ {
        let columns = self.columns;
        let guesses = &self.guesses;
        (0..self.rows).flat_map(move |row| {
            (0..columns).map(move |column| (column, row, guesses[row * columns + column]))
        })
    }

    /// Hits landed on each ship, indexed like the opponent's fleet.
    pub fn hit_counts(&self) -> &[usize] {
        &self.hits
    }

    /// Sunk flag of each ship, indexed like the opponent's fleet.
    pub fn ships_sunk(&self) -> &[bool] {
        &self.sunk
    }

    /// Number of ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.sunk.iter().filter(|sunk| !**sunk).count()
    }

    /// Number of successful `shoot_at` calls so far.
    pub fn shots_fired(&self) -> usize {
        self.shots
    }

    /// Returns `true` once every ship has been sunk. An empty fleet is
    /// finished from the start.
    pub fn is_finished(&self) -> bool {
        self.sunk.iter().all(|sunk| *sunk)
    }

    /// Fire at (`column`, `row`).
    ///
    /// Fails with `OutOfBounds` for coordinates off the grid and with
    /// `DuplicateShot` if the cell was shot before. Hitting the last intact
    /// cell of a ship turns all of that ship's cells into `Sunk`.
    pub fn shoot_at(&mut self, column: usize, row: usize) -> Result<GuessResult, BoardError> {
        let idx = self.index(column, row)?;
        if !self.guesses[idx].is_unset() {
            return Err(BoardError::DuplicateShot { column, row });
        }

        let opponent = self.opponent;
        let result = match opponent.ship_at(column, row) {
            None => {
                self.guesses[idx] = GuessCell::Miss;
                GuessResult::Miss
            }
            Some(ShipInfo { index, ship }) => {
                self.guesses[idx] = GuessCell::Hit(index);
                self.hits[index] += 1;
                if self.hits[index] == ship.size() {
                    self.sunk[index] = true;
                    for (c, r) in ship.cells() {
                        self.guesses[r * self.columns + c] = GuessCell::Sunk(index);
                    }
                    GuessResult::Sunk(index)
                } else {
                    GuessResult::Hit(index)
                }
            }
        };
        self.shots += 1;
        debug!("shot at ({}, {}): {:?}", column, row, result);

        self.notify(column, row);
        Ok(result)
    }

    fn notify(&mut self, column: usize, row: usize) {
        let listeners = mem::take(&mut self.listeners);
        let mut detached = Detached {
            grid: self,
            listeners,
        };
        let Detached { grid, listeners } = &mut detached;
        for (_, listener) in listeners.iter_mut() {
            listener(&**grid, column, row);
        }
    }

    /// Register a callback run after every successful shot with the grid and
    /// the shot coordinate. The same closure logic may be registered twice.
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Grid<'_>, usize, usize) + 'a,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns `false` if `id` is not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        match self.listeners.iter().position(|(lid, _)| *lid == id) {
            Some(pos) => {
                self.listeners.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Number of registered listeners. Reads zero from inside a callback.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Listener list taken out of a grid while it is being notified. Dropping it,
/// including during an unwind from a panicking listener, puts the list back.
struct Detached<'g, 'a> {
    grid: &'g mut Grid<'a>,
    listeners: Vec<(ListenerId, Listener<'a>)>,
}

impl Drop for Detached<'_, '_> {
    fn drop(&mut self) {
        self.grid.listeners = mem::take(&mut self.listeners);
    }
}

impl fmt::Debug for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("hits", &self.hits)
            .field("sunk", &self.sunk)
            .field("shots", &self.shots)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
