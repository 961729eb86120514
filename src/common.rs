//! Common types for Battleship: per-cell guess state, shot outcomes and errors.

/// Knowledge about a single cell of a guess grid.
///
/// A cell only moves forward: `Unset` becomes `Miss` or `Hit`, and every `Hit`
/// of a ship becomes `Sunk` at once when that ship's last cell is hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessCell {
    /// Not shot at yet.
    #[default]
    Unset,
    /// Shot at, no ship there.
    Miss,
    /// Shot at, hit the ship with this fleet index.
    Hit(usize),
    /// Part of the ship with this fleet index, which has been sunk.
    Sunk(usize),
}

impl GuessCell {
    /// Returns `true` if the cell has not been shot at.
    pub fn is_unset(&self) -> bool {
        matches!(self, GuessCell::Unset)
    }

    /// Fleet index of the ship known to occupy this cell, if any.
    pub fn ship_index(&self) -> Option<usize> {
        match *self {
            GuessCell::Hit(i) | GuessCell::Sunk(i) => Some(i),
            GuessCell::Unset | GuessCell::Miss => None,
        }
    }
}

/// Outcome of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Shot missed all ships.
    Miss,
    /// Shot hit the ship with this fleet index without sinking it.
    Hit(usize),
    /// Shot hit the last intact cell of the ship with this fleet index.
    Sunk(usize),
}

impl GuessResult {
    /// Fleet index of the ship that was hit, if any.
    pub fn ship_index(&self) -> Option<usize> {
        match *self {
            GuessResult::Miss => None,
            GuessResult::Hit(i) | GuessResult::Sunk(i) => Some(i),
        }
    }
}

impl From<GuessResult> for GuessCell {
    /// The state a freshly shot cell is left in.
    fn from(result: GuessResult) -> Self {
        match result {
            GuessResult::Miss => GuessCell::Miss,
            GuessResult::Hit(i) => GuessCell::Hit(i),
            GuessResult::Sunk(i) => GuessCell::Sunk(i),
        }
    }
}

/// Errors returned by ship, fleet and grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship edges are inverted (`top > bottom` or `left > right`) or its size is zero.
    InvalidGeometry,
    /// Ship spans more than one row and more than one column.
    InvalidShape,
    /// Coordinate lies outside the grid.
    OutOfBounds { column: usize, row: usize },
    /// Two ships claim the same cell.
    OverlapDetected { column: usize, row: usize },
    /// Ship of this size fits neither horizontally nor vertically.
    UnplaceableShip { size: usize },
    /// Random placement gave up on a ship after this many attempts.
    PlacementExhausted { size: usize, attempts: usize },
    /// Cell was already shot at.
    DuplicateShot { column: usize, row: usize },
    /// Grid dimensions differ from those of the opponent it wraps.
    DimensionMismatch,
    /// `columns × rows` does not fit in a `usize`.
    GridTooLarge { columns: usize, rows: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidGeometry => write!(f, "Ship edges are inverted or empty"),
            BoardError::InvalidShape => write!(f, "Ship must occupy a single row or column"),
            BoardError::OutOfBounds { column, row } => {
                write!(f, "Cell ({}, {}) is outside the grid", column, row)
            }
            BoardError::OverlapDetected { column, row } => {
                write!(f, "Ships overlap at cell ({}, {})", column, row)
            }
            BoardError::UnplaceableShip { size } => {
                write!(f, "Ship of size {} does not fit on the grid", size)
            }
            BoardError::PlacementExhausted { size, attempts } => write!(
                f,
                "Unable to place ship of size {} after {} attempts",
                size, attempts
            ),
            BoardError::DuplicateShot { column, row } => {
                write!(f, "Cell ({}, {}) was already guessed", column, row)
            }
            BoardError::DimensionMismatch => {
                write!(f, "Grid dimensions do not match the opponent")
            }
            BoardError::GridTooLarge { columns, rows } => {
                write!(f, "Grid of {} x {} cells is too large", columns, rows)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
