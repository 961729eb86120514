//! Ship geometry: straight, axis-aligned segments on the grid.

use core::fmt;
use core::ops::RangeInclusive;

use crate::common::BoardError;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship covering the inclusive rectangle `left..=right` × `top..=bottom`.
///
/// The rectangle is always one cell wide or one cell tall. Columns grow to the
/// right and rows grow downwards, both starting at zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "ShipBounds"))]
pub struct Ship {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
}

impl Ship {
    /// Construct a ship from its edges.
    ///
    /// Fails with `InvalidGeometry` if the edges are inverted and with
    /// `InvalidShape` if the ship spans several rows and several columns.
    pub fn new(top: usize, left: usize, bottom: usize, right: usize) -> Result<Self, BoardError> {
        if top > bottom || left > right {
            return Err(BoardError::InvalidGeometry);
        }
        if bottom - top > 0 && right - left > 0 {
            return Err(BoardError::InvalidShape);
        }
        Ok(Ship {
            top,
            left,
            bottom,
            right,
        })
    }

    /// Construct a ship of `size` cells whose top-left cell is (`column`, `row`).
    pub fn at(
        column: usize,
        row: usize,
        size: usize,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidGeometry);
        }
        let (right, bottom) = match orientation {
            Orientation::Horizontal => (column.checked_add(size - 1), Some(row)),
            Orientation::Vertical => (Some(column), row.checked_add(size - 1)),
        };
        match (right, bottom) {
            (Some(right), Some(bottom)) => Ship::new(row, column, bottom, right),
            _ => Err(BoardError::InvalidGeometry),
        }
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn bottom(&self) -> usize {
        self.bottom
    }

    pub fn right(&self) -> usize {
        self.right
    }

    /// Number of columns covered.
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    /// Number of rows covered.
    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    /// Number of cells covered.
    pub fn size(&self) -> usize {
        (self.right - self.left).max(self.bottom - self.top) + 1
    }

    /// Orientation of the ship. Single-cell ships report `Horizontal`.
    pub fn orientation(&self) -> Orientation {
        if self.height() > 1 {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// Top-left cell as `(column, row)`.
    pub fn top_left(&self) -> (usize, usize) {
        (self.left, self.top)
    }

    /// Bottom-right cell as `(column, row)`.
    pub fn bottom_right(&self) -> (usize, usize) {
        (self.right, self.bottom)
    }

    pub fn column_indices(&self) -> RangeInclusive<usize> {
        self.left..=self.right
    }

    pub fn row_indices(&self) -> RangeInclusive<usize> {
        self.top..=self.bottom
    }

    /// Iterate the covered cells as `(column, row)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let columns = self.column_indices();
        self.row_indices()
            .flat_map(move |row| columns.clone().map(move |column| (column, row)))
    }

    /// Check whether (`column`, `row`) is one of the ship's cells.
    pub fn contains(&self, column: usize, row: usize) -> bool {
        self.column_indices().contains(&column) && self.row_indices().contains(&row)
    }

    /// Check whether the given rectangle shares at least one cell with this ship.
    ///
    /// Two rectangles are disjoint exactly when one lies entirely left of,
    /// right of, above or below the other.
    pub fn overlaps_with(&self, left: usize, top: usize, right: usize, bottom: usize) -> bool {
        !(right < self.left || left > self.right || bottom < self.top || top > self.bottom)
    }

    /// Check whether two ships share a cell.
    pub fn overlaps(&self, other: &Ship) -> bool {
        self.overlaps_with(other.left, other.top, other.right, other.bottom)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ top_left: ({}, {}), bottom_right: ({}, {}), size: {} }}",
            self.left,
            self.top,
            self.right,
            self.bottom,
            self.size()
        )
    }
}

/// Unchecked ship edges, validated on the way into a [`Ship`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Deserialize))]
pub struct ShipBounds {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl TryFrom<ShipBounds> for Ship {
    type Error = BoardError;

    fn try_from(bounds: ShipBounds) -> Result<Self, Self::Error> {
        Ship::new(bounds.top, bounds.left, bounds.bottom, bounds.right)
    }
}
