/// Default number of columns on a grid.
pub const DEFAULT_COLUMNS: usize = 10;
/// Default number of rows on a grid.
pub const DEFAULT_ROWS: usize = 10;
/// Default fleet, in placement order.
pub const DEFAULT_SHIP_SIZES: [usize; 5] = [1, 2, 2, 3, 4];

/// Upper bound on random placement attempts for a single ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Total number of cells occupied by the default fleet.
pub const DEFAULT_FLEET_CELLS: usize = 1 + 2 + 2 + 3 + 4;
