//! Cell coordinates and sparse board helpers

use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A board is the set of alive cells; absent cells are dead
pub type Board = HashSet<Cell>;

/// A coordinate on the unbounded grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    /// Create a new cell
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The cell shifted by `(dx, dy)`, or `None` if it leaves the `i64` plane
    #[inline]
    pub fn offset(self, dx: i64, dy: i64) -> Option<Cell> {
        Some(Cell::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl From<(i64, i64)> for Cell {
    fn from((x, y): (i64, i64)) -> Self {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Inclusive bounding box of a non-empty board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl BoundingBox {
    /// Number of columns covered, `None` when it exceeds `u64::MAX`
    pub fn width(&self) -> Option<u64> {
        self.max_x.abs_diff(self.min_x).checked_add(1)
    }

    /// Number of rows covered, `None` when it exceeds `u64::MAX`
    pub fn height(&self) -> Option<u64> {
        self.max_y.abs_diff(self.min_y).checked_add(1)
    }
}

/// Compute the bounding box of the alive cells, `None` for an empty board
pub fn bounding_box(board: &Board) -> Option<BoundingBox> {
    let (min_x, max_x) = min_max(board.iter().map(|cell| cell.x))?;
    let (min_y, max_y) = min_max(board.iter().map(|cell| cell.y))?;
    Some(BoundingBox { min_x, max_x, min_y, max_y })
}

fn min_max(values: impl Iterator<Item = i64>) -> Option<(i64, i64)> {
    match values.minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

/// Translate a board so its bounding box starts at (0, 0).
///
/// Offsets are computed in two's complement: on a board spanning more than
/// `i64::MAX` columns or rows, offsets past `i64::MAX` wrap to negative
/// values. Distinct cells stay distinct.
pub fn normalize(board: &Board) -> Board {
    match bounding_box(board) {
        Some(bounds) => board
            .iter()
            .map(|cell| {
                Cell::new(
                    cell.x.wrapping_sub(bounds.min_x),
                    cell.y.wrapping_sub(bounds.min_y),
                )
            })
            .collect(),
        None => Board::new(),
    }
}

/// Alive cells in row-major order, for stable output
pub fn sorted_cells(board: &Board) -> Vec<Cell> {
    board.iter().copied().sorted_by_key(|cell| (cell.y, cell.x)).collect()
}
