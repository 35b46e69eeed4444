//! Neighbor enumeration and per-generation neighbor tallies

use super::cell::{Board, Cell};
use std::collections::HashMap;

/// The 3x3 block around a cell, excluding the cell itself
#[rustfmt::skip]
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// The left and right cells on the same row
pub const LATERAL_OFFSETS: [(i64, i64); 2] = [(-1, 0), (1, 0)];

/// Neighbors of `cell` under `offsets`. Coordinates past the `i64` range are
/// skipped.
pub fn neighbors(cell: Cell, offsets: &[(i64, i64)]) -> impl Iterator<Item = Cell> + '_ {
    offsets
        .iter()
        .filter_map(move |&(dx, dy)| cell.offset(dx, dy))
}

/// How many alive cells have each coordinate as a neighbor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborCount {
    counts: HashMap<Cell, u32>,
}

impl NeighborCount {
    /// Tally neighbors of every alive cell on `board`
    pub fn tally(board: &Board, offsets: &[(i64, i64)]) -> Self {
        let mut counts = HashMap::with_capacity(board.len() * offsets.len());
        for &cell in board {
            for neighbor in neighbors(cell, offsets) {
                *counts.entry(neighbor).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Tally for `cell`, zero if no alive cell neighbors it
    pub fn get(&self, cell: &Cell) -> u32 {
        self.counts.get(cell).copied().unwrap_or(0)
    }

    /// Coordinates with a non-zero tally
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(cell, tally)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.counts.iter().map(|(&cell, &count)| (cell, count))
    }
}
