use serde::{Deserialize, Serialize};

/// An identifier for a slot, assigned by the [`Puzzle`](crate::puzzle::Puzzle)
/// in derivation order.
pub type SlotId = u32;

/// The orientation of a slot within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

/// A single word slot: a maximal run of open cells, read either across or
/// down.
///
/// Slots are derived once from the grid and never change afterwards. Two
/// slots are equal iff all four fields agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Row of the first cell.
    pub row: usize,
    /// Column of the first cell.
    pub col: usize,
    pub direction: Direction,
    /// Number of cells covered; always at least two.
    pub length: usize,
}

impl Slot {
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// Iterates over the `(row, col)` coordinates covered by this slot, in
    /// word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col) = (self.row, self.col);
        let direction = self.direction;
        (0..self.length).map(move |k| match direction {
            Direction::Across => (row, col + k),
            Direction::Down => (row + k, col),
        })
    }
}
