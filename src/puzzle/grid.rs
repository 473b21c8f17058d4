use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SolverError},
    puzzle::slot::{Direction, Slot},
};

/// The shape of a crossword grid: which cells are open (fillable) and which
/// are blocked.
///
/// A `Grid` carries no letters and no slot identifiers; it is the immutable
/// input from which a [`Puzzle`](crate::puzzle::Puzzle) derives its slots and
/// overlap index. Construction is the only place malformed shape data can
/// surface, so it is the only fallible operation here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Row-major open/blocked flags; `true` means fillable.
    open: Vec<bool>,
}

impl Grid {
    /// Builds a grid from per-row open/blocked flags.
    ///
    /// All rows must share the width of the first row.
    pub fn new(rows: &[Vec<bool>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(SolverError::RaggedGrid {
                    row,
                    found: cells.len(),
                    expected: width,
                }
                .into());
            }
        }
        let open = rows.iter().flatten().copied().collect();
        Ok(Self {
            height,
            width,
            open,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell at `(row, col)` is open. Out-of-bounds coordinates
    /// are treated as blocked, which lets the run scanner probe past the
    /// edges without special cases.
    pub fn is_open(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.open[row * self.width + col]
    }

    /// Derives the word slots of this grid: every maximal horizontal or
    /// vertical run of open cells spanning at least two cells.
    pub fn slots(&self) -> Vec<Slot> {
        let mut slots = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if !self.is_open(row, col) {
                    continue;
                }
                // A run starts where the previous cell in its direction is
                // blocked or off-grid.
                if col == 0 || !self.is_open(row, col - 1) {
                    let length = (col..self.width)
                        .take_while(|&c| self.is_open(row, c))
                        .count();
                    if length > 1 {
                        slots.push(Slot::new(row, col, Direction::Across, length));
                    }
                }
                if row == 0 || !self.is_open(row - 1, col) {
                    let length = (row..self.height)
                        .take_while(|&r| self.is_open(r, col))
                        .count();
                    if length > 1 {
                        slots.push(Slot::new(row, col, Direction::Down, length));
                    }
                }
            }
        }
        slots
    }
}
