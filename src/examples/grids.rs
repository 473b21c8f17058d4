//! Small sample grids exercising the solver end to end.

use crate::puzzle::{Grid, Puzzle};

/// A single across slot of the given length.
pub fn single_row(length: usize) -> Puzzle {
    let rows = vec![vec![true; length]];
    Puzzle::new(Grid::new(&rows).expect("rectangular by construction"))
}

/// A plus-shaped grid: one across and one down slot of length 3, crossing at
/// their middle letters.
pub fn plus() -> Puzzle {
    let rows = vec![
        vec![false, true, false],
        vec![true, true, true],
        vec![false, true, false],
    ];
    Puzzle::new(Grid::new(&rows).expect("rectangular by construction"))
}

/// A fully open `n` × `n` square: `n` across slots crossing `n` down slots
/// in every cell.
pub fn open_square(n: usize) -> Puzzle {
    let rows = vec![vec![true; n]; n];
    Puzzle::new(Grid::new(&rows).expect("rectangular by construction"))
}
