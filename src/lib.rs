//! Interlock fills crossword grids by treating them as constraint
//! satisfaction problems.
//!
//! Every maximal run of open cells becomes a variable (a [`Slot`]) whose
//! domain is the word inventory. Two constraints govern a fill: crossing
//! slots must agree on their shared letter, and no word may be used twice.
//! The engine prunes domains with node consistency and AC-3 arc consistency,
//! then searches with chronological backtracking guided by pluggable
//! heuristics.
//!
//! # Core Concepts
//!
//! - **[`Puzzle`]**: the grid, its derived slots, and the precomputed
//!   overlap index relating crossing slots.
//! - **[`DomainStore`]**: the candidate words remaining for each slot.
//! - **[`SolverEngine`]**: node consistency, AC-3 propagation, and
//!   heuristic-guided backtracking, producing an [`Assignment`] or a
//!   definitive "no solution".
//!
//! # Example: A Crossing Pair
//!
//! A 3×3 grid with one across slot and one down slot meeting at the across
//! word's second letter. With the inventory `{"cat", "ant"}` the only fill
//! puts `cat` across and `ant` down: the shared cell demands `cat[1] ==
//! ant[0]`, and the reuse rule forbids the same word in both slots.
//!
//! ```
//! use interlock::puzzle::{Direction, Grid, Puzzle};
//! use interlock::solver::engine::SolverEngine;
//!
//! let rows = vec![
//!     vec![true, true, true],
//!     vec![false, true, false],
//!     vec![false, true, false],
//! ];
//! let puzzle = Puzzle::new(Grid::new(&rows)?);
//!
//! let engine = SolverEngine::with_default_heuristics();
//! let (solution, stats) = engine.solve(&puzzle, ["cat", "ant"])?;
//! let solution = solution.expect("this grid is solvable");
//!
//! let across = puzzle
//!     .slot_ids()
//!     .find(|&id| puzzle.slot(id).direction == Direction::Across)
//!     .unwrap();
//! let down = puzzle
//!     .slot_ids()
//!     .find(|&id| puzzle.slot(id).direction == Direction::Down)
//!     .unwrap();
//!
//! assert_eq!(solution.word(across), Some("cat"));
//! assert_eq!(solution.word(down), Some("ant"));
//! assert!(stats.revisions > 0);
//! # Ok::<(), interlock::error::Error>(())
//! ```
//!
//! [`Slot`]: puzzle::Slot
//! [`Puzzle`]: puzzle::Puzzle
//! [`DomainStore`]: solver::domains::DomainStore
//! [`SolverEngine`]: solver::engine::SolverEngine
//! [`Assignment`]: solver::assignment::Assignment

pub mod error;
pub mod examples;
pub mod puzzle;
pub mod solver;
