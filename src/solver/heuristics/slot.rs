//! Defines a collection of standard heuristics for selecting which slot to
//! fill next during the search process.

use std::cell::RefCell;
use std::cmp::Reverse;

use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use crate::{
    puzzle::{Puzzle, SlotId},
    solver::{assignment::Assignment, domains::DomainStore},
};

/// A trait for slot-selection heuristics.
///
/// Implementors define which unassigned slot the solver should branch on
/// next. A good choice can dramatically shrink the search tree.
pub trait SlotSelectionHeuristic {
    /// Selects the next slot to fill, or `None` when every slot is assigned.
    fn select_slot(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<SlotId>;
}

/// A simple heuristic that selects the unassigned slot with the lowest id.
pub struct SelectFirstHeuristic;

impl SlotSelectionHeuristic for SelectFirstHeuristic {
    fn select_slot(
        &self,
        puzzle: &Puzzle,
        _domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<SlotId> {
        puzzle.slot_ids().find(|&id| !assignment.contains(id))
    }
}

/// Selects the unassigned slot with the fewest remaining candidate words
/// (Minimum Remaining Values).
///
/// This is a "fail-first" strategy: tackling the most constrained slot early
/// prunes the search space fastest. Ties go to the slot with the most
/// crossings (highest degree), since constraining many neighbours early
/// propagates the most information; remaining ties go to the lowest id so
/// runs are reproducible.
pub struct MinimumRemainingValuesHeuristic;

impl SlotSelectionHeuristic for MinimumRemainingValuesHeuristic {
    fn select_slot(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<SlotId> {
        puzzle
            .slot_ids()
            .filter(|&id| !assignment.contains(id))
            .min_by_key(|&id| {
                (
                    domains.size(id),
                    Reverse(puzzle.neighbours(id).len()),
                    id,
                )
            })
    }
}

/// Selects an unassigned slot at random.
///
/// Useful for sampling different fills of the same grid. Seed it for
/// reproducible runs.
pub struct RandomSlotHeuristic {
    rng: RefCell<ChaCha8Rng>,
}

impl RandomSlotHeuristic {
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomSlotHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotSelectionHeuristic for RandomSlotHeuristic {
    fn select_slot(
        &self,
        puzzle: &Puzzle,
        _domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<SlotId> {
        use rand::seq::IteratorRandom;

        puzzle
            .slot_ids()
            .filter(|&id| !assignment.contains(id))
            .choose(&mut *self.rng.borrow_mut())
    }
}
