use tracing::debug;

use crate::{
    error::{Result, SolverError},
    puzzle::Puzzle,
    solver::{
        assignment::Assignment,
        domains::DomainStore,
        heuristics::{
            slot::{MinimumRemainingValuesHeuristic, SlotSelectionHeuristic},
            value::{LeastConstrainingValueHeuristic, WordOrderingHeuristic},
        },
        propagation,
        stats::SearchStats,
    },
};

/// The main engine for filling a crossword puzzle.
///
/// Solving runs in three phases: node consistency drops words of the wrong
/// length, AC-3 propagation prunes words with no compatible crossing
/// partner, and a chronological backtracking search assigns the survivors.
/// The two choice points of the search are delegated to the configured
/// heuristics.
pub struct SolverEngine {
    slot_heuristic: Box<dyn SlotSelectionHeuristic>,
    word_heuristic: Box<dyn WordOrderingHeuristic>,
    node_limit: Option<u64>,
}

impl SolverEngine {
    pub fn new(
        slot_heuristic: Box<dyn SlotSelectionHeuristic>,
        word_heuristic: Box<dyn WordOrderingHeuristic>,
    ) -> Self {
        Self {
            slot_heuristic,
            word_heuristic,
            node_limit: None,
        }
    }

    /// An engine with the standard pairing: minimum-remaining-values slot
    /// selection and least-constraining-value word ordering.
    pub fn with_default_heuristics() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }

    /// Caps the number of search nodes visited. Exceeding the cap aborts the
    /// solve with [`SolverError::NodeLimitExceeded`]; realistic puzzles never
    /// need one.
    #[must_use]
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Attempts to fill `puzzle` from the given word inventory.
    ///
    /// # Returns
    ///
    /// * `Ok((Some(assignment), stats))` with a complete, consistent fill.
    /// * `Ok((None, stats))` when the puzzle has no solution. A puzzle with
    ///   zero slots is trivially solvable and yields the empty assignment,
    ///   never `None`.
    /// * `Err(_)` only for engine faults such as an exceeded node limit.
    pub fn solve<I, S>(&self, puzzle: &Puzzle, inventory: I) -> Result<(Option<Assignment>, SearchStats)>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut stats = SearchStats::default();
        let mut domains = DomainStore::new(puzzle, inventory);
        domains.enforce_node_consistency(puzzle);

        // A failed propagation pass means some domain is already empty, but
        // it is the search that owns the no-solution verdict: backtracking
        // over a wiped-out domain exhausts immediately.
        if !propagation::ac3(&mut domains, puzzle, None, &mut stats) {
            debug!("propagation emptied a domain; search will exhaust");
        }

        let found = self.backtrack(puzzle, &domains, Assignment::new(), &mut stats)?;
        Ok((found, stats))
    }

    /// Depth-first chronological backtracking over partial assignments.
    ///
    /// Each branch extends a persistent copy of the assignment, so failed
    /// branches are undone by dropping the copy.
    fn backtrack(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: Assignment,
        stats: &mut SearchStats,
    ) -> Result<Option<Assignment>> {
        stats.nodes_visited += 1;
        if let Some(limit) = self.node_limit {
            if stats.nodes_visited > limit {
                return Err(SolverError::NodeLimitExceeded(limit).into());
            }
        }

        if assignment.is_complete(puzzle) {
            return Ok(Some(assignment));
        }

        let Some(slot) = self
            .slot_heuristic
            .select_slot(puzzle, domains, &assignment)
        else {
            // Unreachable while the heuristics honour their contract; treat
            // an exhausted selection as completion.
            return Ok(Some(assignment));
        };

        for word in self
            .word_heuristic
            .order_words(puzzle, domains, &assignment, slot)
        {
            let guess = assignment.assign(slot, word);
            if guess.is_consistent(puzzle) {
                if let Some(found) = self.backtrack(puzzle, domains, guess, stats)? {
                    return Ok(Some(found));
                }
            }
            stats.backtracks += 1;
        }

        Ok(None)
    }
}

impl Default for SolverEngine {
    fn default() -> Self {
        Self::with_default_heuristics()
    }
}
