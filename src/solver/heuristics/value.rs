use crate::{
    puzzle::{Puzzle, SlotId},
    solver::{assignment::Assignment, domains::DomainStore, propagation::ruled_out_by},
};

/// A trait for strategies that determine the order in which a slot's
/// candidate words are tried.
pub trait WordOrderingHeuristic {
    /// Returns `slot`'s current candidates in the order they should be
    /// tried.
    fn order_words(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
        slot: SlotId,
    ) -> Vec<String>;
}

/// A simple heuristic that returns words in their natural iteration order.
pub struct IdentityValueHeuristic;

impl WordOrderingHeuristic for IdentityValueHeuristic {
    fn order_words(
        &self,
        _puzzle: &Puzzle,
        domains: &DomainStore,
        _assignment: &Assignment,
        slot: SlotId,
    ) -> Vec<String> {
        domains.candidates(slot).iter().cloned().collect()
    }
}

/// Orders words ascending by how many candidates they would eliminate from
/// the domains of unassigned crossing slots (Least Constraining Value).
///
/// The elimination counts are computed speculatively against a hypothetical
/// singleton domain; the live store is never touched. Ties keep their
/// iteration order.
pub struct LeastConstrainingValueHeuristic;

impl WordOrderingHeuristic for LeastConstrainingValueHeuristic {
    fn order_words(
        &self,
        puzzle: &Puzzle,
        domains: &DomainStore,
        assignment: &Assignment,
        slot: SlotId,
    ) -> Vec<String> {
        let mut ranked: Vec<(String, usize)> = domains
            .candidates(slot)
            .iter()
            .map(|word| {
                let eliminated = puzzle
                    .neighbours(slot)
                    .iter()
                    .filter(|&&n| !assignment.contains(n))
                    .map(|&n| ruled_out_by(domains, puzzle, n, slot, word))
                    .sum();
                (word.clone(), eliminated)
            })
            .collect();
        ranked.sort_by_key(|&(_, eliminated)| eliminated);
        ranked.into_iter().map(|(word, _)| word).collect()
    }
}
