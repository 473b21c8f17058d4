use im::{HashMap, HashSet};

use crate::puzzle::{Puzzle, SlotId};

/// The candidate words remaining for one slot.
pub type WordSet = HashSet<String>;

/// The mutable map from each slot to its current candidate-word set.
///
/// The store is created once from the puzzle and the word inventory, pruned
/// in place by the consistency engine, and read-only during search. Backed by
/// persistent maps so that cloning a store (or the sets inside it) is a cheap
/// structural share.
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: HashMap<SlotId, WordSet>,
}

impl DomainStore {
    /// Gives every slot of `puzzle` the full word inventory.
    pub fn new<I, S>(puzzle: &Puzzle, inventory: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: WordSet = inventory.into_iter().map(Into::into).collect();
        let domains = puzzle.slot_ids().map(|id| (id, words.clone())).collect();
        Self { domains }
    }

    /// Removes, for each slot, every candidate whose character count differs
    /// from the slot's length. In place, idempotent.
    pub fn enforce_node_consistency(&mut self, puzzle: &Puzzle) {
        for id in puzzle.slot_ids() {
            let length = puzzle.slot(id).length;
            self.retain(id, |word| word.chars().count() == length);
        }
    }

    /// The current candidates for `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` does not belong to the puzzle this store was built
    /// from.
    pub fn candidates(&self, slot: SlotId) -> &WordSet {
        self.domains.get(&slot).expect("unknown slot")
    }

    pub fn size(&self, slot: SlotId) -> usize {
        self.candidates(slot).len()
    }

    pub fn is_empty(&self, slot: SlotId) -> bool {
        self.candidates(slot).is_empty()
    }

    /// Keeps only the candidates of `slot` satisfying `keep`; returns how
    /// many words were dropped.
    pub fn retain<F>(&mut self, slot: SlotId, keep: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        let current = self.candidates(slot);
        let kept: WordSet = current.iter().filter(|w| keep(w.as_str())).cloned().collect();
        let removed = current.len() - kept.len();
        if removed > 0 {
            self.domains.insert(slot, kept);
        }
        removed
    }
}
