//! The puzzle model: grid shape, derived word slots, and the overlap index
//! relating slots that cross each other.

pub mod grid;
pub mod slot;

use std::collections::HashMap;

pub use grid::Grid;
pub use slot::{Direction, Slot, SlotId};

/// A crossword puzzle structure: the grid, its derived slots, and the
/// precomputed overlap index.
///
/// Everything here is computed once at construction and read-only afterwards.
/// Slot ids are indices into the derivation order of [`Grid::slots`], so the
/// same grid always yields the same ids.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    slots: Vec<Slot>,
    overlaps: HashMap<(SlotId, SlotId), (usize, usize)>,
    neighbours: Vec<Vec<SlotId>>,
}

impl Puzzle {
    /// Derives the slots of `grid` and indexes every crossing.
    pub fn new(grid: Grid) -> Self {
        let slots = grid.slots();

        // Index each open cell by the slots covering it and the character
        // offset each slot has at that cell. An across and a down slot can
        // meet in at most one cell, so per-cell pairs are exactly the
        // overlap relation.
        let mut coverage: HashMap<(usize, usize), Vec<(SlotId, usize)>> = HashMap::new();
        for (id, slot) in slots.iter().enumerate() {
            for (offset, cell) in slot.cells().enumerate() {
                coverage.entry(cell).or_default().push((id as SlotId, offset));
            }
        }

        let mut overlaps = HashMap::new();
        let mut neighbours: Vec<Vec<SlotId>> = vec![Vec::new(); slots.len()];
        for entries in coverage.values() {
            for (a, offset_a) in entries {
                for (b, offset_b) in entries {
                    if a == b {
                        continue;
                    }
                    overlaps.insert((*a, *b), (*offset_a, *offset_b));
                    neighbours[*a as usize].push(*b);
                }
            }
        }
        for list in &mut neighbours {
            list.sort_unstable();
            list.dedup();
        }

        Self {
            grid,
            slots,
            overlaps,
            neighbours,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id as usize]
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot_ids(&self) -> impl Iterator<Item = SlotId> {
        0..self.slots.len() as SlotId
    }

    /// The character offsets at which `x` and `y` cross: `(index in x's
    /// word, index in y's word)`. `None` when the two slots share no cell.
    pub fn overlap(&self, x: SlotId, y: SlotId) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// The slots crossing `x`, sorted by id.
    pub fn neighbours(&self, x: SlotId) -> &[SlotId] {
        &self.neighbours[x as usize]
    }
}

/// Builds grid rows from ASCII art: `_` is open, anything else is blocked.
#[cfg(test)]
pub(crate) fn rows(art: &[&str]) -> Vec<Vec<bool>> {
    art.iter()
        .map(|line| line.chars().map(|c| c == '_').collect())
        .collect()
}
