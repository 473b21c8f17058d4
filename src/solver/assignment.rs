use im::HashMap;
use serde::Serialize;

use crate::puzzle::{Puzzle, SlotId};

/// A partial mapping from slots to the words filling them.
///
/// Backed by a persistent map: [`Assignment::assign`] returns a new value
/// sharing structure with the old one, so the search can keep one assignment
/// per branch and "undo" by simply dropping the extended copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assignment {
    words: HashMap<SlotId, String>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this assignment with `slot` set to `word`.
    #[must_use]
    pub fn assign(&self, slot: SlotId, word: String) -> Self {
        Self {
            words: self.words.update(slot, word),
        }
    }

    pub fn contains(&self, slot: SlotId) -> bool {
        self.words.contains_key(&slot)
    }

    pub fn word(&self, slot: SlotId) -> Option<&str> {
        self.words.get(&slot).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &str)> {
        self.words.iter().map(|(id, word)| (*id, word.as_str()))
    }

    /// Whether every slot of `puzzle` has a word.
    pub fn is_complete(&self, puzzle: &Puzzle) -> bool {
        self.words.len() == puzzle.slot_count()
    }

    /// Whether the assigned words fit the puzzle: each word matches its
    /// slot's length, no word is used twice, and crossing slots agree on
    /// their shared letter. An incomplete assignment is judged only on the
    /// slots it covers.
    pub fn is_consistent(&self, puzzle: &Puzzle) -> bool {
        for (x, wx) in self.iter() {
            if wx.chars().count() != puzzle.slot(x).length {
                return false;
            }
            for (y, wy) in self.iter() {
                if x == y {
                    continue;
                }
                if wx == wy {
                    return false;
                }
                if let Some((i, j)) = puzzle.overlap(x, y) {
                    if wx.chars().nth(i) != wy.chars().nth(j) {
                        return false;
                    }
                }
            }
        }
        true
    }
}
