//! The consistency engine: the binary crossing constraint and the AC-3
//! propagation loop that enforces it across the whole puzzle.

use tracing::{debug, trace};

use crate::{
    puzzle::{Puzzle, SlotId},
    solver::{domains::DomainStore, stats::SearchStats, work_list::WorkList},
};

/// Whether `wx` and `wy` can occupy two slots crossing at the given
/// character offsets.
///
/// Two words are compatible when they agree at the crossing *and* are not
/// the same word: a word can never be reused for two slots, even where the
/// letters would line up.
pub fn compatible(wx: &str, wy: &str, overlap: (usize, usize)) -> bool {
    wx != wy && wx.chars().nth(overlap.0) == wy.chars().nth(overlap.1)
}

/// Makes `x` arc-consistent with `y`: removes from `x`'s domain every word
/// with no compatible partner left in `y`'s domain.
///
/// A no-op returning `false` when the two slots do not cross. Returns `true`
/// iff `x`'s domain shrank.
pub fn revise(domains: &mut DomainStore, puzzle: &Puzzle, x: SlotId, y: SlotId) -> bool {
    let Some(overlap) = puzzle.overlap(x, y) else {
        return false;
    };
    let support = domains.candidates(y).clone();
    let removed = domains.retain(x, |wx| support.iter().any(|wy| compatible(wx, wy, overlap)));
    if removed > 0 {
        trace!(x, y, removed, "revised domain");
    }
    removed > 0
}

/// Runs the AC-3 fixpoint over `domains`.
///
/// `arcs` seeds the worklist; when `None`, every ordered pair of crossing
/// slots is queued. Arcs are processed first-in-first-out; whenever a
/// revision shrinks a domain, every arc pointing *into* the revised slot
/// (except the one just used as support) is queued again.
///
/// Returns `true` once the worklist drains with every domain non-empty, or
/// `false` as soon as any domain is wiped out.
pub fn ac3(
    domains: &mut DomainStore,
    puzzle: &Puzzle,
    arcs: Option<Vec<(SlotId, SlotId)>>,
    stats: &mut SearchStats,
) -> bool {
    let start = std::time::Instant::now();
    let mut worklist = WorkList::new();
    match arcs {
        Some(seed) => {
            for arc in seed {
                worklist.push_back(arc);
            }
        }
        None => {
            for x in puzzle.slot_ids() {
                for &y in puzzle.neighbours(x) {
                    worklist.push_back((x, y));
                }
            }
        }
    }

    while let Some((x, y)) = worklist.pop_front() {
        stats.revisions += 1;
        let before = domains.size(x);
        if revise(domains, puzzle, x, y) {
            stats.prunings += (before - domains.size(x)) as u64;
            if domains.is_empty(x) {
                debug!(slot = x, "propagation wiped out a domain");
                stats.propagation_micros += start.elapsed().as_micros() as u64;
                return false;
            }
            for &z in puzzle.neighbours(x) {
                if z != y {
                    worklist.push_back((z, x));
                }
            }
        }
    }

    debug!("arc consistency reached");
    stats.propagation_micros += start.elapsed().as_micros() as u64;
    true
}

/// How many of `neighbour`'s candidates would lose all support if `slot`
/// were fixed to `candidate`.
///
/// This is the speculative elimination count behind least-constraining-value
/// ordering: it simulates a revision of `neighbour` against the singleton
/// domain `{candidate}` without touching the live store. Zero when the two
/// slots do not cross.
pub fn ruled_out_by(
    domains: &DomainStore,
    puzzle: &Puzzle,
    neighbour: SlotId,
    slot: SlotId,
    candidate: &str,
) -> usize {
    let Some(overlap) = puzzle.overlap(neighbour, slot) else {
        return 0;
    };
    domains
        .candidates(neighbour)
        .iter()
        .filter(|wx| !compatible(wx.as_str(), candidate, overlap))
        .count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{ac3, compatible, revise, ruled_out_by};
    use crate::{
        puzzle::{rows, Direction, Grid, Puzzle, SlotId},
        solver::{domains::DomainStore, stats::SearchStats},
    };

    /// Across slot (id depends on derivation order) in the top row crossing
    /// a down slot in the middle column at across-offset 1 / down-offset 0.
    fn cross_puzzle() -> Puzzle {
        Puzzle::new(
            Grid::new(&rows(&[
                "___", //
                "#_#", //
                "#_#",
            ]))
            .unwrap(),
        )
    }

    fn slot_by_direction(puzzle: &Puzzle, direction: Direction) -> SlotId {
        puzzle
            .slot_ids()
            .find(|&id| puzzle.slot(id).direction == direction)
            .unwrap()
    }

    #[test]
    fn same_word_is_never_compatible() {
        // The letters line up, but reuse is barred.
        assert!(!compatible("cat", "cat", (1, 1)));
        assert!(compatible("cat", "car", (0, 0)));
        assert!(!compatible("cat", "dog", (1, 0)));
    }

    #[test]
    fn revise_without_overlap_is_a_no_op() {
        let puzzle = Puzzle::new(
            Grid::new(&rows(&[
                "___", //
                "###", //
                "___",
            ]))
            .unwrap(),
        );
        let mut store = DomainStore::new(&puzzle, ["cat", "dog"]);
        assert!(!revise(&mut store, &puzzle, 0, 1));
        assert_eq!(store.size(0), 2);
    }

    #[test]
    fn revise_drops_unsupported_words() {
        let puzzle = cross_puzzle();
        let across = slot_by_direction(&puzzle, Direction::Across);
        let down = slot_by_direction(&puzzle, Direction::Down);
        let mut store = DomainStore::new(&puzzle, ["cat", "ant"]);
        store.enforce_node_consistency(&puzzle);

        // cat[1] = 'a' is supported by ant[0]; ant[1] = 'n' has no support
        // (cat starts with 'c', and ant itself is barred by the reuse rule).
        assert!(revise(&mut store, &puzzle, across, down));
        let kept: Vec<&str> = store.candidates(across).iter().map(String::as_str).collect();
        assert_eq!(kept, vec!["cat"]);
    }

    #[test]
    fn ac3_prunes_to_the_unique_fill() {
        let puzzle = cross_puzzle();
        let across = slot_by_direction(&puzzle, Direction::Across);
        let down = slot_by_direction(&puzzle, Direction::Down);
        let mut store = DomainStore::new(&puzzle, ["cat", "ant"]);
        store.enforce_node_consistency(&puzzle);
        let mut stats = SearchStats::default();

        assert!(ac3(&mut store, &puzzle, None, &mut stats));
        assert_eq!(
            store
                .candidates(across)
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>(),
            vec!["cat"]
        );
        assert_eq!(
            store
                .candidates(down)
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>(),
            vec!["ant"]
        );
        assert!(stats.revisions >= 2);
        assert_eq!(stats.prunings, 2);
    }

    #[test]
    fn ac3_signals_wipeout_and_stops() {
        let puzzle = cross_puzzle();
        let mut store = DomainStore::new(&puzzle, ["cat", "dog"]);
        store.enforce_node_consistency(&puzzle);
        let mut stats = SearchStats::default();

        // cat/dog disagree at every crossing and reuse is barred, so the
        // first revision that runs empties a domain.
        assert!(!ac3(&mut store, &puzzle, None, &mut stats));
        assert!(puzzle.slot_ids().any(|id| store.is_empty(id)));
    }

    #[test]
    fn ac3_with_an_explicit_arc_list_only_touches_those_arcs() {
        let puzzle = Puzzle::new(
            Grid::new(&rows(&[
                "___", //
                "###", //
                "___",
            ]))
            .unwrap(),
        );
        let mut store = DomainStore::new(&puzzle, ["cat", "dog"]);
        store.enforce_node_consistency(&puzzle);
        let mut stats = SearchStats::default();

        // The two slots do not cross, so the seeded arc revises nothing.
        assert!(ac3(&mut store, &puzzle, Some(vec![(0, 1)]), &mut stats));
        assert_eq!(stats.revisions, 1);
        assert_eq!(stats.prunings, 0);
        assert_eq!(store.size(0), 2);
    }

    #[test]
    fn arc_consistent_domains_keep_mutual_support() {
        let puzzle = cross_puzzle();
        let mut store = DomainStore::new(&puzzle, ["cat", "ant", "car", "arc", "tin"]);
        store.enforce_node_consistency(&puzzle);
        let mut stats = SearchStats::default();
        assert!(ac3(&mut store, &puzzle, None, &mut stats));

        for x in puzzle.slot_ids() {
            for &y in puzzle.neighbours(x) {
                let overlap = puzzle.overlap(x, y).unwrap();
                for wx in store.candidates(x) {
                    assert!(
                        store
                            .candidates(y)
                            .iter()
                            .any(|wy| compatible(wx, wy, overlap)),
                        "{wx} has no support in the neighbour domain"
                    );
                }
            }
        }
    }

    #[test]
    fn ruled_out_counts_words_losing_support() {
        let puzzle = cross_puzzle();
        let across = slot_by_direction(&puzzle, Direction::Across);
        let down = slot_by_direction(&puzzle, Direction::Down);
        let mut store = DomainStore::new(&puzzle, ["cat", "ant", "tin"]);
        store.enforce_node_consistency(&puzzle);

        // Fixing the across slot to "cat" leaves down candidates needing to
        // start with 'a': ant survives, tin dies, cat dies by reuse.
        assert_eq!(ruled_out_by(&store, &puzzle, down, across, "cat"), 2);
        // Fixing it to "tin" demands an 'i' start: nothing survives.
        assert_eq!(ruled_out_by(&store, &puzzle, down, across, "tin"), 3);
        // Non-crossing slots are never charged.
        assert_eq!(ruled_out_by(&store, &puzzle, across, across, "cat"), 0);
    }
}
