//! Shuffle permutation over queue indices
//!
//! Shuffle never reorders the queue itself; it is a traversal permutation
//! over canonical indices. Toggling shuffle on or off therefore never moves
//! the playing track.

use rand::seq::SliceRandom;
use rand::Rng;

/// A traversal permutation over `[0, len)`
///
/// `order[k]` is the canonical queue index visited at traversal position
/// `k`. Invariants: the order is a bijection over `[0, len)`, and the
/// anchor index (the track playing at generation time) maps to itself, so
/// enabling shuffle never moves or restarts the playing track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShuffleOrder {
    order: Vec<usize>,
}

impl ShuffleOrder {
    /// Generate a fresh permutation anchored at `current`
    ///
    /// Fisher-Yates over every index except `current`, which is then
    /// spliced back at its own traversal position.
    pub(crate) fn generate<R: Rng>(len: usize, current: usize, rng: &mut R) -> Self {
        debug_assert!(current < len, "anchor out of range");

        let mut rest: Vec<usize> = (0..len).filter(|&i| i != current).collect();
        rest.shuffle(rng);

        let mut order = rest;
        order.insert(current, current);

        Self { order }
    }

    /// Canonical index at traversal position `pos`
    pub(crate) fn index_at(&self, pos: usize) -> Option<usize> {
        self.order.get(pos).copied()
    }

    /// Traversal position of a canonical index
    pub(crate) fn position_of(&self, index: usize) -> Option<usize> {
        self.order.iter().position(|&i| i == index)
    }

    /// Number of entries in the permutation
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Verify the bijection invariant
    #[cfg(test)]
    fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.order.len()];
        for &i in &self.order {
            if i >= seen.len() || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }
}
