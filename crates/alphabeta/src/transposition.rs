//! Transposition table for Alpha-Beta.
//!
//! Entries are keyed by the full board snapshot plus the search context
//! that affects the value (remaining depth, node type, root player).
//! Because the snapshot itself is the key, distinct positions never share
//! an entry.
//!
//! A value computed inside a narrowed window is only a bound on the true
//! value, so every entry records which kind of value it holds:
//! - `Exact`: the search finished strictly inside its window
//! - `Lower`: the search failed high, the true value is at least `score`
//! - `Upper`: the search failed low, the true value is at most `score`

use std::collections::HashMap;
use std::hash::Hash;

use versus_core::Player;

/// Search context that, together with the board, determines a node's value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StateKey<B> {
    pub board: B,
    pub depth: usize,
    pub maximizing: bool,
    pub root_player: Player,
}

/// Kind of value stored in an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

impl Bound {
    /// Classify a fail-soft result against the window it was searched with.
    pub fn classify(score: f64, alpha: f64, beta: f64) -> Self {
        if score <= alpha {
            Bound::Upper
        } else if score >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TtEntry {
    pub score: f64,
    pub bound: Bound,
}

impl TtEntry {
    /// The stored score, if it settles a node searched with `(alpha, beta)`.
    pub fn usable(&self, alpha: f64, beta: f64) -> Option<f64> {
        match self.bound {
            Bound::Exact => Some(self.score),
            Bound::Lower if self.score >= beta => Some(self.score),
            Bound::Upper if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

/// Position cache for a single top-level search.
#[derive(Clone, Debug)]
pub struct TranspositionTable<B: Eq + Hash> {
    entries: HashMap<StateKey<B>, TtEntry>,
    hits: u64,
}

impl<B: Eq + Hash> Default for TranspositionTable<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Eq + Hash> TranspositionTable<B> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
        }
    }

    /// Drop all entries and reset the hit counter.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of probes answered from the table since the last clear.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn get(&self, key: &StateKey<B>) -> Option<&TtEntry> {
        self.entries.get(key)
    }

    /// Look up `key` for a node searched with `(alpha, beta)`.
    ///
    /// Returns the stored score only when its bound makes it valid for this
    /// window.
    pub fn probe(&mut self, key: &StateKey<B>, alpha: f64, beta: f64) -> Option<f64> {
        let score = self.entries.get(key)?.usable(alpha, beta)?;
        self.hits += 1;
        Some(score)
    }

    /// Record the result of searching `key` with the window `(alpha, beta)`.
    ///
    /// An exact entry is never replaced.
    pub fn store(&mut self, key: StateKey<B>, score: f64, alpha: f64, beta: f64) {
        let entry = TtEntry {
            score,
            bound: Bound::classify(score, alpha, beta),
        };
        self.entries
            .entry(key)
            .and_modify(|existing| {
                if existing.bound != Bound::Exact {
                    *existing = entry;
                }
            })
            .or_insert(entry);
    }
}
