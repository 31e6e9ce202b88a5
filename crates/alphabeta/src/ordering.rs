//! Move ordering heuristics for Alpha-Beta.
//!
//! Moves are ranked by a combined score:
//! - capture value (MVV-LVA) or center bias, depending on the move's shape
//! - a large bonus if the move is a killer at the current ply
//! - the move's accumulated history weight
//!
//! Both tables live for a single top-level search and are cleared at its
//! start.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

use versus_core::{GameState, OrderHint};

/// Bonus for a killer move, above any capture or positional score.
pub const KILLER_BONUS: i64 = 1_000_000;

/// Offset that ranks every capture above quiet moves.
pub const CAPTURE_BASE: i64 = 10_000;

/// Killer slots kept per ply.
pub const KILLERS_PER_PLY: usize = 2;

/// Heuristic score of a move's shape, before killer and history bonuses.
pub fn hint_score(hint: OrderHint) -> i64 {
    match hint {
        // Most valuable victim first, least valuable aggressor breaks ties.
        OrderHint::Capture { victim, aggressor } => {
            CAPTURE_BASE + 10 * victim as i64 - aggressor as i64
        }
        OrderHint::Positional { index, width } => {
            let center = (width.saturating_sub(1) / 2) as i64;
            center - (index as i64 - center).abs()
        }
        OrderHint::Quiet => 0,
    }
}

/// Moves that caused a beta cutoff, per ply, most recent first.
#[derive(Clone, Debug)]
pub struct KillerTable<M> {
    slots: Vec<[Option<M>; KILLERS_PER_PLY]>,
}

impl<M: Copy + Eq> KillerTable<M> {
    /// Create a table with slots for plies `0..=max_ply`.
    pub fn new(max_ply: usize) -> Self {
        Self {
            slots: vec![[None; KILLERS_PER_PLY]; max_ply + 1],
        }
    }

    /// Forget every killer and resize for plies `0..=max_ply`.
    pub fn clear(&mut self, max_ply: usize) {
        self.slots.clear();
        self.slots.resize(max_ply + 1, [None; KILLERS_PER_PLY]);
    }

    /// Record `mv` as the newest killer at `ply`, displacing the oldest.
    ///
    /// A move already in the newest slot is left alone, so a ply never
    /// holds the same move twice.
    pub fn record(&mut self, ply: usize, mv: M) {
        if ply >= self.slots.len() {
            self.slots.resize(ply + 1, [None; KILLERS_PER_PLY]);
        }
        let slot = &mut self.slots[ply];
        if slot[0] == Some(mv) {
            return;
        }
        slot[1] = slot[0];
        slot[0] = Some(mv);
    }

    /// Whether `mv` is a killer at `ply`.
    pub fn is_killer(&self, ply: usize, mv: M) -> bool {
        self.slots
            .get(ply)
            .is_some_and(|slot| slot.contains(&Some(mv)))
    }

    /// The killers stored at `ply`, newest first.
    pub fn killers(&self, ply: usize) -> impl Iterator<Item = M> + '_ {
        self.slots.get(ply).into_iter().flatten().flatten().copied()
    }
}

/// Accumulated weight of moves that proved good anywhere in the search.
#[derive(Clone, Debug)]
pub struct HistoryTable<M: Eq + Hash> {
    weights: HashMap<M, u64>,
}

impl<M: Copy + Eq + Hash> Default for HistoryTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Copy + Eq + Hash> HistoryTable<M> {
    pub fn new() -> Self {
        Self {
            weights: HashMap::new(),
        }
    }

    pub fn clear(&mut self) {
        self.weights.clear();
    }

    /// Add `2^depth` to `mv`'s weight, so deep results outweigh shallow ones.
    pub fn reward(&mut self, mv: M, depth: usize) {
        let bonus = 1u64 << depth.min(62);
        let weight = self.weights.entry(mv).or_insert(0);
        *weight = weight.saturating_add(bonus);
    }

    /// Current weight of `mv` (0 if never rewarded).
    pub fn weight(&self, mv: M) -> u64 {
        self.weights.get(&mv).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Killer and history tables plus the ranking that combines them.
#[derive(Clone, Debug)]
pub struct MoveOrderer<M: Copy + Eq + Hash> {
    pub killers: KillerTable<M>,
    pub history: HistoryTable<M>,
}

impl<M: Copy + Eq + Hash> MoveOrderer<M> {
    pub fn new(max_ply: usize) -> Self {
        Self {
            killers: KillerTable::new(max_ply),
            history: HistoryTable::new(),
        }
    }

    /// Reset both tables for a new top-level search.
    pub fn clear(&mut self, max_ply: usize) {
        self.killers.clear(max_ply);
        self.history.clear();
    }

    /// Combined ordering score of `mv` at `ply`.
    pub fn score<G>(&self, state: &G, mv: M, ply: usize) -> i64
    where
        G: GameState<Move = M>,
    {
        let killer = if self.killers.is_killer(ply, mv) {
            KILLER_BONUS
        } else {
            0
        };
        let history = self.history.weight(mv).min(i64::MAX as u64 / 2) as i64;
        hint_score(state.order_hint(mv))
            .saturating_add(killer)
            .saturating_add(history)
    }

    /// Sort `moves` best-first. Equal scores keep the game's own order.
    pub fn order<G>(&self, state: &G, moves: &mut [M], ply: usize)
    where
        G: GameState<Move = M>,
    {
        moves.sort_by_cached_key(|&mv| Reverse(self.score(state, mv, ply)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use versus_games::Connect4;

    #[test]
    fn test_capture_scores_mvv_lva() {
        let pawn_takes_queen = hint_score(OrderHint::Capture {
            victim: 9,
            aggressor: 1,
        });
        let queen_takes_queen = hint_score(OrderHint::Capture {
            victim: 9,
            aggressor: 9,
        });
        let pawn_takes_pawn = hint_score(OrderHint::Capture {
            victim: 1,
            aggressor: 1,
        });
        let king_takes_pawn = hint_score(OrderHint::Capture {
            victim: 1,
            aggressor: 100,
        });

        assert!(pawn_takes_queen > queen_takes_queen);
        assert!(queen_takes_queen > pawn_takes_pawn);
        assert!(king_takes_pawn > hint_score(OrderHint::Quiet));
    }

    #[test]
    fn test_center_bias() {
        let scores: Vec<i64> = (0..7)
            .map(|index| hint_score(OrderHint::Positional { index, width: 7 }))
            .collect();
        assert_eq!(scores, vec![0, 1, 2, 3, 2, 1, 0]);
    }

    #[test]
    fn test_killer_table_keeps_two_newest() {
        let mut killers = KillerTable::new(4);
        killers.record(1, 'a');
        killers.record(1, 'b');
        killers.record(1, 'c');

        let stored: Vec<char> = killers.killers(1).collect();
        assert_eq!(stored, vec!['c', 'b']);
        assert!(!killers.is_killer(1, 'a'));
        assert!(!killers.is_killer(0, 'c'));
    }

    #[test]
    fn test_killer_table_ignores_repeat() {
        let mut killers = KillerTable::new(2);
        killers.record(0, 'a');
        killers.record(0, 'b');
        killers.record(0, 'b');

        let stored: Vec<char> = killers.killers(0).collect();
        assert_eq!(stored, vec!['b', 'a']);
    }

    proptest! {
        #[test]
        fn prop_killer_slots_bounded_and_distinct(
            records in prop::collection::vec((0usize..6, 0u8..5), 0..64),
        ) {
            let mut killers = KillerTable::new(3);
            for &(ply, mv) in &records {
                killers.record(ply, mv);
                let newest: Vec<u8> = killers.killers(ply).collect();
                prop_assert_eq!(newest.first().copied(), Some(mv));
            }
            for ply in 0..6 {
                let stored: Vec<u8> = killers.killers(ply).collect();
                prop_assert!(stored.len() <= KILLERS_PER_PLY);
                if let [first, second] = stored.as_slice() {
                    prop_assert_ne!(first, second);
                }
            }
        }
    }

    #[test]
    fn test_killer_table_grows_past_max_ply() {
        let mut killers = KillerTable::new(1);
        killers.record(5, 'x');
        assert!(killers.is_killer(5, 'x'));

        killers.clear(1);
        assert!(!killers.is_killer(5, 'x'));
        assert_eq!(killers.killers(5).count(), 0);
    }

    #[test]
    fn test_history_rewards_depth() {
        let mut history = HistoryTable::new();
        history.reward(3u8, 1);
        history.reward(3u8, 4);
        history.reward(5u8, 0);

        assert_eq!(history.weight(3), 2 + 16);
        assert_eq!(history.weight(5), 1);
        assert_eq!(history.weight(6), 0);

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_saturates() {
        let mut history = HistoryTable::new();
        for _ in 0..4 {
            history.reward(0u8, 200);
        }
        assert_eq!(history.weight(0), u64::MAX);
    }

    #[test]
    fn test_connect4_center_first_order() {
        let game = Connect4::new();
        let orderer = MoveOrderer::new(4);
        let mut moves = vec![0, 1, 2, 3, 4, 5, 6];
        orderer.order(&game, &mut moves, 0);
        assert_eq!(moves, vec![3, 2, 4, 1, 5, 0, 6]);
    }

    #[test]
    fn test_killer_and_history_promote_moves() {
        let game = Connect4::new();
        let mut orderer = MoveOrderer::new(4);
        orderer.killers.record(2, 6);
        orderer.history.reward(0, 3);

        let mut moves = game.valid_moves();
        orderer.order(&game, &mut moves, 2);
        assert_eq!(moves[0], 6);
        assert_eq!(moves[1], 0);

        // The killer bonus only applies at its own ply.
        let mut moves = game.valid_moves();
        orderer.order(&game, &mut moves, 1);
        assert_eq!(moves[0], 0);
    }
}
