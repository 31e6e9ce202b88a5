use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{OrderHint, Player};

/// The capability set every searchable game position must expose.
///
/// A `GameState` is a mutable position owned by whoever cloned it. Engines
/// never touch the caller's instance: they clone once (or once per branch)
/// and mutate their private copies with [`GameState::make_move`].
///
/// `Clone` must produce a fully independent copy. Sharing any mutable
/// substructure between a state and its clone breaks every engine.
pub trait GameState: Clone + Send {
    /// A game move (e.g. a Connect Four column or a pair of chess squares).
    type Move: Copy + Eq + Hash + Debug + Send + Sync;

    /// Read-only board snapshot.
    ///
    /// The snapshot is also the position fingerprint used by transposition
    /// tables, so it must include every field that legal-move generation or
    /// evaluation reads (castling rights, side to move, clocks...). Two states
    /// with equal snapshots must be interchangeable for the rest of a search.
    type Board: Clone + Eq + Hash + Debug;

    /// Returns the current board snapshot.
    fn board(&self) -> Self::Board;

    /// Returns the legal moves for the side to move. Empty means no move.
    fn valid_moves(&self) -> Vec<Self::Move>;

    /// Applies `mv` for `player` in place and hands the turn to the opponent.
    ///
    /// Returns `false` (leaving the state untouched) if the move cannot be
    /// played.
    fn make_move(&mut self, mv: Self::Move, player: Player) -> bool;

    /// Returns true if the game has ended (win, loss or draw).
    fn is_terminal(&self) -> bool;

    /// Static score from `player`'s point of view.
    ///
    /// May be `f64::INFINITY` / `f64::NEG_INFINITY` for decided positions and
    /// must be exactly `0.0` for true draws. Never NaN.
    fn evaluate(&self, player: Player) -> f64;

    /// Returns true if `player` has won.
    fn check_win(&self, player: Player) -> bool;

    /// Returns the opponent of `player`.
    fn opponent(&self, player: Player) -> Player {
        player.opponent()
    }

    /// Ordering hint for `mv` in this position. Games without captures or
    /// positional structure can keep the default.
    fn order_hint(&self, _mv: Self::Move) -> OrderHint {
        OrderHint::Quiet
    }
}
