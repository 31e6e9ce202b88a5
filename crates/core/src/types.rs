//! Shared search types.
//!
//! These types keep the engines game-agnostic:
//! - Player: the two sides, with an involutive `opponent`
//! - OrderHint: the shape of a move, as far as ordering heuristics care
//! - SearchOutcome: result of a depth-limited search

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players.
///
/// `Player::One` moves first in every bundled game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, in turn order.
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// Get the opposing player.
    ///
    /// `p.opponent().opponent() == p` for every player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based index (0 for `One`, 1 for `Two`).
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

/// What a move looks like to the ordering heuristics.
///
/// Ordering branches on this closed variant instead of inspecting the
/// game's move type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderHint {
    /// A capture, with the material value of the captured piece (victim)
    /// and of the capturing piece (aggressor). Ranked by MVV-LVA.
    Capture { victim: i32, aggressor: i32 },

    /// A plain positional index out of `width` slots (e.g. a column).
    /// Ranked by closeness to the center slot.
    Positional { index: u32, width: u32 },

    /// No structural preference.
    Quiet,
}

/// Result of a depth-limited search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<M> {
    /// Chosen move, `None` if the position has no legal move.
    pub best_move: Option<M>,

    /// Score of the chosen move from the searching player's perspective.
    /// `f64::NEG_INFINITY` when there was nothing to search.
    pub score: f64,

    /// Number of positions visited.
    pub nodes: u64,
}

impl<M> SearchOutcome<M> {
    /// Outcome for a position without legal moves.
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: f64::NEG_INFINITY,
            nodes: 0,
        }
    }
}
