//! Depth-limited adversarial search.
//!
//! Two engines over any [`GameState`](versus_core::GameState):
//! - [`Minimax`]: exhaustive search, the reference for correctness
//! - [`AlphaBeta`]: fail-soft pruning, transposition table, killer and
//!   history move ordering
//!
//! Both search `max_depth` plies below each root move and score leaves
//! from the root player's perspective, so at equal depth they agree on the
//! value of every root move.

pub mod alphabeta;
pub mod config;
pub mod minimax;
pub mod ordering;
pub mod transposition;

pub use alphabeta::{AlphaBeta, SearchStats};
pub use config::DepthConfig;
pub use minimax::Minimax;
pub use ordering::{HistoryTable, KillerTable, MoveOrderer};
pub use transposition::{Bound, StateKey, TranspositionTable};
