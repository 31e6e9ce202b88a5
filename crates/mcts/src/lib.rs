//! Monte Carlo Tree Search.
//!
//! A time-budgeted MCTS engine for any
//! [`GameState`](versus_core::GameState). It needs no evaluation function
//! beyond the game's own win test, which it reaches through random
//! playouts. The static evaluation is only consulted when a playout hits
//! the depth cap.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use versus_core::Player;
//! use versus_games::Connect4;
//! use versus_mcts::{Mcts, MctsConfig};
//!
//! let state = Connect4::new();
//! let rng = ChaCha8Rng::seed_from_u64(42);
//! let mut mcts = Mcts::new(MctsConfig::with_rollouts(200), rng);
//!
//! let best = mcts.search(&state, Player::One);
//! assert!(best.is_some());
//! println!("rollouts: {}", mcts.statistics().rollouts);
//! ```

pub mod config;
mod node;
pub mod search;
mod tree;

pub use config::MctsConfig;
pub use search::{ChildStats, Mcts, MctsStats};
