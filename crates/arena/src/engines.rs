//! Engine and game selection for the arena.

use std::fmt;

use clap::ValueEnum;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use versus_alphabeta::{AlphaBeta, Minimax};
use versus_core::{Engine, GameState};
use versus_mcts::Mcts;

use crate::config::ArenaConfig;

/// Search algorithm selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Minimax,
    Alphabeta,
    Mcts,
}

impl EngineKind {
    /// Build a fresh engine. Each game gets its own instance.
    pub fn build<G: GameState + 'static>(self, config: &ArenaConfig, seed: u64) -> Box<dyn Engine<G>> {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        match self {
            EngineKind::Minimax => Box::new(Minimax::new(config.minimax.clone())),
            EngineKind::Alphabeta => Box::new(AlphaBeta::<G, _>::new(config.alphabeta.clone(), rng)),
            EngineKind::Mcts => Box::new(Mcts::<G, _>::new(config.mcts.clone(), rng)),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Minimax => write!(f, "minimax"),
            EngineKind::Alphabeta => write!(f, "alphabeta"),
            EngineKind::Mcts => write!(f, "mcts"),
        }
    }
}

/// Game selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Connect4,
    Chess,
    Tictactoe,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameKind::Connect4 => write!(f, "connect4"),
            GameKind::Chess => write!(f, "chess"),
            GameKind::Tictactoe => write!(f, "tictactoe"),
        }
    }
}
