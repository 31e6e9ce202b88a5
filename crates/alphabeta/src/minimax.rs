//! Plain Minimax search.
//!
//! Explores the full tree to the configured depth with no pruning and no
//! caching. Alpha-Beta must choose the same moves, so this is also the
//! reference it is tested against.

use tracing::debug;
use versus_core::{Engine, GameState, Player, SearchOutcome};

use crate::config::DepthConfig;

/// Exhaustive depth-limited search.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: DepthConfig,
    last_nodes: u64,
}

impl Minimax {
    pub fn new(config: DepthConfig) -> Self {
        Self {
            config,
            last_nodes: 0,
        }
    }

    pub fn config(&self) -> &DepthConfig {
        &self.config
    }

    /// Positions visited by the most recent search.
    pub fn last_nodes(&self) -> u64 {
        self.last_nodes
    }

    /// Pick the best move for `player`.
    ///
    /// Each root move is followed by `max_depth` plies, opponent first.
    /// Every leaf is scored from `player`'s perspective. Among equally
    /// scored moves the first in generation order wins.
    pub fn search<G: GameState>(&mut self, state: &G, player: Player) -> SearchOutcome<G::Move> {
        let mut outcome = SearchOutcome::no_move();
        let mut nodes = 0;

        for mv in state.valid_moves() {
            let mut child = state.clone();
            if !child.make_move(mv, player) {
                continue;
            }
            let score = minimax(&child, self.config.max_depth, false, player, &mut nodes);
            if outcome.best_move.is_none() || score > outcome.score {
                outcome.best_move = Some(mv);
                outcome.score = score;
            }
        }

        outcome.nodes = nodes;
        self.last_nodes = nodes;
        debug!(
            depth = self.config.max_depth,
            nodes,
            score = outcome.score,
            "minimax search finished"
        );
        outcome
    }
}

fn minimax<G: GameState>(
    state: &G,
    depth: usize,
    maximizing: bool,
    root: Player,
    nodes: &mut u64,
) -> f64 {
    *nodes += 1;
    if depth == 0 || state.is_terminal() {
        return state.evaluate(root);
    }

    let mover = if maximizing { root } else { state.opponent(root) };
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut searched = false;

    for mv in state.valid_moves() {
        let mut child = state.clone();
        if !child.make_move(mv, mover) {
            continue;
        }
        searched = true;
        let score = minimax(&child, depth - 1, !maximizing, root, nodes);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    if searched {
        best
    } else {
        state.evaluate(root)
    }
}

impl<G: GameState> Engine<G> for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn get_move(&mut self, state: &G, player: Player) -> Option<G::Move> {
        self.search(state, player).best_move
    }
}
