//! Alpha-Beta search with transposition table and move ordering.
//!
//! Returns the same move as [`Minimax`](crate::Minimax) at the same depth
//! (up to random tie-breaking) while visiting far fewer positions:
//! - fail-soft pruning skips subtrees that cannot change the result
//! - a transposition table answers repeated positions, honoring bounds
//! - killer and history heuristics put refuting moves first
//!
//! All three structures are cleared at the start of every top-level
//! search.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use versus_core::{Engine, GameState, Player, SearchOutcome};

use crate::config::DepthConfig;
use crate::ordering::MoveOrderer;
use crate::transposition::{StateKey, TranspositionTable};

/// Counters from the most recent search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, including the root's children.
    pub nodes: u64,
    /// Positions answered by the transposition table.
    pub tt_hits: u64,
    /// Nodes where the window closed before every move was tried.
    pub cutoffs: u64,
}

/// Window bounds for one node.
#[derive(Clone, Copy, Debug)]
struct Window {
    alpha: f64,
    beta: f64,
}

impl Window {
    const FULL: Window = Window {
        alpha: f64::NEG_INFINITY,
        beta: f64::INFINITY,
    };
}

/// Pruned depth-limited search.
pub struct AlphaBeta<G: GameState, R: Rng> {
    config: DepthConfig,
    rng: R,
    table: TranspositionTable<G::Board>,
    orderer: MoveOrderer<G::Move>,
    stats: SearchStats,
}

impl<G: GameState, R: Rng> AlphaBeta<G, R> {
    /// Create an engine. `rng` is only drawn from for root tie-breaks.
    pub fn new(config: DepthConfig, rng: R) -> Self {
        let orderer = MoveOrderer::new(config.max_depth + 1);
        Self {
            config,
            rng,
            table: TranspositionTable::new(),
            orderer,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &DepthConfig {
        &self.config
    }

    /// Counters from the most recent search.
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Move ordering tables as left by the most recent search.
    pub fn orderer(&self) -> &MoveOrderer<G::Move> {
        &self.orderer
    }

    /// Transposition table as left by the most recent search.
    pub fn table(&self) -> &TranspositionTable<G::Board> {
        &self.table
    }

    /// Pick the best move for `player`.
    ///
    /// Same depth semantics as Minimax: each root move is followed by
    /// `max_depth` plies, opponent first, with leaves scored from
    /// `player`'s perspective. A later root move replaces the best only if
    /// it scores strictly higher, or, with random tie-breaking on, if it
    /// scores exactly the same and wins a `1 / tie_break_odds` draw.
    pub fn search(&mut self, state: &G, player: Player) -> SearchOutcome<G::Move> {
        self.reset();

        let mut moves = state.valid_moves();
        if moves.is_empty() {
            debug!("alpha-beta search: no legal moves");
            return SearchOutcome::no_move();
        }
        self.orderer.order(state, &mut moves, 0);

        let depth = self.config.max_depth;
        let mut outcome = SearchOutcome::no_move();
        let mut alpha = f64::NEG_INFINITY;

        for mv in moves {
            let mut child = state.clone();
            if !child.make_move(mv, player) {
                continue;
            }
            self.orderer.history.reward(mv, depth);

            let window = Window {
                alpha,
                beta: f64::INFINITY,
            };
            let score = self.alphabeta(&child, depth, 1, false, player, window);
            trace!(?mv, score, "root move searched");

            if outcome.best_move.is_none() || score > outcome.score {
                outcome.best_move = Some(mv);
                outcome.score = score;
                alpha = alpha.max(score);
            } else if score == outcome.score && self.config.random_tie_break {
                // A child that failed low against alpha only proves an upper
                // bound; confirm the tie with a full window first.
                let exact = if score <= alpha {
                    self.alphabeta(&child, depth, 1, false, player, Window::FULL)
                } else {
                    score
                };
                if exact == outcome.score && self.rng.gen_range(0..self.config.tie_break_odds.max(1)) == 0
                {
                    trace!(?mv, "tie-break replaced best move");
                    outcome.best_move = Some(mv);
                }
            }
        }

        self.stats.tt_hits = self.table.hits();
        outcome.nodes = self.stats.nodes;
        debug!(
            depth,
            nodes = self.stats.nodes,
            tt_hits = self.stats.tt_hits,
            cutoffs = self.stats.cutoffs,
            score = outcome.score,
            "alpha-beta search finished"
        );
        outcome
    }

    fn reset(&mut self) {
        self.table.clear();
        self.orderer.clear(self.config.max_depth + 1);
        self.stats = SearchStats::default();
    }

    fn alphabeta(
        &mut self,
        state: &G,
        depth: usize,
        ply: usize,
        maximizing: bool,
        root: Player,
        window: Window,
    ) -> f64 {
        self.stats.nodes += 1;
        if depth == 0 || state.is_terminal() {
            return state.evaluate(root);
        }

        let key = StateKey {
            board: state.board(),
            depth,
            maximizing,
            root_player: root,
        };
        if let Some(score) = self.table.probe(&key, window.alpha, window.beta) {
            return score;
        }

        let mut moves = state.valid_moves();
        if moves.is_empty() {
            return state.evaluate(root);
        }
        self.orderer.order(state, &mut moves, ply);

        let mover = if maximizing { root } else { state.opponent(root) };
        let Window {
            mut alpha,
            mut beta,
        } = window;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut searched = false;

        for mv in moves {
            let mut child = state.clone();
            if !child.make_move(mv, mover) {
                continue;
            }
            searched = true;
            let score = self.alphabeta(
                &child,
                depth - 1,
                ply + 1,
                !maximizing,
                root,
                Window { alpha, beta },
            );

            if maximizing {
                best = best.max(score);
                if best > alpha {
                    alpha = best;
                    self.orderer.history.reward(mv, depth);
                }
            } else {
                best = best.min(score);
                if best < beta {
                    beta = best;
                    self.orderer.history.reward(mv, depth);
                }
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                self.orderer.killers.record(ply, mv);
                break;
            }
        }

        if !searched {
            best = state.evaluate(root);
        }
        self.table.store(key, best, window.alpha, window.beta);
        best
    }
}

impl<G: GameState, R: Rng> Engine<G> for AlphaBeta<G, R> {
    fn name(&self) -> &'static str {
        "alphabeta"
    }

    fn get_move(&mut self, state: &G, player: Player) -> Option<G::Move> {
        self.search(state, player).best_move
    }
}
