//! Monte Carlo Tree Search with UCB1 selection and random playouts.
//!
//! Each simulation runs four phases over the arena tree:
//! 1. selection: descend through fully expanded nodes by UCB1
//! 2. expansion: turn one random untried move into a new child
//! 3. rollout: play random moves to the end of the game, or until the
//!    playout cap, and score the result for the root player
//! 4. backpropagation: add the reward to every node on the path, flipping
//!    it at each level so each node holds the win rate of the player who
//!    moved into it
//!
//! Simulations repeat until the time budget (or the optional rollout cap)
//! runs out. The root child with the best average reward is played.

use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use versus_core::{Engine, GameState, Player};

use crate::{
    config::MctsConfig,
    node::{Node, NodeId},
    tree::Tree,
};

const WIN_REWARD: f64 = 1.0;
const DRAW_REWARD: f64 = 0.5;
const LOSS_REWARD: f64 = 0.0;

/// Counters from the most recent search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MctsStats {
    /// Simulations completed.
    pub rollouts: u64,

    /// Wall-clock time spent searching.
    pub elapsed: Duration,

    /// Nodes in the tree, root included.
    pub nodes_created: u64,
}

/// Statistics of one root child after a search.
#[derive(Clone, Debug, PartialEq)]
pub struct ChildStats<M> {
    pub mv: M,
    pub visits: u64,
    /// Win rate of the searching player after this move.
    pub mean_reward: f64,
}

/// Monte Carlo Tree Search engine.
///
/// Generic over:
/// - `G`: The game being played
/// - `R`: The random number generator driving selection ties, expansion
///   and rollouts
pub struct Mcts<G: GameState, R: Rng> {
    config: MctsConfig,
    rng: R,
    tree: Tree<G::Move>,
    stats: MctsStats,
}

impl<G: GameState, R: Rng> Mcts<G, R> {
    /// Create a new MCTS instance.
    pub fn new(config: MctsConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            tree: Tree::new(Node::root(Vec::new(), true)),
            stats: MctsStats::default(),
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Rollouts, elapsed time and tree size of the most recent search.
    pub fn statistics(&self) -> MctsStats {
        self.stats
    }

    /// Root children of the most recent search, in creation order.
    pub fn root_children(&self) -> Vec<ChildStats<G::Move>> {
        self.tree
            .root()
            .children
            .iter()
            .map(|&(mv, id)| {
                let stats = &self.tree.get(id).stats;
                ChildStats {
                    mv,
                    visits: stats.visits,
                    mean_reward: stats.mean_reward(),
                }
            })
            .collect()
    }

    /// Search from `state` for `player` and return the chosen move.
    ///
    /// Returns `None` when the root has no legal moves or the budget ran out
    /// before a single child was created.
    pub fn search(&mut self, state: &G, player: Player) -> Option<G::Move> {
        let start = Instant::now();
        let terminal = state.is_terminal();
        let moves = state.valid_moves();
        let stuck = moves.is_empty();
        self.tree.reset(Node::root(moves, terminal));
        self.stats = MctsStats {
            nodes_created: 1,
            ..Default::default()
        };

        if terminal || stuck {
            debug!(terminal, "mcts search: root has no moves");
            return None;
        }

        let budget = Duration::from_millis(self.config.thinking_time_ms);
        while start.elapsed() < budget && !self.rollout_cap_reached() {
            self.simulate(state, player);
            self.stats.rollouts += 1;
        }

        self.stats.elapsed = start.elapsed();
        self.stats.nodes_created = self.tree.len() as u64;

        for child in self.root_children() {
            trace!(mv = ?child.mv, visits = child.visits, mean = child.mean_reward, "root child");
        }
        let best = self.best_root_move();
        debug!(
            rollouts = self.stats.rollouts,
            nodes = self.stats.nodes_created,
            elapsed_ms = self.stats.elapsed.as_millis() as u64,
            found = best.is_some(),
            "mcts search finished"
        );
        best
    }

    fn rollout_cap_reached(&self) -> bool {
        self.config
            .max_rollouts
            .is_some_and(|cap| self.stats.rollouts >= cap)
    }

    /// Run a single simulation: select -> expand -> rollout -> backpropagate.
    fn simulate(&mut self, root_state: &G, root: Player) {
        let opponent = root_state.opponent(root);
        let mover_at = |depth: usize| if depth % 2 == 0 { root } else { opponent };

        let mut state = root_state.clone();
        let mut id = NodeId::ROOT;
        let mut depth = 0;

        // SELECT: descend while every move already has a child
        loop {
            let node = self.tree.get(id);
            if node.terminal || !node.is_fully_expanded() || node.children.is_empty() {
                break;
            }
            let Some((mv, child)) = self.select_child(id) else {
                break;
            };
            let applied = state.make_move(mv, mover_at(depth));
            debug_assert!(applied, "tree move rejected by game");
            id = child;
            depth += 1;
        }

        // EXPAND: one random untried move becomes a child
        let untried = &mut self.tree.get_mut(id).untried;
        if !untried.is_empty() {
            let index = self.rng.gen_range(0..untried.len());
            let mv = untried.swap_remove(index);
            let applied = state.make_move(mv, mover_at(depth));
            debug_assert!(applied, "untried move rejected by game");
            depth += 1;

            let terminal = state.is_terminal();
            let moves = if terminal { Vec::new() } else { state.valid_moves() };
            id = self.tree.add_child(Node::new(Some(mv), Some(id), moves, terminal));
        }

        let reward = self.rollout(state, mover_at(depth), root);
        self.backpropagate(id, depth, reward);
    }

    /// Pick the child with the highest UCB1 value, breaking exact ties
    /// uniformly at random.
    fn select_child(&mut self, id: NodeId) -> Option<(G::Move, NodeId)> {
        let node = self.tree.get(id);
        let parent_visits = node.stats.visits;

        let mut best = f64::NEG_INFINITY;
        let mut candidates = Vec::new();
        for &(mv, child) in &node.children {
            let score = self
                .tree
                .get(child)
                .stats
                .ucb1(parent_visits, self.config.exploration);
            if score > best {
                best = score;
                candidates.clear();
                candidates.push((mv, child));
            } else if score == best {
                candidates.push((mv, child));
            }
        }
        candidates.choose(&mut self.rng).copied()
    }

    /// Play random moves from `state` and score the result for `root`.
    fn rollout(&mut self, mut state: G, mut mover: Player, root: Player) -> f64 {
        let mut plies = 0;
        while !state.is_terminal() && plies < self.config.max_playout_depth {
            let moves = state.valid_moves();
            let Some(&mv) = moves.choose(&mut self.rng) else {
                break;
            };
            if !state.make_move(mv, mover) {
                break;
            }
            mover = state.opponent(mover);
            plies += 1;
        }

        if plies >= self.config.max_playout_depth && !state.is_terminal() {
            let score = state.evaluate(root);
            return if score > 0.0 {
                WIN_REWARD
            } else if score < 0.0 {
                LOSS_REWARD
            } else {
                DRAW_REWARD
            };
        }

        if state.check_win(root) {
            WIN_REWARD
        } else if state.check_win(state.opponent(root)) {
            LOSS_REWARD
        } else {
            DRAW_REWARD
        }
    }

    /// Walk from `leaf` to the root, crediting each node for the player
    /// who moved into it.
    fn backpropagate(&mut self, leaf: NodeId, depth: usize, root_reward: f64) {
        // The root player moved into nodes at odd depth.
        let mut reward = if depth % 2 == 1 {
            root_reward
        } else {
            1.0 - root_reward
        };
        let mut current = Some(leaf);
        while let Some(id) = current {
            let node = self.tree.get_mut(id);
            node.stats.visits += 1;
            node.stats.reward_sum += reward;
            reward = 1.0 - reward;
            current = node.parent;
        }
    }

    /// Root child with the highest average reward; the earliest created
    /// wins ties.
    fn best_root_move(&self) -> Option<G::Move> {
        let mut best: Option<(G::Move, f64)> = None;
        for &(mv, id) in &self.tree.root().children {
            let mean = self.tree.get(id).stats.mean_reward();
            if best.map_or(true, |(_, best_mean)| mean > best_mean) {
                best = Some((mv, mean));
            }
        }
        best.map(|(mv, _)| mv)
    }
}

impl<G: GameState, R: Rng> Engine<G> for Mcts<G, R> {
    fn name(&self) -> &'static str {
        "mcts"
    }

    fn get_move(&mut self, state: &G, player: Player) -> Option<G::Move> {
        self.search(state, player)
    }
}
