//! MCTS node types for tree storage.
//!
//! Uses arena allocation with indices for cache locality and simpler memory management.

use std::hash::Hash;

/// Index into the node arena.
///
/// Parents are referenced through this handle, so the child list is the
/// only owning edge in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);
}

/// Visit statistics for a single node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeStats {
    /// Simulations that passed through this node.
    pub visits: u64,

    /// Sum of rewards, from the perspective of the player who moved into
    /// this node.
    pub reward_sum: f64,
}

impl NodeStats {
    /// Average reward (Q/N).
    ///
    /// Returns 0.0 if the node has never been visited.
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.reward_sum / self.visits as f64
        }
    }

    /// UCB1 score given the parent's visit count.
    ///
    /// Unvisited nodes score infinity so they are always tried first.
    pub fn ucb1(&self, parent_visits: u64, exploration: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let n = self.visits as f64;
        let explore = ((parent_visits.max(1) as f64).ln() / n).sqrt();
        self.mean_reward() + exploration * explore
    }
}

/// A node in the MCTS tree.
#[derive(Clone, Debug)]
pub struct Node<M: Copy + Eq + Hash> {
    /// Move that led to this node (None for root).
    pub mv: Option<M>,

    /// Node this one was expanded from (None for root).
    pub parent: Option<NodeId>,

    /// Children in creation order: (move, node_id) pairs.
    pub children: Vec<(M, NodeId)>,

    /// Legal moves not yet expanded into children.
    pub untried: Vec<M>,

    /// Whether this node represents a terminal game state.
    pub terminal: bool,

    pub stats: NodeStats,
}

impl<M: Copy + Eq + Hash> Node<M> {
    /// Create an unvisited node.
    ///
    /// A terminal node never gets untried moves, even if the game still
    /// lists some.
    pub fn new(mv: Option<M>, parent: Option<NodeId>, untried: Vec<M>, terminal: bool) -> Self {
        Self {
            mv,
            parent,
            children: Vec::new(),
            untried: if terminal { Vec::new() } else { untried },
            terminal,
            stats: NodeStats::default(),
        }
    }

    /// Create the root node.
    pub fn root(untried: Vec<M>, terminal: bool) -> Self {
        Self::new(None, None, untried, terminal)
    }

    /// Whether every legal move has a child.
    pub fn is_fully_expanded(&self) -> bool {
        self.untried.is_empty()
    }
}
