//! Arena-allocated MCTS tree.
//!
//! Using a Vec<Node> with indices provides better cache locality
//! and simpler ownership compared to Rc<RefCell<Node>>.

use crate::node::{Node, NodeId};
use std::hash::Hash;

/// Arena-allocated MCTS tree.
///
/// Nodes are stored in a contiguous vector and referenced by index. The
/// whole tree is dropped at once when a new search starts.
#[derive(Debug)]
pub struct Tree<M: Copy + Eq + Hash> {
    nodes: Vec<Node<M>>,
}

impl<M: Copy + Eq + Hash> Tree<M> {
    /// Create a tree holding only `root`.
    pub fn new(root: Node<M>) -> Self {
        Self { nodes: vec![root] }
    }

    /// Get a reference to a node by ID.
    ///
    /// # Panics
    /// Panics if the NodeId is invalid.
    pub fn get(&self, id: NodeId) -> &Node<M> {
        &self.nodes[id.0]
    }

    /// Get a mutable reference to a node by ID.
    ///
    /// # Panics
    /// Panics if the NodeId is invalid.
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<M> {
        &mut self.nodes[id.0]
    }

    /// Add `node` as the newest child of its parent, returning its ID.
    pub fn add_child(&mut self, node: Node<M>) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let (Some(parent), Some(mv)) = (node.parent, node.mv) {
            self.nodes[parent.0].children.push((mv, id));
        }
        self.nodes.push(node);
        id
    }

    /// Discard every node and start over from `root`.
    pub fn reset(&mut self, root: Node<M>) {
        self.nodes.clear();
        self.nodes.push(root);
    }

    /// Get the number of nodes in the tree, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true, the root always exists).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    pub fn root(&self) -> &Node<M> {
        self.get(NodeId::ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_creation() {
        let tree: Tree<u8> = Tree::new(Node::root(vec![0, 1], false));
        assert_eq!(tree.len(), 1); // Root node
        assert!(!tree.is_empty());
    }

    #[test]
    fn test_add_child_links_parent() {
        let mut tree: Tree<u8> = Tree::new(Node::root(vec![0, 1], false));
        let id = tree.add_child(Node::new(Some(1), Some(NodeId::ROOT), vec![], false));

        assert_eq!(id.0, 1); // After root
        assert_eq!(tree.get(id).parent, Some(NodeId::ROOT));
        assert_eq!(tree.root().children, vec![(1, id)]);
    }

    #[test]
    fn test_children_keep_creation_order() {
        let mut tree: Tree<u8> = Tree::new(Node::root(vec![], false));
        let a = tree.add_child(Node::new(Some(5), Some(NodeId::ROOT), vec![], false));
        let b = tree.add_child(Node::new(Some(2), Some(NodeId::ROOT), vec![], false));
        let c = tree.add_child(Node::new(Some(7), Some(a), vec![], false));

        assert_eq!(tree.root().children, vec![(5, a), (2, b)]);
        assert_eq!(tree.get(a).children, vec![(7, c)]);
    }

    #[test]
    fn test_tree_reset() {
        let mut tree: Tree<u8> = Tree::new(Node::root(vec![1, 2], false));

        // Add some nodes
        tree.add_child(Node::new(Some(1), Some(NodeId::ROOT), vec![], false));
        tree.add_child(Node::new(Some(2), Some(NodeId::ROOT), vec![], false));
        assert_eq!(tree.len(), 3);

        // Reset
        tree.reset(Node::root(vec![3], false));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root().mv, None);
        assert!(tree.root().children.is_empty());
        assert_eq!(tree.root().untried, vec![3]);
    }
}
