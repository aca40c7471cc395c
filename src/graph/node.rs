//! Vertex identifier for graphs.
//!
//! This module provides the [`NodeId`] type, a strongly-typed identifier for vertices.
//! Unlike an arena index, a `NodeId` is chosen by the caller: graphs accept any
//! non-negative integer, dense or sparse, and never use it as an array offset.

use std::fmt;

/// A strongly-typed, caller-assigned vertex identifier.
///
/// `NodeId` wraps a `usize`, preventing accidental mixing of vertex identifiers with
/// timestamps, degrees or other integer values that flow through the traversal engine.
///
/// Identifiers are totally ordered; the DFS engine relies on that order to visit
/// children in ascending id order, which makes every traversal deterministic.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::{DirectedGraph, NodeId};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_node(NodeId::new(10));
/// graph.add_node(NodeId::new(3));
///
/// // Nodes are reported in ascending order, regardless of insertion order
/// let nodes: Vec<NodeId> = graph.nodes().collect();
/// assert_eq!(nodes, vec![NodeId::new(3), NodeId::new(10)]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw identifier.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw identifier value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphscope::graph::NodeId;
    ///
    /// let node = NodeId::new(5);
    /// assert_eq!(node.index(), 5);
    /// ```
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    /// Displays the bare identifier, as used by the textual adjacency format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
