//! Trait definitions for graph abstractions.
//!
//! This module defines the traits through which the traversal engine and the analyses
//! see a graph. By programming against these traits, the same algorithms run over the
//! concrete [`Graph`](crate::graph::Graph), the zero-copy [`Reversed`](crate::graph::Reversed)
//! view and the [`TaggedGraph`](crate::graph::TaggedGraph) output.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Core properties: vertex set, orientation
//! - [`Successors`] - Forward adjacency (children, or neighbors when undirected)
//! - [`Predecessors`] - Backward adjacency (parents, or neighbors when undirected)
//!
//! # Ordering Contract
//!
//! Every iterator returned by these traits yields vertices in ascending [`NodeId`] order.
//! The DFS engine still sorts the children it receives, but analyses that iterate
//! [`GraphBase::node_ids`] directly (forest traversal roots, condensation building)
//! depend on the ascending order for determinism.

use crate::graph::NodeId;

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::{DirectedGraph, GraphBase, NodeId};
///
/// let graph = DirectedGraph::from_edges([(0, 1), (5, 1)])?;
///
/// assert_eq!(graph.node_count(), 3);
/// assert!(graph.contains_node(NodeId::new(5)));
/// assert!(graph.is_directed());
/// # Ok::<(), graphscope::Error>(())
/// ```
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers, in ascending order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if the vertex is part of the graph.
    fn contains_node(&self, node: NodeId) -> bool;

    /// Returns `true` for directed graphs.
    ///
    /// The DFS engine uses this to decide between the four-way directed edge
    /// classification and the tree/back-only undirected one.
    fn is_directed(&self) -> bool;
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successors of the given vertex, in ascending order.
    ///
    /// For a directed edge `(u, v)`, `v` is a successor of `u`. For an undirected graph
    /// the successors are the neighbors. An unknown vertex has no successors.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessors of the given vertex, in ascending order.
    ///
    /// For a directed edge `(u, v)`, `u` is a predecessor of `v`. For an undirected graph
    /// the predecessors are the neighbors. An unknown vertex has no predecessors.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}
