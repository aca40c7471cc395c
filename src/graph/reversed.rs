//! Zero-copy reversed view of a graph.

use crate::graph::{
    node::NodeId,
    traits::{GraphBase, Predecessors, Successors},
};

/// A borrowed view of a graph with every edge inverted.
///
/// The successors of a vertex in the view are its predecessors in the underlying graph
/// and vice versa. Kosaraju's second pass walks this view instead of materializing the
/// transposed graph.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::{DirectedGraph, NodeId, Reversed, Successors};
///
/// let graph = DirectedGraph::from_edges([(0, 1), (2, 1)])?;
/// let view = Reversed::new(&graph);
///
/// let children: Vec<NodeId> = view.successors(NodeId::new(1)).collect();
/// assert_eq!(children, vec![NodeId::new(0), NodeId::new(2)]);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Reversed<'g, G> {
    graph: &'g G,
}

impl<'g, G> Reversed<'g, G> {
    /// Wraps a graph.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Reversed { graph }
    }

    /// Returns the underlying graph.
    #[must_use]
    pub fn inner(&self) -> &'g G {
        self.graph
    }
}

impl<G: GraphBase> GraphBase for Reversed<'_, G> {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.graph.node_ids()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }

    fn is_directed(&self) -> bool {
        self.graph.is_directed()
    }
}

impl<G: Predecessors> Successors for Reversed<'_, G> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.predecessors(node)
    }
}

impl<G: Successors> Predecessors for Reversed<'_, G> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.successors(node)
    }
}
