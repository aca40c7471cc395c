//! Directed graph with a DFS edge class attached to every edge.
//!
//! [`TaggedGraph`] is the output of [`make_dfs_tree`](crate::graph::algorithms::make_dfs_tree)
//! and [`make_dfs_forest`](crate::graph::algorithms::make_dfs_forest). Rendering
//! collaborators draw tree edges solid and every other edge dotted, see [`EdgeStyle`].

use std::collections::BTreeMap;

use crate::{
    graph::{
        edge::{EdgeStyle, EdgeType},
        node::NodeId,
        store::DirectedGraph,
        traits::{GraphBase, Predecessors, Successors},
    },
    Result,
};

/// A directed graph whose edges carry the [`EdgeType`] they were classified as.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::{EdgeStyle, EdgeType, NodeId, TaggedGraph};
///
/// let mut tree = TaggedGraph::new();
/// tree.add_edge(NodeId::new(0), NodeId::new(1), EdgeType::Tree)?;
/// tree.add_edge(NodeId::new(1), NodeId::new(0), EdgeType::Back)?;
///
/// assert_eq!(tree.style(NodeId::new(0), NodeId::new(1)), Some(EdgeStyle::Solid));
/// assert_eq!(tree.style(NodeId::new(1), NodeId::new(0)), Some(EdgeStyle::Dotted));
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedGraph {
    graph: DirectedGraph,
    tags: BTreeMap<(NodeId, NodeId), EdgeType>,
}

impl TaggedGraph {
    /// Creates an empty tagged graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex; returns `true` if it is new.
    pub fn add_node(&mut self, node: NodeId) -> bool {
        self.graph.add_node(node)
    }

    /// Adds a tagged edge, replacing the tag of an existing edge.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the edge is new.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying [`DirectedGraph::add_edge`].
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, kind: EdgeType) -> Result<bool> {
        let inserted = self.graph.add_edge(from, to)?;
        self.tags.insert((from, to), kind);
        Ok(inserted)
    }

    /// Returns the class of an edge, if the edge exists.
    #[must_use]
    pub fn tag(&self, from: NodeId, to: NodeId) -> Option<EdgeType> {
        self.tags.get(&(from, to)).copied()
    }

    /// Returns the rendering style of an edge, if the edge exists.
    #[must_use]
    pub fn style(&self, from: NodeId, to: NodeId) -> Option<EdgeStyle> {
        self.tag(from, to).map(EdgeType::style)
    }

    /// Returns an iterator over all edges with their class, ordered by source then target.
    pub fn edges(&self) -> impl Iterator<Item = ((NodeId, NodeId), EdgeType)> + '_ {
        self.tags.iter().map(|(&edge, &kind)| (edge, kind))
    }

    /// Returns an iterator over the tree edges only.
    pub fn tree_edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.edges()
            .filter(|(_, kind)| kind.is_tree())
            .map(|(edge, _)| edge)
    }

    /// Returns the untagged structure.
    #[must_use]
    pub fn graph(&self) -> &DirectedGraph {
        &self.graph
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.tags.len()
    }
}

impl GraphBase for TaggedGraph {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.graph.nodes()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }

    fn is_directed(&self) -> bool {
        true
    }
}

impl Successors for TaggedGraph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.successors(node)
    }
}

impl Predecessors for TaggedGraph {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.graph.predecessors(node)
    }
}
