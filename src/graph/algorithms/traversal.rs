//! Orders and trees derived from a depth-first search.
//!
//! This module provides small analyses that are thin visitors over the DFS engine.
//!
//! # Algorithms
//!
//! - [`postorder`] - Vertices reachable from a start, each after all its descendants
//! - [`finish_order`] - Post-order of a whole forest traversal
//! - [`reachable_count`] - Number of vertices reachable from a start
//! - [`make_dfs_tree`] - The DFS tree of one traversal with every edge tagged
//! - [`make_dfs_forest`] - The same over a forest traversal
//!
//! All results are deterministic: children are explored in ascending id order and
//! forest roots are taken in ascending id order.

use crate::{
    graph::{
        algorithms::dfs::{dfs, dfs_forest, Control, DfsState, DfsVisitor},
        edge::EdgeType,
        node::NodeId,
        tagged::TaggedGraph,
        traits::Successors,
    },
    Error, Result,
};

/// Collects vertices in the order they finish.
#[derive(Default)]
struct FinishOrder {
    order: Vec<NodeId>,
}

impl DfsVisitor for FinishOrder {
    fn vertex_late(&mut self, _: &DfsState, node: NodeId) -> Control {
        self.order.push(node);
        Control::Continue
    }
}

/// Computes the postorder traversal of vertices reachable from the start.
///
/// In postorder, a vertex is listed after all its descendants in the DFS tree.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` is not a vertex of `graph`.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::{algorithms::postorder, DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (0, 3)])?;
/// let order = postorder(&graph, NodeId::new(0))?;
/// assert_eq!(order, [2, 1, 3, 0].map(NodeId::new));
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn postorder<G: Successors>(graph: &G, start: NodeId) -> Result<Vec<NodeId>> {
    let mut visitor = FinishOrder::default();
    dfs(graph, start, &mut DfsState::new(), &mut visitor)?;
    Ok(visitor.order)
}

/// Computes the finish order of a forest traversal over every vertex.
///
/// The last vertex in the result finished last. Kosaraju's algorithm walks this order
/// backwards.
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`] only if the engine meets an unclassifiable edge.
pub fn finish_order<G: Successors>(graph: &G) -> Result<Vec<NodeId>> {
    let mut visitor = FinishOrder::default();
    dfs_forest(graph, &mut DfsState::new(), &mut visitor)?;
    Ok(visitor.order)
}

/// Counts the vertices reachable from `start`, `start` included.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` is not a vertex of `graph`.
pub fn reachable_count<G: Successors>(graph: &G, start: NodeId) -> Result<usize> {
    let traversal = dfs(graph, start, &mut DfsState::new(), &mut ())?;
    Ok(traversal.elapsed / 2)
}

/// Builds a [`TaggedGraph`] out of every reported vertex and edge.
#[derive(Default)]
struct TreeBuilder {
    tree: TaggedGraph,
    error: Option<Error>,
}

impl TreeBuilder {
    fn finish(self) -> Result<TaggedGraph> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.tree),
        }
    }
}

impl DfsVisitor for TreeBuilder {
    fn vertex_early(&mut self, _: &DfsState, node: NodeId) -> Control {
        self.tree.add_node(node);
        Control::Continue
    }

    fn edge(&mut self, _: &DfsState, parent: NodeId, child: NodeId, kind: EdgeType) -> Control {
        match self.tree.add_edge(parent, child, kind) {
            Ok(_) => Control::Continue,
            Err(error) => {
                self.error = Some(error);
                Control::Abort
            }
        }
    }
}

/// Builds the DFS tree of a traversal from `start`.
///
/// Every visited vertex becomes a node of the result, and every edge the engine reports
/// becomes a directed `parent -> child` edge tagged with its [`EdgeType`]. Undirected
/// input therefore yields each edge once, oriented the way the traversal walked it.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` is not a vertex of `graph`.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::{algorithms::make_dfs_tree, EdgeType, NodeId, UndirectedGraph};
///
/// let graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 0)])?;
/// let tree = make_dfs_tree(&graph, NodeId::new(0))?;
///
/// assert_eq!(tree.tree_edges().count(), 2);
/// assert_eq!(tree.tag(NodeId::new(2), NodeId::new(0)), Some(EdgeType::Back));
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn make_dfs_tree<G: Successors>(graph: &G, start: NodeId) -> Result<TaggedGraph> {
    let mut builder = TreeBuilder::default();
    dfs(graph, start, &mut DfsState::new(), &mut builder)?;
    builder.finish()
}

/// Builds the DFS forest of a traversal over every vertex.
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`] only if the engine meets an unclassifiable edge.
pub fn make_dfs_forest<G: Successors>(graph: &G) -> Result<TaggedGraph> {
    let mut builder = TreeBuilder::default();
    dfs_forest(graph, &mut DfsState::new(), &mut builder)?;
    builder.finish()
}
