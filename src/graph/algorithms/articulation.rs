//! Articulation points of an undirected graph.
//!
//! An articulation point (cut vertex) is a vertex whose removal increases the number of
//! connected components. This module finds all of them with a single forest traversal
//! of the DFS engine, tracking for every vertex the earliest discovered vertex its DFS
//! subtree can reach through at most one back edge.
//!
//! # Algorithm
//!
//! With `reach[v]` the earliest such vertex for the subtree of `v`:
//!
//! - A traversal root is a cut vertex iff it has more than one tree child
//! - Any other vertex `p` is a cut vertex iff one of its tree children `v` has
//!   `reach[v]` equal to `p` or `v`, meaning the subtree of `v` cannot climb above `p`
//!
//! Leaves never qualify, and neither does a vertex without neighbors.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::{
    graph::{
        algorithms::dfs::{dfs_forest, Control, DfsState, DfsVisitor},
        edge::EdgeType,
        node::NodeId,
        store::UndirectedGraph,
    },
    Result,
};

/// Visitor maintaining reachable ancestors and tree degrees.
#[derive(Default)]
struct ArticulationSearch {
    reachable_ancestor: BTreeMap<NodeId, NodeId>,
    tree_out_degree: BTreeMap<NodeId, usize>,
    points: BTreeSet<NodeId>,
}

impl ArticulationSearch {
    fn reach(&self, node: NodeId) -> NodeId {
        self.reachable_ancestor.get(&node).copied().unwrap_or(node)
    }

    fn tree_children(&self, node: NodeId) -> usize {
        self.tree_out_degree.get(&node).copied().unwrap_or(0)
    }

    /// Moves `reach[node]` up to `candidate` if `candidate` was discovered earlier.
    fn lift(&mut self, state: &DfsState, node: NodeId, candidate: NodeId) {
        if discovered_before(state, candidate, self.reach(node)) {
            self.reachable_ancestor.insert(node, candidate);
        }
    }
}

fn discovered_before(state: &DfsState, a: NodeId, b: NodeId) -> bool {
    matches!(
        (state.discovery_time(a), state.discovery_time(b)),
        (Some(a), Some(b)) if a < b
    )
}

impl DfsVisitor for ArticulationSearch {
    fn vertex_early(&mut self, _: &DfsState, node: NodeId) -> Control {
        self.reachable_ancestor.insert(node, node);
        Control::Continue
    }

    fn edge(&mut self, state: &DfsState, parent: NodeId, child: NodeId, kind: EdgeType) -> Control {
        match kind {
            EdgeType::Tree => *self.tree_out_degree.entry(parent).or_default() += 1,
            EdgeType::Back if state.parent(parent) != Some(child) => {
                self.lift(state, parent, child);
            }
            _ => {}
        }
        Control::Continue
    }

    fn vertex_late(&mut self, state: &DfsState, node: NodeId) -> Control {
        let Some(parent) = state.parent(node) else {
            if self.tree_children(node) > 1 {
                self.points.insert(node);
            }
            return Control::Continue;
        };

        let reach = self.reach(node);
        let parent_is_root = state.parent(parent).is_none();

        if (reach == parent || reach == node) && !parent_is_root {
            self.points.insert(parent);
        }
        if reach == node && self.tree_children(node) > 0 {
            self.points.insert(node);
        }

        self.lift(state, parent, reach);
        Control::Continue
    }
}

/// Finds every articulation point of an undirected graph.
///
/// The graph may be disconnected; every connected component is searched.
///
/// # Returns
///
/// Exactly the vertices whose removal increases the number of connected components.
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`](crate::Error::InvariantViolation) only if the
/// engine meets an unclassifiable edge.
///
/// # Complexity
///
/// - Time: O((V + E) log V)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::{algorithms::find_articulation_points, NodeId, UndirectedGraph};
///
/// // Two triangles sharing vertex 2
/// let graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)])?;
/// let points = find_articulation_points(&graph)?;
///
/// assert_eq!(points.into_iter().collect::<Vec<_>>(), vec![NodeId::new(2)]);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn find_articulation_points(graph: &UndirectedGraph) -> Result<BTreeSet<NodeId>> {
    let mut search = ArticulationSearch::default();
    dfs_forest(graph, &mut DfsState::new(), &mut search)?;

    debug!(
        "{} articulation points over {} vertices",
        search.points.len(),
        graph.node_count()
    );
    Ok(search.points)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::graph::{algorithms::articulation::find_articulation_points, NodeId, UndirectedGraph};

    fn set(values: &[usize]) -> BTreeSet<NodeId> {
        values.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_articulation_path() {
        let graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        assert_eq!(find_articulation_points(&graph).unwrap(), set(&[1, 2, 3]));
    }

    #[test]
    fn test_articulation_star() {
        let star = UndirectedGraph::from_edges([(0, 1), (0, 2), (0, 3)]).unwrap();
        assert_eq!(find_articulation_points(&star).unwrap(), set(&[0]));

        // center discovered as a tree child of the first leaf
        let star = UndirectedGraph::from_edges([(5, 1), (5, 2), (5, 3)]).unwrap();
        assert_eq!(find_articulation_points(&star).unwrap(), set(&[5]));

        let single_leaf = UndirectedGraph::from_edges([(0, 1)]).unwrap();
        assert!(find_articulation_points(&single_leaf).unwrap().is_empty());
    }

    #[test]
    fn test_articulation_single_vertex() {
        let mut graph = UndirectedGraph::new();
        graph.add_node(NodeId::new(0));
        assert!(find_articulation_points(&graph).unwrap().is_empty());
    }

    #[test]
    fn test_articulation_cycle() {
        let graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        assert!(find_articulation_points(&graph).unwrap().is_empty());
    }

    #[test]
    fn test_articulation_cycle_with_tail() {
        // triangle 0-1-2 with a tail 2-3-4
        let graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4)]).unwrap();
        assert_eq!(find_articulation_points(&graph).unwrap(), set(&[2, 3]));
    }

    #[test]
    fn test_articulation_disconnected() {
        let mut graph =
            UndirectedGraph::from_edges([(0, 1), (1, 2), (10, 11), (11, 12), (12, 10), (12, 13)])
                .unwrap();
        graph.add_node(NodeId::new(20));

        assert_eq!(find_articulation_points(&graph).unwrap(), set(&[1, 12]));
    }

    #[test]
    fn test_articulation_root_with_back_edge() {
        // root 0 has two tree children only if 1 and 2 are not connected below it
        let joined = UndirectedGraph::from_edges([(0, 1), (0, 2), (1, 2)]).unwrap();
        assert!(find_articulation_points(&joined).unwrap().is_empty());

        let split = UndirectedGraph::from_edges([(0, 1), (0, 2), (1, 3), (2, 4)]).unwrap();
        assert_eq!(find_articulation_points(&split).unwrap(), set(&[0, 1, 2]));
    }
}
