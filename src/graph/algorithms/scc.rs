//! Strongly Connected Components (SCC) using Kosaraju's algorithm.
//!
//! This module finds the strongly connected components of a graph, the maximal sets of
//! vertices such that there is a path from every vertex to every other vertex in the set,
//! and collapses them into a [`Condensation`].
//!
//! Two formulations are provided and always agree:
//!
//! - [`strongly_connected_components`] - Kosaraju's two-pass algorithm, O((V + E) log V)
//! - [`strongly_connected_components_by_reachability`] - forward-reachable set intersected
//!   with backward-reachable set per vertex, O(V · (V + E) log V); a slow reference
//!
//! # Use Cases
//!
//! - **Cycle detection**: Every cycle lies inside one component
//! - **Dependency analysis**: Mutually dependent groups collapse into one condensed node
//! - **Ordering**: The condensation is acyclic and can be sorted topologically
//!
//! # Component Identity
//!
//! Each component is named by its smallest member, its *representative*. The name does
//! not depend on traversal order, so both formulations label every component identically.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::{
    graph::{
        algorithms::{
            connectivity::ComponentCollector,
            dfs::{dfs, DfsState},
            traversal::finish_order,
        },
        node::NodeId,
        reversed::Reversed,
        store::DirectedGraph,
        traits::{Predecessors, Successors},
    },
    Error, Result,
};

/// The strongly connected components of a graph and the graph collapsed over them.
///
/// Every component becomes one node of [`Condensation::graph`], named by its smallest
/// member. For every original edge `i -> j` whose endpoints lie in different components
/// the condensation holds the edge `representative(i) -> representative(j)`. The
/// condensation never contains a self-loop and is acyclic.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::{algorithms::strongly_connected_components, DirectedGraph, NodeId};
///
/// // Cycle 1 -> 2 -> 3 -> 1, entered from 0
/// let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 1)])?;
/// let condensation = strongly_connected_components(&graph)?;
///
/// assert_eq!(condensation.len(), 2);
/// assert_eq!(condensation.representative(NodeId::new(3)), Some(NodeId::new(1)));
/// assert!(condensation.graph().contains_edge(NodeId::new(0), NodeId::new(1)));
/// assert!(condensation.is_cyclic(NodeId::new(1)));
/// assert!(!condensation.is_cyclic(NodeId::new(0)));
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Condensation {
    /// Component representative of every original vertex
    representatives: BTreeMap<NodeId, NodeId>,
    /// Members of every component, keyed by representative
    components: BTreeMap<NodeId, BTreeSet<NodeId>>,
    /// Representatives of components that contain a cycle
    cyclic: BTreeSet<NodeId>,
    graph: DirectedGraph,
}

impl Condensation {
    /// Returns the representative of the component containing `node`.
    #[must_use]
    pub fn representative(&self, node: NodeId) -> Option<NodeId> {
        self.representatives.get(&node).copied()
    }

    /// Returns `true` if both vertices belong to the same component.
    ///
    /// Unknown vertices belong to no component.
    #[must_use]
    pub fn same_component(&self, a: NodeId, b: NodeId) -> bool {
        match (self.representative(a), self.representative(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Returns the members of the component named by `representative`.
    #[must_use]
    pub fn component(&self, representative: NodeId) -> Option<&BTreeSet<NodeId>> {
        self.components.get(&representative)
    }

    /// Returns an iterator over all components, ordered by representative.
    pub fn components(&self) -> impl Iterator<Item = (NodeId, &BTreeSet<NodeId>)> + '_ {
        self.components
            .iter()
            .map(|(&representative, members)| (representative, members))
    }

    /// Returns the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the original graph had no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns `true` if the component contains a cycle.
    ///
    /// That is the case when it has more than one member, or its only member has a
    /// self-loop.
    #[must_use]
    pub fn is_cyclic(&self, representative: NodeId) -> bool {
        self.cyclic.contains(&representative)
    }

    /// Returns the condensation graph.
    #[must_use]
    pub fn graph(&self) -> &DirectedGraph {
        &self.graph
    }

    /// Consumes the result and returns the condensation graph.
    #[must_use]
    pub fn into_graph(self) -> DirectedGraph {
        self.graph
    }
}

/// Computes the strongly connected components of a graph.
///
/// Uses Kosaraju's algorithm with two passes of the DFS engine:
///
/// 1. A forest traversal over the graph records the finish order
/// 2. Walking that order from the last finished vertex, every vertex not yet reached
///    starts a traversal of the reversed graph; everything it discovers is one component
///
/// Both passes go through [`dfs`]. The second pass shares one state, so a vertex is
/// claimed by the first component that reaches it.
///
/// # Arguments
///
/// * `graph` - The graph to analyze; undirected graphs yield their connected components
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`] only if the engine meets an unclassifiable edge.
///
/// # Complexity
///
/// - Time: O((V + E) log V)
/// - Space: O(V + E)
pub fn strongly_connected_components<G>(graph: &G) -> Result<Condensation>
where
    G: Successors + Predecessors,
{
    let order = finish_order(graph)?;

    let reversed = Reversed::new(graph);
    let mut state = DfsState::new();
    let mut components = Vec::new();
    for &node in order.iter().rev() {
        if state.is_discovered(node) {
            continue;
        }

        let mut collector = ComponentCollector::default();
        dfs(&reversed, node, &mut state, &mut collector)?;
        components.push(collector.members);
    }

    debug!(
        "kosaraju: {} components over {} vertices",
        components.len(),
        graph.node_count()
    );
    build_condensation(graph, components)
}

/// Computes the strongly connected components by intersecting reachable sets.
///
/// For every vertex not yet assigned, the component is the set of vertices reachable from
/// it that can also reach it back. Each reachable set comes from a fresh traversal of the
/// graph or of its reversed view.
///
/// The result is identical to [`strongly_connected_components`] for every input.
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`] only if the engine meets an unclassifiable edge.
///
/// # Complexity
///
/// - Time: O(V · (V + E) log V)
/// - Space: O(V + E)
pub fn strongly_connected_components_by_reachability<G>(graph: &G) -> Result<Condensation>
where
    G: Successors + Predecessors,
{
    let reversed = Reversed::new(graph);
    let mut assigned = BTreeSet::new();
    let mut components = Vec::new();

    for node in graph.node_ids() {
        if assigned.contains(&node) {
            continue;
        }

        let mut forward = ComponentCollector::default();
        dfs(graph, node, &mut DfsState::new(), &mut forward)?;
        let mut backward = ComponentCollector::default();
        dfs(&reversed, node, &mut DfsState::new(), &mut backward)?;

        let component: BTreeSet<NodeId> = forward
            .members
            .intersection(&backward.members)
            .copied()
            .collect();
        assigned.extend(component.iter().copied());
        components.push(component);
    }

    debug!(
        "reachability: {} components over {} vertices",
        components.len(),
        graph.node_count()
    );
    build_condensation(graph, components)
}

/// Collapses `components`, which must partition the vertices of `graph`.
fn build_condensation<G: Successors>(
    graph: &G,
    components: Vec<BTreeSet<NodeId>>,
) -> Result<Condensation> {
    let mut condensation = Condensation::default();

    for members in components {
        let Some(&representative) = members.first() else {
            continue;
        };

        for &member in &members {
            condensation.representatives.insert(member, representative);
        }
        if members.len() > 1 {
            condensation.cyclic.insert(representative);
        }
        condensation.graph.add_node(representative);
        condensation.components.insert(representative, members);
    }

    let lookup = |node: NodeId| {
        condensation
            .representatives
            .get(&node)
            .copied()
            .ok_or(Error::NodeNotFound(node))
    };

    let mut edges = Vec::new();
    let mut self_loops = Vec::new();
    for from in graph.node_ids() {
        let from_rep = lookup(from)?;
        for to in graph.successors(from) {
            let to_rep = lookup(to)?;
            if from_rep != to_rep {
                edges.push((from_rep, to_rep));
            } else if from == to {
                self_loops.push(from_rep);
            }
        }
    }

    for (from, to) in edges {
        condensation.graph.add_edge(from, to)?;
    }
    condensation.cyclic.extend(self_loops);
    Ok(condensation)
}
