//! Connected components of undirected graphs.

use std::collections::BTreeSet;

use log::debug;

use crate::{
    graph::{
        algorithms::dfs::{dfs, Control, DfsState, DfsVisitor},
        node::NodeId,
        store::UndirectedGraph,
    },
    Result,
};

/// Collects every vertex discovered while the collector is active.
#[derive(Default)]
pub(crate) struct ComponentCollector {
    pub(crate) members: BTreeSet<NodeId>,
}

impl DfsVisitor for ComponentCollector {
    fn vertex_early(&mut self, _: &DfsState, node: NodeId) -> Control {
        self.members.insert(node);
        Control::Continue
    }
}

/// Computes the connected components of an undirected graph.
///
/// # Returns
///
/// One set per component, ordered by smallest member. Isolated vertices form
/// components of their own.
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`](crate::Error::InvariantViolation) only if the
/// engine meets an unclassifiable edge.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::{algorithms::connected_components, NodeId, UndirectedGraph};
///
/// let mut graph = UndirectedGraph::from_edges([(0, 1), (2, 3)])?;
/// graph.add_node(NodeId::new(9));
///
/// let components = connected_components(&graph)?;
/// assert_eq!(components.len(), 3);
/// assert!(components[1].contains(&NodeId::new(3)));
/// # Ok::<(), graphscope::Error>(())
/// ```
pub fn connected_components(graph: &UndirectedGraph) -> Result<Vec<BTreeSet<NodeId>>> {
    let mut state = DfsState::new();
    let mut components = Vec::new();

    for root in graph.nodes() {
        if state.is_discovered(root) {
            continue;
        }

        let mut collector = ComponentCollector::default();
        dfs(graph, root, &mut state, &mut collector)?;
        components.push(collector.members);
    }

    debug!(
        "{} connected components over {} vertices",
        components.len(),
        graph.node_count()
    );
    Ok(components)
}

/// Counts the connected components of an undirected graph.
///
/// # Errors
///
/// See [`connected_components`].
pub fn count_connected_components(graph: &UndirectedGraph) -> Result<usize> {
    Ok(connected_components(graph)?.len())
}
