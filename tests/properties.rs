//! Property tests for the graph store and the DFS engine.

use std::collections::BTreeMap;

use graphscope::prelude::*;
use quickcheck_macros::quickcheck;

/// Keeps generated ids small so edges collide and form cycles.
fn id(raw: u8) -> usize {
    usize::from(raw % 16)
}

fn directed(edges: &[(u8, u8)]) -> DirectedGraph {
    DirectedGraph::from_edges(edges.iter().map(|&(a, b)| (id(a), id(b)))).unwrap()
}

fn undirected(edges: &[(u8, u8)]) -> UndirectedGraph {
    UndirectedGraph::from_edges(
        edges
            .iter()
            .map(|&(a, b)| (id(a), id(b)))
            .filter(|(a, b)| a != b),
    )
    .unwrap()
}

#[derive(Default)]
struct EdgeLog(Vec<(NodeId, NodeId, EdgeType)>);

impl DfsVisitor for EdgeLog {
    fn edge(&mut self, _: &DfsState, parent: NodeId, child: NodeId, kind: EdgeType) -> Control {
        self.0.push((parent, child, kind));
        Control::Continue
    }
}

#[quickcheck]
fn forest_visits_every_vertex_once(edges: Vec<(u8, u8)>) -> bool {
    let graph = directed(&edges);
    let mut state = DfsState::new();
    let result = dfs_forest(&graph, &mut state, &mut ()).unwrap();

    !result.aborted
        && result.elapsed == 2 * graph.node_count()
        && state.discovered().len() == graph.node_count()
        && state.processed().len() == graph.node_count()
        && state
            .discovered()
            .iter()
            .all(|(node, &discovery)| state.finish_time(*node) > Some(discovery))
}

#[quickcheck]
fn timestamp_intervals_nest_or_are_disjoint(edges: Vec<(u8, u8)>) -> bool {
    let graph = directed(&edges);
    let mut state = DfsState::new();
    dfs_forest(&graph, &mut state, &mut ()).unwrap();

    let intervals: BTreeMap<NodeId, (usize, usize)> = graph
        .nodes()
        .map(|node| {
            let discovery = state.discovery_time(node).unwrap();
            let finish = state.finish_time(node).unwrap();
            (node, (discovery, finish))
        })
        .collect();

    intervals.values().all(|&(d1, f1)| {
        intervals.values().all(|&(d2, f2)| {
            let disjoint = f1 < d2 || f2 < d1;
            let nested = (d1 <= d2 && f2 <= f1) || (d2 <= d1 && f1 <= f2);
            disjoint || nested
        })
    })
}

#[quickcheck]
fn tree_edges_match_parents(edges: Vec<(u8, u8)>) -> bool {
    let graph = directed(&edges);
    let mut state = DfsState::new();
    let mut log = EdgeLog::default();
    dfs_forest(&graph, &mut state, &mut log).unwrap();

    let tree: Vec<(NodeId, NodeId)> = log
        .0
        .iter()
        .filter(|(_, _, kind)| *kind == EdgeType::Tree)
        .map(|&(parent, child, _)| (parent, child))
        .collect();

    tree.len() == state.parents().len()
        && tree
            .iter()
            .all(|&(parent, child)| state.parent(child) == Some(parent))
}

#[quickcheck]
fn directed_forest_reports_every_edge(edges: Vec<(u8, u8)>) -> bool {
    let graph = directed(&edges);
    let mut log = EdgeLog::default();
    dfs_forest(&graph, &mut DfsState::new(), &mut log).unwrap();

    log.0.len() == graph.edge_count()
}

#[quickcheck]
fn undirected_forest_reports_tree_and_back_only(edges: Vec<(u8, u8)>) -> bool {
    let graph = undirected(&edges);
    let mut log = EdgeLog::default();
    dfs_forest(&graph, &mut DfsState::new(), &mut log).unwrap();

    log.0.len() == graph.edge_count()
        && log
            .0
            .iter()
            .all(|(_, _, kind)| matches!(kind, EdgeType::Tree | EdgeType::Back))
}

#[quickcheck]
fn forest_is_deterministic(edges: Vec<(u8, u8)>) -> bool {
    let graph = directed(&edges);

    let mut first = EdgeLog::default();
    let mut first_state = DfsState::new();
    dfs_forest(&graph, &mut first_state, &mut first).unwrap();

    let mut second = EdgeLog::default();
    let mut second_state = DfsState::new();
    dfs_forest(&graph, &mut second_state, &mut second).unwrap();

    first.0 == second.0 && first_state == second_state
}

#[quickcheck]
fn store_stays_consistent_under_mutation(operations: Vec<(bool, u8, u8)>) -> bool {
    let mut graph = DirectedGraph::new();
    let mut mirror = UndirectedGraph::new();

    for (add, a, b) in operations {
        let (a, b) = (NodeId::new(id(a)), NodeId::new(id(b)));
        if add {
            graph.add_edge(a, b).unwrap();
            if a != b {
                mirror.add_edge(a, b).unwrap();
            }
        } else if a == b {
            let _ = graph.remove_node(a);
            let _ = mirror.remove_node(a);
        } else {
            let _ = graph.remove_edge(a, b);
            let _ = mirror.remove_edge(a, b);
        }

        if !graph.is_consistent() || !mirror.is_consistent() {
            return false;
        }
    }
    true
}

#[quickcheck]
fn text_format_roundtrips(edges: Vec<(u8, u8)>, isolated: Vec<u8>) -> bool {
    let mut graph = directed(&edges);
    for raw in isolated {
        graph.add_node(NodeId::new(usize::from(raw)));
    }
    let mirror = undirected(&edges);

    DirectedGraph::from_adjacency_text(&graph.to_adjacency_text()).as_ref() == Ok(&graph)
        && UndirectedGraph::from_adjacency_text(&mirror.to_string()).as_ref() == Ok(&mirror)
}

#[quickcheck]
fn reversed_twice_is_identity(edges: Vec<(u8, u8)>) -> bool {
    let graph = directed(&edges);
    graph.reversed().reversed() == graph && graph.reversed().edge_count() == graph.edge_count()
}
