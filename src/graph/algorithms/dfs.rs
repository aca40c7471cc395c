//! Visitor-driven depth-first search.
//!
//! This module provides the traversal engine every analysis in this crate is built on.
//! A single iterative DFS assigns discovery and finish timestamps, records the tree
//! parent of every vertex, classifies every examined edge and reports its progress to a
//! [`DfsVisitor`] through three hooks:
//!
//! - [`DfsVisitor::vertex_early`] - a vertex was just discovered
//! - [`DfsVisitor::edge`] - an edge was examined and classified
//! - [`DfsVisitor::vertex_late`] - every edge of a vertex was examined
//!
//! Every hook returns a [`Control`]; [`Control::Abort`] stops the whole traversal
//! immediately. No further hook runs for the current vertex or any of its ancestors.
//!
//! # Timestamps
//!
//! The clock lives in the caller-owned [`DfsState`]. It advances once before a vertex
//! is discovered and once before it is finished, so for a completed traversal every
//! finish time is strictly greater than the matching discovery time, and the intervals
//! of two vertices are either nested or disjoint.
//!
//! # Undirected Graphs
//!
//! Every undirected edge is stored in both directions. The engine reports it once:
//! as a tree edge when it discovers a vertex, otherwise as a back edge from the
//! endpoint discovered later. The edge back to the immediate tree parent and edges to
//! already finished descendants are not reported.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::{
    graph::{
        algorithms::DfsConfig,
        edge::EdgeType,
        node::NodeId,
        traits::Successors,
    },
    Error, Result,
};

/// Flow control returned by every [`DfsVisitor`] hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[must_use]
pub enum Control {
    /// Keep traversing
    #[default]
    Continue,
    /// Stop the traversal; [`Traversal::aborted`] will be set
    Abort,
}

impl Control {
    /// Returns `true` for [`Control::Abort`].
    #[must_use]
    pub fn is_abort(self) -> bool {
        self == Control::Abort
    }
}

/// Instrumentation hooks called by the DFS engine.
///
/// All methods default to doing nothing and continuing, so a visitor only overrides
/// what it needs. Every hook sees the traversal state as it is at that instant: during
/// [`edge`](DfsVisitor::edge) the child of a tree edge is still undiscovered, and during
/// [`vertex_late`](DfsVisitor::vertex_late) the vertex is not yet finished.
///
/// `()` is the visitor that observes nothing.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::{algorithms::{dfs, Control, DfsState, DfsVisitor}, DirectedGraph, NodeId};
///
/// /// Stops as soon as `target` is discovered.
/// struct Find {
///     target: NodeId,
/// }
///
/// impl DfsVisitor for Find {
///     fn vertex_early(&mut self, _: &DfsState, node: NodeId) -> Control {
///         if node == self.target {
///             Control::Abort
///         } else {
///             Control::Continue
///         }
///     }
/// }
///
/// let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 3)])?;
/// let mut state = DfsState::new();
/// let result = dfs(&graph, NodeId::new(0), &mut state, &mut Find { target: NodeId::new(2) })?;
///
/// assert!(result.aborted);
/// assert!(state.is_discovered(NodeId::new(2)));
/// assert!(!state.is_discovered(NodeId::new(3)));
/// # Ok::<(), graphscope::Error>(())
/// ```
pub trait DfsVisitor {
    /// Called right after `node` received its discovery time.
    fn vertex_early(&mut self, _state: &DfsState, _node: NodeId) -> Control {
        Control::Continue
    }

    /// Called for every reported edge, before the engine descends into a tree child.
    fn edge(
        &mut self,
        _state: &DfsState,
        _parent: NodeId,
        _child: NodeId,
        _kind: EdgeType,
    ) -> Control {
        Control::Continue
    }

    /// Called once every edge of `node` has been examined, before it is finished.
    fn vertex_late(&mut self, _state: &DfsState, _node: NodeId) -> Control {
        Control::Continue
    }
}

impl DfsVisitor for () {}

/// Result of one call to [`dfs`] or [`dfs_forest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Traversal {
    /// Clock ticks spent in this call; twice the number of visited vertices when completed
    pub elapsed: usize,
    /// `true` if a hook returned [`Control::Abort`]
    pub aborted: bool,
}

/// Traversal state of a depth-first search.
///
/// Holds discovery times, finish times, tree parents and the clock. The state is owned
/// by the caller and threaded through every call, so a forest traversal is simply a
/// sequence of [`dfs`] calls sharing one state.
///
/// # Examples
///
/// ```rust
/// use graphscope::graph::{algorithms::{dfs, DfsState}, DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_edges([(0, 1)])?;
/// let mut state = DfsState::new();
/// dfs(&graph, NodeId::new(0), &mut state, &mut ())?;
///
/// assert_eq!(state.discovery_time(NodeId::new(0)), Some(1));
/// assert_eq!(state.discovery_time(NodeId::new(1)), Some(2));
/// assert_eq!(state.finish_time(NodeId::new(1)), Some(3));
/// assert_eq!(state.finish_time(NodeId::new(0)), Some(4));
/// assert_eq!(state.parent(NodeId::new(1)), Some(NodeId::new(0)));
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DfsState {
    discovered: BTreeMap<NodeId, usize>,
    processed: BTreeMap<NodeId, usize>,
    parents: BTreeMap<NodeId, NodeId>,
    clock: usize,
}

impl DfsState {
    /// Creates an empty state with the clock at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pre-seeded state.
    ///
    /// The clock continues from the largest timestamp found in `discovered` and
    /// `processed`. The parts are taken as they are; use [`DfsState::verify`] or
    /// [`DfsConfig::strict`] to check them.
    #[must_use]
    pub fn from_parts(
        discovered: BTreeMap<NodeId, usize>,
        processed: BTreeMap<NodeId, usize>,
        parents: BTreeMap<NodeId, NodeId>,
    ) -> Self {
        let clock = discovered
            .values()
            .chain(processed.values())
            .copied()
            .max()
            .unwrap_or(0);

        DfsState {
            discovered,
            processed,
            parents,
            clock,
        }
    }

    /// Returns the discovery time of a vertex.
    #[must_use]
    pub fn discovery_time(&self, node: NodeId) -> Option<usize> {
        self.discovered.get(&node).copied()
    }

    /// Returns the finish time of a vertex.
    #[must_use]
    pub fn finish_time(&self, node: NodeId) -> Option<usize> {
        self.processed.get(&node).copied()
    }

    /// Returns the vertex that discovered `node`; `None` for traversal roots.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(&node).copied()
    }

    /// Returns `true` if the vertex has a discovery time.
    #[must_use]
    pub fn is_discovered(&self, node: NodeId) -> bool {
        self.discovered.contains_key(&node)
    }

    /// Returns `true` if the vertex has a finish time.
    #[must_use]
    pub fn is_processed(&self, node: NodeId) -> bool {
        self.processed.contains_key(&node)
    }

    /// All discovery times.
    #[must_use]
    pub fn discovered(&self) -> &BTreeMap<NodeId, usize> {
        &self.discovered
    }

    /// All finish times.
    #[must_use]
    pub fn processed(&self) -> &BTreeMap<NodeId, usize> {
        &self.processed
    }

    /// All tree parents, keyed by child.
    #[must_use]
    pub fn parents(&self) -> &BTreeMap<NodeId, NodeId> {
        &self.parents
    }

    /// The last timestamp handed out.
    #[must_use]
    pub fn clock(&self) -> usize {
        self.clock
    }

    /// Classifies the edge `parent -> child` against the current timestamps.
    ///
    /// | Child state | Result |
    /// |-------------|--------|
    /// | undiscovered | [`EdgeType::Tree`] |
    /// | discovered, unfinished | [`EdgeType::Back`] |
    /// | finished, discovered after `parent` | [`EdgeType::Forward`] |
    /// | finished, discovered before `parent` | [`EdgeType::Cross`] |
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] if the timestamps fit none of the rows: a
    /// finished but undiscovered child, an undiscovered parent of a finished child, or a
    /// finished child discovered at the same time as the parent.
    pub fn classify(&self, parent: NodeId, child: NodeId) -> Result<EdgeType> {
        let violation = Error::InvariantViolation { parent, child };

        match (self.discovery_time(child), self.is_processed(child)) {
            (None, false) => Ok(EdgeType::Tree),
            (None, true) => Err(violation),
            (Some(_), false) => Ok(EdgeType::Back),
            (Some(child_time), true) => {
                let Some(parent_time) = self.discovery_time(parent) else {
                    return Err(violation);
                };
                if child_time > parent_time {
                    Ok(EdgeType::Forward)
                } else if child_time < parent_time {
                    Ok(EdgeType::Cross)
                } else {
                    Err(violation)
                }
            }
        }
    }

    /// Checks that the state could have been produced by a traversal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvariantViolation`] naming the offending pair. A vertex that is
    /// finished but undiscovered, or finished no later than discovered, is reported as
    /// `v -> v`; a broken parent link as `parent -> child`.
    pub fn verify(&self) -> Result<()> {
        for (&node, &finish) in &self.processed {
            match self.discovery_time(node) {
                Some(discovery) if discovery < finish => {}
                _ => {
                    return Err(Error::InvariantViolation {
                        parent: node,
                        child: node,
                    })
                }
            }
        }

        for (&child, &parent) in &self.parents {
            match (self.discovery_time(parent), self.discovery_time(child)) {
                (Some(parent_time), Some(child_time)) if parent_time < child_time => {}
                _ => return Err(Error::InvariantViolation { parent, child }),
            }
        }
        Ok(())
    }

    fn discover(&mut self, node: NodeId) {
        self.clock += 1;
        self.discovered.insert(node, self.clock);
    }

    fn finish(&mut self, node: NodeId) {
        self.clock += 1;
        self.processed.insert(node, self.clock);
    }

    /// Forgets everything recorded for `nodes` and resets the clock.
    fn rewind(&mut self, nodes: &[NodeId], clock: usize) {
        for node in nodes {
            self.discovered.remove(node);
            self.processed.remove(node);
            self.parents.remove(node);
        }
        self.clock = clock;
    }
}

/// A vertex on the explicit DFS stack with its remaining children.
struct Frame {
    node: NodeId,
    children: Vec<NodeId>,
    next: usize,
}

/// Runs a depth-first search from `start` with the default configuration.
///
/// See [`dfs_with_config`].
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` is not a vertex of `graph`, and
/// [`Error::InvariantViolation`] if an edge cannot be classified.
pub fn dfs<G, V>(graph: &G, start: NodeId, state: &mut DfsState, visitor: &mut V) -> Result<Traversal>
where
    G: Successors,
    V: DfsVisitor + ?Sized,
{
    dfs_with_config(graph, start, state, visitor, DfsConfig::default())
}

/// Runs a depth-first search from `start`.
///
/// Children are examined in ascending [`NodeId`] order. For every vertex `v` the engine
///
/// 1. assigns the next timestamp as discovery time and calls `vertex_early(v)`,
/// 2. for each child `c`, classifies `(v, c)`, calls `edge(v, c, kind)` and, for a tree
///    edge, records `v` as the parent of `c` and descends into `c`,
/// 3. calls `vertex_late(v)` and assigns the next timestamp as finish time.
///
/// A `start` vertex that is already discovered in `state` is not traversed again; the
/// result then has `elapsed == 0`.
///
/// On error `state` is left as it was before the call. Hooks the visitor already
/// received are not taken back; a tree edge is only reported once the child is known
/// to fit within [`DfsConfig::max_depth`].
///
/// # Arguments
///
/// * `graph` - The graph to traverse; never modified
/// * `start` - The root of the traversal
/// * `state` - Caller-owned traversal state, possibly pre-seeded
/// * `visitor` - The hooks to call
/// * `config` - Depth limit and state checks
///
/// # Errors
///
/// - [`Error::NodeNotFound`] if `start` is not a vertex of `graph`
/// - [`Error::InvariantViolation`] if an edge cannot be classified, or
///   [`DfsConfig::verify_state`] is set and the supplied state is inconsistent
/// - [`Error::RecursionLimit`] if a tree path exceeds [`DfsConfig::max_depth`]
///
/// # Complexity
///
/// - Time: O((V + E) log V)
/// - Space: O(V + E) for the state and the explicit stack
pub fn dfs_with_config<G, V>(
    graph: &G,
    start: NodeId,
    state: &mut DfsState,
    visitor: &mut V,
    config: DfsConfig,
) -> Result<Traversal>
where
    G: Successors,
    V: DfsVisitor + ?Sized,
{
    if !graph.contains_node(start) {
        return Err(Error::NodeNotFound(start));
    }
    if config.verify_state {
        state.verify()?;
    }

    let begin = state.clock;
    let mut entered = Vec::new();
    let result = search(graph, start, state, visitor, config, &mut entered);
    if result.is_err() {
        state.rewind(&entered, begin);
    }
    result
}

/// The traversal loop behind [`dfs_with_config`]; every discovered vertex is appended
/// to `entered`.
fn search<G, V>(
    graph: &G,
    start: NodeId,
    state: &mut DfsState,
    visitor: &mut V,
    config: DfsConfig,
    entered: &mut Vec<NodeId>,
) -> Result<Traversal>
where
    G: Successors,
    V: DfsVisitor + ?Sized,
{
    if state.is_discovered(start) {
        return Ok(Traversal::default());
    }

    debug!("dfs from {start} at clock {}", state.clock);
    let begin = state.clock;
    let directed = graph.is_directed();
    let aborted = |state: &DfsState| -> Result<Traversal> {
        debug!("dfs from {start} aborted at clock {}", state.clock);
        Ok(Traversal {
            elapsed: state.clock - begin,
            aborted: true,
        })
    };

    let mut stack = Vec::new();
    if enter(graph, start, state, visitor, &mut stack, entered).is_abort() {
        return aborted(state);
    }

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        let next = frame.children.get(frame.next).copied();
        frame.next += 1;

        let Some(child) = next else {
            if visitor.vertex_late(state, node).is_abort() {
                return aborted(state);
            }
            state.finish(node);
            trace!("finish {node} at {}", state.clock);
            stack.pop();
            continue;
        };

        let kind = state.classify(node, child)?;
        if !directed && (state.parent(node) == Some(child) || state.is_processed(child)) {
            continue;
        }

        if kind == EdgeType::Tree {
            if let Some(limit) = config.max_depth {
                if !config.allows_depth(stack.len()) {
                    debug!("dfs from {start} exceeded depth {limit} at {node} -> {child}");
                    return Err(Error::RecursionLimit(limit));
                }
            }
        }

        trace!("edge {node} -> {child}: {kind}");
        if visitor.edge(state, node, child, kind).is_abort() {
            return aborted(state);
        }

        if kind == EdgeType::Tree {
            state.parents.insert(child, node);
            if enter(graph, child, state, visitor, &mut stack, entered).is_abort() {
                return aborted(state);
            }
        }
    }

    Ok(Traversal {
        elapsed: state.clock - begin,
        aborted: false,
    })
}

/// Discovers `node` and pushes it with its sorted children.
fn enter<G, V>(
    graph: &G,
    node: NodeId,
    state: &mut DfsState,
    visitor: &mut V,
    stack: &mut Vec<Frame>,
    entered: &mut Vec<NodeId>,
) -> Control
where
    G: Successors,
    V: DfsVisitor + ?Sized,
{
    state.discover(node);
    entered.push(node);
    if visitor.vertex_early(state, node).is_abort() {
        return Control::Abort;
    }

    let mut children: Vec<NodeId> = graph.successors(node).collect();
    children.sort_unstable();
    children.dedup();
    stack.push(Frame {
        node,
        children,
        next: 0,
    });
    Control::Continue
}

/// Runs [`dfs`] from every undiscovered vertex in ascending order, sharing `state`.
///
/// # Errors
///
/// Propagates the errors of [`dfs`].
pub fn dfs_forest<G, V>(graph: &G, state: &mut DfsState, visitor: &mut V) -> Result<Traversal>
where
    G: Successors,
    V: DfsVisitor + ?Sized,
{
    dfs_forest_with_config(graph, state, visitor, DfsConfig::default())
}

/// Runs [`dfs_with_config`] from every undiscovered vertex in ascending order.
///
/// The state is verified once up front when [`DfsConfig::verify_state`] is set. The
/// returned `elapsed` sums all trees; the forest stops at the first aborted tree. On
/// error `state` is left as it was before the call, including trees already finished.
///
/// # Errors
///
/// Propagates the errors of [`dfs_with_config`].
pub fn dfs_forest_with_config<G, V>(
    graph: &G,
    state: &mut DfsState,
    visitor: &mut V,
    config: DfsConfig,
) -> Result<Traversal>
where
    G: Successors,
    V: DfsVisitor + ?Sized,
{
    if config.verify_state {
        state.verify()?;
    }

    let begin = state.clock;
    let mut entered = Vec::new();
    let mut total = Traversal::default();
    for root in graph.node_ids() {
        if state.is_discovered(root) {
            continue;
        }

        let tree = match search(graph, root, state, visitor, config, &mut entered) {
            Ok(tree) => tree,
            Err(error) => {
                state.rewind(&entered, begin);
                return Err(error);
            }
        };
        total.elapsed += tree.elapsed;
        if tree.aborted {
            total.aborted = true;
            break;
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, UndirectedGraph};

    fn n(index: usize) -> NodeId {
        NodeId::new(index)
    }

    /// Records every hook call.
    #[derive(Default)]
    struct Recorder {
        early: Vec<NodeId>,
        edges: Vec<(NodeId, NodeId, EdgeType)>,
        late: Vec<NodeId>,
    }

    impl DfsVisitor for Recorder {
        fn vertex_early(&mut self, _: &DfsState, node: NodeId) -> Control {
            self.early.push(node);
            Control::Continue
        }

        fn edge(&mut self, _: &DfsState, parent: NodeId, child: NodeId, kind: EdgeType) -> Control {
            self.edges.push((parent, child, kind));
            Control::Continue
        }

        fn vertex_late(&mut self, _: &DfsState, node: NodeId) -> Control {
            self.late.push(node);
            Control::Continue
        }
    }

    #[test]
    fn test_dfs_timestamps_chain() {
        let graph = DirectedGraph::from_edges([(0, 1), (1, 2)]).unwrap();
        let mut state = DfsState::new();
        let result = dfs(&graph, n(0), &mut state, &mut ()).unwrap();

        assert_eq!(result, Traversal { elapsed: 6, aborted: false });
        assert_eq!(
            state.discovered().iter().map(|(&v, &t)| (v.index(), t)).collect::<Vec<_>>(),
            vec![(0, 1), (1, 2), (2, 3)]
        );
        assert_eq!(
            state.processed().iter().map(|(&v, &t)| (v.index(), t)).collect::<Vec<_>>(),
            vec![(0, 6), (1, 5), (2, 4)]
        );
        assert_eq!(state.parent(n(0)), None);
        assert_eq!(state.parent(n(2)), Some(n(1)));
    }

    #[test]
    fn test_dfs_directed_classification() {
        let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (0, 2), (2, 0), (3, 1)]).unwrap();
        let mut state = DfsState::new();
        let mut recorder = Recorder::default();
        let result = dfs_forest(&graph, &mut state, &mut recorder).unwrap();

        assert_eq!(result.elapsed, 8);
        assert_eq!(
            recorder.edges,
            vec![
                (n(0), n(1), EdgeType::Tree),
                (n(1), n(2), EdgeType::Tree),
                (n(2), n(0), EdgeType::Back),
                (n(0), n(2), EdgeType::Forward),
                (n(3), n(1), EdgeType::Cross),
            ]
        );
        assert_eq!(recorder.early, vec![n(0), n(1), n(2), n(3)]);
        assert_eq!(recorder.late, vec![n(2), n(1), n(0), n(3)]);
    }

    #[test]
    fn test_dfs_undirected_reports_each_edge_once() {
        let graph = UndirectedGraph::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
        let mut recorder = Recorder::default();
        dfs(&graph, n(0), &mut DfsState::new(), &mut recorder).unwrap();

        assert_eq!(
            recorder.edges,
            vec![
                (n(0), n(1), EdgeType::Tree),
                (n(1), n(2), EdgeType::Tree),
                (n(2), n(0), EdgeType::Back),
                (n(2), n(3), EdgeType::Tree),
            ]
        );
    }

    #[test]
    fn test_dfs_directed_self_loop_is_back_edge() {
        let graph = DirectedGraph::from_edges([(0, 0)]).unwrap();
        let mut recorder = Recorder::default();
        dfs(&graph, n(0), &mut DfsState::new(), &mut recorder).unwrap();

        assert_eq!(recorder.edges, vec![(n(0), n(0), EdgeType::Back)]);
    }

    #[test]
    fn test_dfs_single_vertex() {
        let mut graph = DirectedGraph::new();
        graph.add_node(n(4));

        let mut state = DfsState::new();
        let mut recorder = Recorder::default();
        let result = dfs(&graph, n(4), &mut state, &mut recorder).unwrap();

        assert_eq!(result.elapsed, 2);
        assert_eq!(state.discovered().len(), 1);
        assert!(recorder.edges.is_empty());
    }

    #[test]
    fn test_dfs_missing_start() {
        let graph = DirectedGraph::from_edges([(0, 1)]).unwrap();
        let result = dfs(&graph, n(9), &mut DfsState::new(), &mut ());
        assert_eq!(result, Err(Error::NodeNotFound(n(9))));
    }

    #[test]
    fn test_dfs_discovered_start_is_noop() {
        let graph = DirectedGraph::from_edges([(0, 1)]).unwrap();
        let mut state = DfsState::new();
        dfs(&graph, n(0), &mut state, &mut ()).unwrap();

        let before = state.clone();
        let result = dfs(&graph, n(1), &mut state, &mut ()).unwrap();
        assert_eq!(result.elapsed, 0);
        assert_eq!(state, before);
    }

    #[test]
    fn test_dfs_abort_in_vertex_early() {
        struct StopAt(NodeId);

        impl DfsVisitor for StopAt {
            fn vertex_early(&mut self, _: &DfsState, node: NodeId) -> Control {
                if node == self.0 {
                    Control::Abort
                } else {
                    Control::Continue
                }
            }

            fn vertex_late(&mut self, _: &DfsState, _: NodeId) -> Control {
                panic!("no vertex may finish after an abort");
            }
        }

        let graph = DirectedGraph::from_edges([(0, 1), (1, 2)]).unwrap();
        let mut state = DfsState::new();
        let result = dfs(&graph, n(0), &mut state, &mut StopAt(n(1))).unwrap();

        assert_eq!(result, Traversal { elapsed: 2, aborted: true });
        assert_eq!(state.discovered().len(), 2);
        assert!(state.processed().is_empty());
    }

    #[test]
    fn test_dfs_abort_in_edge_stops_forest() {
        struct StopOnBack;

        impl DfsVisitor for StopOnBack {
            fn edge(&mut self, _: &DfsState, _: NodeId, _: NodeId, kind: EdgeType) -> Control {
                if kind == EdgeType::Back {
                    Control::Abort
                } else {
                    Control::Continue
                }
            }
        }

        let graph = DirectedGraph::from_edges([(0, 1), (1, 0), (2, 3)]).unwrap();
        let mut state = DfsState::new();
        let result = dfs_forest(&graph, &mut state, &mut StopOnBack).unwrap();

        assert!(result.aborted);
        assert_eq!(result.elapsed, 2);
        assert!(!state.is_discovered(n(2)));
    }

    #[test]
    fn test_dfs_pre_seeded_state() {
        let graph = DirectedGraph::from_edges([(0, 5)]).unwrap();
        let mut state = DfsState::from_parts(
            BTreeMap::from([(n(5), 10)]),
            BTreeMap::from([(n(5), 11)]),
            BTreeMap::new(),
        );
        assert_eq!(state.clock(), 11);

        let mut recorder = Recorder::default();
        let result = dfs(&graph, n(0), &mut state, &mut recorder).unwrap();

        assert_eq!(result.elapsed, 2);
        assert_eq!(state.discovery_time(n(0)), Some(12));
        assert_eq!(state.finish_time(n(0)), Some(13));
        assert_eq!(recorder.edges, vec![(n(0), n(5), EdgeType::Cross)]);
    }

    #[test]
    fn test_dfs_forest_elapsed_counts_all_vertices() {
        let mut graph = DirectedGraph::from_edges([(3, 1), (7, 8)]).unwrap();
        graph.add_node(n(20));

        let mut state = DfsState::new();
        let result = dfs_forest(&graph, &mut state, &mut ()).unwrap();

        assert_eq!(result.elapsed, 2 * graph.node_count());
        assert_eq!(state.discovered().len(), state.processed().len());
        assert!(state
            .discovered()
            .iter()
            .all(|(node, &discovery)| state.finish_time(*node).unwrap() > discovery));
    }

    #[test]
    fn test_dfs_forest_is_deterministic() {
        let graph =
            DirectedGraph::from_edges([(4, 2), (2, 9), (9, 4), (0, 9), (0, 1), (1, 0)]).unwrap();

        let mut first = Recorder::default();
        let mut first_state = DfsState::new();
        dfs_forest(&graph, &mut first_state, &mut first).unwrap();

        let mut second = Recorder::default();
        let mut second_state = DfsState::new();
        dfs_forest(&graph, &mut second_state, &mut second).unwrap();

        assert_eq!(first.edges, second.edges);
        assert_eq!(first_state, second_state);
    }

    #[test]
    fn test_dfs_recursion_limit() {
        let graph = DirectedGraph::from_edges((1..6).map(|i| (i - 1, i))).unwrap();

        let result = dfs_with_config(
            &graph,
            n(0),
            &mut DfsState::new(),
            &mut (),
            DfsConfig::bounded(2),
        );
        assert_eq!(result, Err(Error::RecursionLimit(2)));

        let result = dfs_with_config(
            &graph,
            n(0),
            &mut DfsState::new(),
            &mut (),
            DfsConfig::bounded(5),
        )
        .unwrap();
        assert_eq!(result.elapsed, 12);
    }

    #[test]
    fn test_dfs_recursion_limit_leaves_state_untouched() {
        let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 3)]).unwrap();
        let mut state = DfsState::new();
        let mut recorder = Recorder::default();

        let result = dfs_with_config(&graph, n(0), &mut state, &mut recorder, DfsConfig::bounded(1));

        assert_eq!(result, Err(Error::RecursionLimit(1)));
        assert_eq!(state, DfsState::new());
        assert_eq!(recorder.early, vec![n(0), n(1)]);
        assert_eq!(recorder.edges, vec![(n(0), n(1), EdgeType::Tree)]);
        assert!(recorder.late.is_empty());
    }

    #[test]
    fn test_dfs_error_restores_seeded_state() {
        let graph = DirectedGraph::from_edges([(0, 1), (5, 6), (6, 7)]).unwrap();
        let mut state = DfsState::new();
        dfs(&graph, n(0), &mut state, &mut ()).unwrap();
        let seeded = state.clone();

        let result = dfs_with_config(&graph, n(5), &mut state, &mut (), DfsConfig::bounded(1));
        assert_eq!(result, Err(Error::RecursionLimit(1)));
        assert_eq!(state, seeded);

        let resumed = dfs(&graph, n(5), &mut state, &mut ()).unwrap();
        assert_eq!(resumed.elapsed, 6);
        assert_eq!(state.discovery_time(n(5)), Some(5));
    }

    #[test]
    fn test_dfs_forest_error_discards_finished_trees() {
        let graph = DirectedGraph::from_edges([(0, 1), (2, 3), (3, 4)]).unwrap();
        let mut state = DfsState::new();

        let result = dfs_forest_with_config(&graph, &mut state, &mut (), DfsConfig::bounded(1));

        assert_eq!(result, Err(Error::RecursionLimit(1)));
        assert_eq!(state, DfsState::new());
    }

    #[test]
    fn test_classify_invariant_violation() {
        let graph = DirectedGraph::from_edges([(0, 1)]).unwrap();
        let mut state =
            DfsState::from_parts(BTreeMap::new(), BTreeMap::from([(n(1), 3)]), BTreeMap::new());

        let result = dfs(&graph, n(0), &mut state.clone(), &mut ());
        assert_eq!(
            result,
            Err(Error::InvariantViolation {
                parent: n(0),
                child: n(1)
            })
        );

        let result = dfs_with_config(&graph, n(0), &mut state, &mut (), DfsConfig::strict());
        assert_eq!(
            result,
            Err(Error::InvariantViolation {
                parent: n(1),
                child: n(1)
            })
        );
    }

    #[test]
    fn test_classify_table() {
        let state = DfsState::from_parts(
            BTreeMap::from([(n(0), 1), (n(1), 2), (n(2), 3), (n(3), 6)]),
            BTreeMap::from([(n(2), 4), (n(3), 7)]),
            BTreeMap::new(),
        );

        assert_eq!(state.classify(n(1), n(9)), Ok(EdgeType::Tree));
        assert_eq!(state.classify(n(2), n(0)), Ok(EdgeType::Back));
        assert_eq!(state.classify(n(1), n(2)), Ok(EdgeType::Forward));
        assert_eq!(state.classify(n(3), n(2)), Ok(EdgeType::Cross));
        assert!(state.classify(n(2), n(2)).is_err());
        assert!(state.classify(n(8), n(2)).is_err());
    }

    #[test]
    fn test_verify_parent_links() {
        let state = DfsState::from_parts(
            BTreeMap::from([(n(0), 2), (n(1), 1)]),
            BTreeMap::new(),
            BTreeMap::from([(n(1), n(0))]),
        );
        assert_eq!(
            state.verify(),
            Err(Error::InvariantViolation {
                parent: n(0),
                child: n(1)
            })
        );

        let mut state = DfsState::new();
        let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (0, 2)]).unwrap();
        dfs_forest(&graph, &mut state, &mut ()).unwrap();
        assert_eq!(state.verify(), Ok(()));
    }
}
