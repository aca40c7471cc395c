//! Core graph store.
//!
//! This module provides [`Graph`], the adjacency store every analysis runs on. A single
//! type covers both orientations through the [`Directed`] and [`Undirected`] marker types:
//!
//! - **Directed** graphs keep a forward map (vertex → children) and a reverse map
//!   (vertex → parents). The reverse map is derived data and is updated on every mutation.
//! - **Undirected** graphs keep one symmetric map (vertex → neighbors); every edge is
//!   stored in both directions.
//!
//! Vertices are caller-assigned [`NodeId`]s. Adjacency is kept in ordered sets, so
//! neighbors are always reported in ascending id order.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    marker::PhantomData,
};

use crate::{
    graph::{
        node::NodeId,
        reversed::Reversed,
        traits::{GraphBase, Predecessors, Successors},
    },
    Error, Result,
};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Directed {}
    impl Sealed for super::Undirected {}
}

/// Orientation of a [`Graph`].
///
/// Implemented only by [`Directed`] and [`Undirected`].
pub trait EdgeKind: sealed::Sealed + Clone + Copy + fmt::Debug + Default {
    /// `true` if edges are one-way.
    const DIRECTED: bool;
}

/// Marker type for directed graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker type for undirected graphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl EdgeKind for Directed {
    const DIRECTED: bool = true;
}

impl EdgeKind for Undirected {
    const DIRECTED: bool = false;
}

/// A graph of caller-assigned vertices with ordered adjacency sets.
///
/// Edges are unique: adding an existing edge is a no-op. Directed graphs accept
/// self-loops; undirected graphs reject them with [`Error::SelfLoop`].
///
/// # Invariants
///
/// - Directed: `j` is a child of `i` if and only if `i` is a parent of `j`
/// - Undirected: `j` is a neighbor of `i` if and only if `i` is a neighbor of `j`
/// - Every endpoint of an edge is a vertex of the graph; isolated vertices are allowed
///
/// # Thread Safety
///
/// `Graph` is [`Send`] and [`Sync`]. It does not support concurrent modification; build
/// it single-threaded, then traverse it through shared references.
///
/// # Examples
///
/// ## Directed
///
/// ```rust
/// use graphscope::graph::{DirectedGraph, NodeId};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(NodeId::new(0), NodeId::new(1))?;
/// graph.add_edge(NodeId::new(2), NodeId::new(1))?;
///
/// let parents: Vec<_> = graph.reverse_neighbors(NodeId::new(1))?.iter().copied().collect();
/// assert_eq!(parents, vec![NodeId::new(0), NodeId::new(2)]);
/// # Ok::<(), graphscope::Error>(())
/// ```
///
/// ## Undirected
///
/// ```rust
/// use graphscope::graph::{UndirectedGraph, NodeId};
///
/// let mut graph = UndirectedGraph::new();
/// graph.add_edge(NodeId::new(0), NodeId::new(1))?;
///
/// assert!(graph.contains_edge(NodeId::new(1), NodeId::new(0)));
/// assert_eq!(graph.edge_count(), 1);
/// # Ok::<(), graphscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<Ty: EdgeKind = Directed> {
    /// Children (directed) or neighbors (undirected) per vertex
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    /// Parents per vertex, directed graphs only
    reverse: BTreeMap<NodeId, BTreeSet<NodeId>>,
    kind: PhantomData<Ty>,
}

/// A directed [`Graph`].
pub type DirectedGraph = Graph<Directed>;

/// An undirected [`Graph`].
pub type UndirectedGraph = Graph<Undirected>;

impl<Ty: EdgeKind> Default for Graph<Ty> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ty: EdgeKind> PartialEq for Graph<Ty> {
    /// Structural equality of the adjacency maps.
    ///
    /// The reverse map is derived from the forward map, so it does not take part.
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<Ty: EdgeKind> Eq for Graph<Ty> {}

impl<Ty: EdgeKind> Graph<Ty> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Graph {
            adjacency: BTreeMap::new(),
            reverse: BTreeMap::new(),
            kind: PhantomData,
        }
    }

    /// Builds a graph from a list of `(from, to)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelfLoop`] if an undirected graph receives a `(v, v)` pair.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphscope::graph::DirectedGraph;
    ///
    /// let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (0, 1)])?;
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// # Ok::<(), graphscope::Error>(())
    /// ```
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.add_edge(NodeId::new(from), NodeId::new(to))?;
        }
        Ok(graph)
    }

    /// Returns `true` for directed graphs.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        Ty::DIRECTED
    }

    /// Adds an isolated vertex.
    ///
    /// # Returns
    ///
    /// `true` if the vertex is new, `false` if it already existed (its edges are kept).
    pub fn add_node(&mut self, node: NodeId) -> bool {
        let inserted = !self.adjacency.contains_key(&node);
        self.adjacency.entry(node).or_default();
        if Ty::DIRECTED {
            self.reverse.entry(node).or_default();
        }
        inserted
    }

    /// Adds an edge, creating missing endpoints.
    ///
    /// Directed graphs store `from → to` and record `from` as a parent of `to`.
    /// Undirected graphs store the edge in both directions.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the edge is new, `Ok(false)` if it already existed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelfLoop`] for `from == to` on an undirected graph.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<bool> {
        if !Ty::DIRECTED && from == to {
            return Err(Error::SelfLoop(from));
        }

        self.add_node(from);
        self.add_node(to);

        let inserted = self.adjacency.entry(from).or_default().insert(to);
        self.mirror_mut().entry(to).or_default().insert(from);
        Ok(inserted)
    }

    /// Removes an edge.
    ///
    /// For undirected graphs `(from, to)` and `(to, from)` denote the same edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] if the edge does not exist.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        if !self.contains_edge(from, to) {
            return Err(Error::EdgeNotFound(from, to));
        }

        if let Some(children) = self.adjacency.get_mut(&from) {
            children.remove(&to);
        }
        if let Some(parents) = self.mirror_mut().get_mut(&to) {
            parents.remove(&from);
        }
        Ok(())
    }

    /// Removes a vertex together with every incident edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the vertex does not exist.
    pub fn remove_node(&mut self, node: NodeId) -> Result<()> {
        let Some(children) = self.adjacency.remove(&node) else {
            return Err(Error::NodeNotFound(node));
        };

        for child in &children {
            if let Some(parents) = self.mirror_mut().get_mut(child) {
                parents.remove(&node);
            }
        }

        if Ty::DIRECTED {
            if let Some(parents) = self.reverse.remove(&node) {
                for parent in &parents {
                    if let Some(siblings) = self.adjacency.get_mut(parent) {
                        siblings.remove(&node);
                    }
                }
            }
        }
        Ok(())
    }

    /// Removes every vertex without incoming and outgoing edges.
    ///
    /// In a directed graph a sink that still has a parent is kept; only vertices with
    /// neither successors nor predecessors are removed.
    ///
    /// # Returns
    ///
    /// The removed vertices, in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphscope::graph::{DirectedGraph, NodeId};
    ///
    /// let mut graph = DirectedGraph::from_edges([(0, 1)])?;
    /// graph.add_node(NodeId::new(7));
    ///
    /// assert_eq!(graph.remove_isolated_nodes(), vec![NodeId::new(7)]);
    /// assert_eq!(graph.node_count(), 2);
    /// # Ok::<(), graphscope::Error>(())
    /// ```
    pub fn remove_isolated_nodes(&mut self) -> Vec<NodeId> {
        let isolated: Vec<NodeId> = self
            .nodes()
            .filter(|&node| self.out_degree(node) == 0 && self.in_degree(node) == 0)
            .collect();

        for node in &isolated {
            self.adjacency.remove(node);
            self.reverse.remove(node);
        }
        isolated
    }

    /// Returns the children (directed) or neighbors (undirected) of a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the vertex does not exist.
    pub fn neighbors(&self, node: NodeId) -> Result<&BTreeSet<NodeId>> {
        self.adjacency.get(&node).ok_or(Error::NodeNotFound(node))
    }

    /// Returns the parents (directed) or neighbors (undirected) of a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the vertex does not exist.
    pub fn reverse_neighbors(&self, node: NodeId) -> Result<&BTreeSet<NodeId>> {
        self.mirror().get(&node).ok_or(Error::NodeNotFound(node))
    }

    /// Returns an iterator over all vertices, in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Returns an iterator over all edges, ordered by source then target.
    ///
    /// Undirected edges are reported once, as `(low, high)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&from, children)| children.iter().map(move |&to| (from, to)))
            .filter(|&(from, to)| Ty::DIRECTED || from <= to)
    }

    /// Returns `true` if the vertex exists.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Returns `true` if the edge exists.
    #[must_use]
    pub fn contains_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.adjacency
            .get(&from)
            .is_some_and(|children| children.contains(&to))
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges; an undirected edge counts once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let stored: usize = self.adjacency.values().map(BTreeSet::len).sum();
        if Ty::DIRECTED {
            stored
        } else {
            stored / 2
        }
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of outgoing edges (directed) or incident edges (undirected); 0 for unknown vertices.
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.adjacency.get(&node).map_or(0, BTreeSet::len)
    }

    /// Number of incoming edges (directed) or incident edges (undirected); 0 for unknown vertices.
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.mirror().get(&node).map_or(0, BTreeSet::len)
    }

    /// Returns an owned copy with every edge inverted.
    ///
    /// Undirected graphs are their own reverse.
    #[must_use]
    pub fn reversed(&self) -> Self {
        if Ty::DIRECTED {
            Graph {
                adjacency: self.reverse.clone(),
                reverse: self.adjacency.clone(),
                kind: PhantomData,
            }
        } else {
            self.clone()
        }
    }

    /// Returns a zero-copy view of this graph with every edge inverted.
    #[must_use]
    pub fn reverse_view(&self) -> Reversed<'_, Self> {
        Reversed::new(self)
    }

    /// Checks that the derived adjacency agrees with the primary adjacency.
    ///
    /// Directed graphs must have `j ∈ children(i) ⇔ i ∈ parents(j)` and the same vertex
    /// set in both maps; undirected graphs must be symmetric and free of self-loops.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if Ty::DIRECTED {
            self.adjacency.keys().eq(self.reverse.keys())
                && self.adjacency.iter().all(|(from, children)| {
                    children
                        .iter()
                        .all(|to| self.reverse.get(to).is_some_and(|p| p.contains(from)))
                })
                && self.reverse.iter().all(|(to, parents)| {
                    parents
                        .iter()
                        .all(|from| self.adjacency.get(from).is_some_and(|c| c.contains(to)))
                })
        } else {
            self.reverse.is_empty()
                && self.adjacency.iter().all(|(from, neighbors)| {
                    neighbors.iter().all(|to| {
                        to != from && self.adjacency.get(to).is_some_and(|n| n.contains(from))
                    })
                })
        }
    }

    /// The map holding the other end of each edge.
    fn mirror(&self) -> &BTreeMap<NodeId, BTreeSet<NodeId>> {
        if Ty::DIRECTED {
            &self.reverse
        } else {
            &self.adjacency
        }
    }

    fn mirror_mut(&mut self) -> &mut BTreeMap<NodeId, BTreeSet<NodeId>> {
        if Ty::DIRECTED {
            &mut self.reverse
        } else {
            &mut self.adjacency
        }
    }
}

impl<Ty: EdgeKind> GraphBase for Graph<Ty> {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.adjacency.keys().copied()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    fn is_directed(&self) -> bool {
        Ty::DIRECTED
    }
}

impl<Ty: EdgeKind> Successors for Graph<Ty> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.adjacency.get(&node).into_iter().flatten().copied()
    }
}

impl<Ty: EdgeKind> Predecessors for Graph<Ty> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.mirror().get(&node).into_iter().flatten().copied()
    }
}
