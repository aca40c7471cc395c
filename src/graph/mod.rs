//! Graph store and depth-first analyses.
//!
//! This module provides the adjacency store that every analysis in this crate runs on,
//! together with the DFS engine and the analyses built on top of it.
//!
//! # Architecture
//!
//! - **Core Types**: [`NodeId`] and [`Graph`] (with the [`DirectedGraph`] and
//!   [`UndirectedGraph`] aliases) provide the fundamental building blocks
//! - **Views**: [`Reversed`] inverts every edge of a borrowed graph without copying it
//! - **Traits**: [`GraphBase`], [`Successors`] and [`Predecessors`] let the engine and the
//!   analyses work with every graph type
//! - **Algorithms**: the visitor-driven DFS engine, strongly connected components,
//!   articulation points and DFS-tree construction, see [`algorithms`]
//!
//! # Design Principles
//!
//! ## Caller-Assigned Identifiers
//!
//! Vertices are identified by the non-negative integers the caller chooses. Ids may be
//! sparse; the store never renumbers them.
//!
//! ## Deterministic Order
//!
//! Adjacency is kept in ordered sets. Every iteration the store exposes, and therefore
//! every traversal, visits vertices in ascending id order, so repeated runs over the same
//! graph produce identical timestamps, classifications and results.
//!
//! ## Build, Then Analyze
//!
//! Graphs are built and mutated single-threaded, then traversed through shared
//! references. Traversal state lives outside the graph, see
//! [`DfsState`](algorithms::DfsState).
//!
//! # Usage Examples
//!
//! ## Building and Printing a Graph
//!
//! ```rust
//! use graphscope::graph::{DirectedGraph, NodeId};
//!
//! let mut graph = DirectedGraph::from_edges([(0, 1), (1, 2)])?;
//! graph.add_node(NodeId::new(5));
//!
//! assert_eq!(graph.to_string(), "4\n0\n1\n2\n5\n2\n0 1\n1 2\n");
//! # Ok::<(), graphscope::Error>(())
//! ```
//!
//! ## Condensing a Graph
//!
//! ```rust
//! use graphscope::graph::{algorithms, DirectedGraph, NodeId};
//!
//! let graph = DirectedGraph::from_edges([(0, 1), (1, 0), (1, 2)])?;
//! let condensation = algorithms::strongly_connected_components(&graph)?;
//!
//! assert!(condensation.same_component(NodeId::new(0), NodeId::new(1)));
//! assert_eq!(condensation.len(), 2);
//! # Ok::<(), graphscope::Error>(())
//! ```

mod edge;
mod node;
mod reversed;
mod store;
mod tagged;
mod text;
mod traits;

pub mod algorithms;

pub use edge::{EdgeStyle, EdgeType};
pub use node::NodeId;
pub use reversed::Reversed;
pub use store::{Directed, DirectedGraph, EdgeKind, Graph, Undirected, UndirectedGraph};
pub use tagged::TaggedGraph;
pub use traits::{GraphBase, Predecessors, Successors};
