// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # graphscope
//!
//! A depth-first traversal engine with pluggable instrumentation, and the classic
//! analyses built on top of it: strongly connected components (Kosaraju) and
//! articulation points (reachable-ancestor / low-link).
//!
//! ## Features
//!
//! - **One DFS, many analyses** - A single iterative engine drives every algorithm through
//!   the three hooks of [`graph::algorithms::DfsVisitor`]
//! - **Edge classification** - Tree, back, forward and cross edges computed from the live
//!   discovery/finish timestamps
//! - **Forest traversals** - Caller-owned [`graph::algorithms::DfsState`] can be pre-seeded
//!   so repeated runs extend one DFS forest
//! - **Cooperative early termination** - Any hook may abort the whole traversal
//! - **Sparse vertex ids** - All bookkeeping is key-based, never array-indexed
//! - **No native recursion** - Deep graphs do not exhaust the call stack
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use graphscope::prelude::*;
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge(NodeId::new(0), NodeId::new(1))?;
//! graph.add_edge(NodeId::new(1), NodeId::new(2))?;
//! graph.add_edge(NodeId::new(2), NodeId::new(0))?;
//!
//! let condensation = strongly_connected_components(&graph)?;
//! assert_eq!(condensation.len(), 1);
//! # Ok::<(), graphscope::Error>(())
//! ```
//!
//! ### Writing a Visitor
//!
//! ```rust
//! use graphscope::prelude::*;
//!
//! /// Counts back edges, i.e. cycles in a directed graph.
//! #[derive(Default)]
//! struct BackEdges(usize);
//!
//! impl DfsVisitor for BackEdges {
//!     fn edge(&mut self, _: &DfsState, _: NodeId, _: NodeId, kind: EdgeType) -> Control {
//!         if kind == EdgeType::Back {
//!             self.0 += 1;
//!         }
//!         Control::Continue
//!     }
//! }
//!
//! let graph = DirectedGraph::from_edges([(0, 1), (1, 2), (2, 0)])?;
//! let mut counter = BackEdges::default();
//! dfs_forest(&graph, &mut DfsState::new(), &mut counter)?;
//! assert_eq!(counter.0, 1);
//! # Ok::<(), graphscope::Error>(())
//! ```
//!
//! ### Articulation Points
//!
//! ```rust
//! use graphscope::prelude::*;
//!
//! // 0 - 1 - 2
//! let graph = UndirectedGraph::from_edges([(0, 1), (1, 2)])?;
//! let points = find_articulation_points(&graph)?;
//! assert_eq!(points.into_iter().collect::<Vec<_>>(), vec![NodeId::new(1)]);
//! # Ok::<(), graphscope::Error>(())
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: `debug!` at analysis boundaries and
//! `trace!` for every classified edge. No logger is installed by the library.

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use graphscope::prelude::*;
///
/// let graph = UndirectedGraph::from_edges([(0, 1)])?;
/// assert_eq!(count_connected_components(&graph)?, 1);
/// # Ok::<(), graphscope::Error>(())
/// ```
pub mod prelude;

/// Graph storage, traversal engine and graph analyses.
///
/// This module provides:
///
/// - **Graph Store**: [`graph::Graph`] with [`graph::Directed`] / [`graph::Undirected`] markers
/// - **Abstractions**: [`graph::GraphBase`], [`graph::Successors`], [`graph::Predecessors`]
/// - **DFS Engine**: [`graph::algorithms::dfs`] and [`graph::algorithms::dfs_forest`]
/// - **Analyses**: SCC decomposition, articulation points, DFS trees and connectivity
pub mod graph;

/// `graphscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use graphscope::{graph::DirectedGraph, Result};
///
/// fn chain(length: usize) -> Result<DirectedGraph> {
///     DirectedGraph::from_edges((1..length).map(|i| (i - 1, i)))
/// }
/// # assert_eq!(chain(4).unwrap().edge_count(), 3);
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `graphscope` Error type
///
/// The main error type for all operations in this crate. Provides detailed error information
/// for graph lookups, text parsing and traversal invariants.
///
/// # Examples
///
/// ```rust
/// use graphscope::{Error, graph::{UndirectedGraph, NodeId}};
///
/// let mut graph = UndirectedGraph::new();
/// match graph.add_edge(NodeId::new(3), NodeId::new(3)) {
///     Err(Error::SelfLoop(node)) => println!("rejected self-loop on {node}"),
///     Err(e) => println!("Error: {e}"),
///     Ok(_) => println!("added"),
/// }
/// ```
pub use error::Error;
