//! Depth-first search and the graph analyses built on it.
//!
//! Every algorithm in this module is a [`DfsVisitor`] driven by the one traversal engine
//! behind [`dfs()`]. They differ only in what their hooks record.
//!
//! # Available Algorithms
//!
//! ## Traversal Engine
//!
//! - [`dfs()`] / [`dfs_with_config`] - Depth-first search from one start vertex
//! - [`dfs_forest`] / [`dfs_forest_with_config`] - Depth-first search over every vertex
//! - [`DfsState`] - Timestamps, tree parents and edge classification
//! - [`DfsConfig`] - Depth limit and state verification
//!
//! ## Orders and Trees
//!
//! - [`postorder`] - Post-order of the vertices reachable from a start
//! - [`finish_order`] - Post-order of a whole forest
//! - [`reachable_count`] - Number of vertices reachable from a start
//! - [`make_dfs_tree`] / [`make_dfs_forest`] - DFS trees with every edge tagged
//!
//! ## Strongly Connected Components
//!
//! - [`strongly_connected_components`] - Kosaraju's algorithm
//! - [`strongly_connected_components_by_reachability`] - Reachable-set intersection
//! - [`Condensation`] - Components and the graph collapsed over them
//!
//! ## Undirected Connectivity
//!
//! - [`find_articulation_points`] - Cut vertices
//! - [`connected_components`] / [`count_connected_components`] - Connected components
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS | O((V + E) log V) | Custom analyses through a visitor |
//! | Kosaraju SCC | O((V + E) log V) | Cycle groups, condensation |
//! | Reachability SCC | O(V · (V + E) log V) | Cross-checking small graphs |
//! | Articulation points | O((V + E) log V) | Single points of failure |
//!
//! The logarithmic factor comes from the ordered maps that make every result
//! deterministic for sparse vertex ids.
//!
//! # Examples
//!
//! ## Cycle Detection
//!
//! ```rust
//! use graphscope::graph::{algorithms, DirectedGraph, EdgeType};
//!
//! let dag = DirectedGraph::from_edges([(0, 1), (0, 2), (1, 2)])?;
//! let tree = algorithms::make_dfs_forest(&dag)?;
//! assert!(tree.edges().all(|(_, kind)| kind != EdgeType::Back));
//!
//! let cyclic = DirectedGraph::from_edges([(0, 1), (1, 0)])?;
//! let tree = algorithms::make_dfs_forest(&cyclic)?;
//! assert!(tree.edges().any(|(_, kind)| kind == EdgeType::Back));
//! # Ok::<(), graphscope::Error>(())
//! ```

mod articulation;
mod config;
mod connectivity;
mod dfs;
mod scc;
mod traversal;

pub use crate::graph::edge::EdgeType;
pub use articulation::find_articulation_points;
pub use config::DfsConfig;
pub use connectivity::{connected_components, count_connected_components};
pub use dfs::{
    dfs, dfs_forest, dfs_forest_with_config, dfs_with_config, Control, DfsState, DfsVisitor,
    Traversal,
};
pub use scc::{
    strongly_connected_components, strongly_connected_components_by_reachability, Condensation,
};
pub use traversal::{finish_order, make_dfs_forest, make_dfs_tree, postorder, reachable_count};
