//! # graphscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the graphscope library. Import this module to get quick access to the graph
//! store, the DFS engine and the analyses built on it.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphscope operations
pub use crate::Error;

/// The result type used throughout graphscope
pub use crate::Result;

// ================================================================================================
// Graph Store
// ================================================================================================

/// Graph storage and vertex identifiers
pub use crate::graph::{
    Directed, DirectedGraph, EdgeKind, Graph, NodeId, Reversed, Undirected, UndirectedGraph,
};

/// Graph abstraction traits used by every algorithm
pub use crate::graph::{GraphBase, Predecessors, Successors};

/// Tagged DFS tree output for rendering collaborators
pub use crate::graph::{EdgeStyle, TaggedGraph};

// ================================================================================================
// DFS Engine
// ================================================================================================

/// Depth-first traversal engine and its instrumentation
pub use crate::graph::algorithms::{
    dfs, dfs_forest, dfs_forest_with_config, dfs_with_config, Control, DfsConfig, DfsState,
    DfsVisitor, EdgeType, Traversal,
};

// ================================================================================================
// Analyses
// ================================================================================================

/// Strongly connected components
pub use crate::graph::algorithms::{
    strongly_connected_components, strongly_connected_components_by_reachability, Condensation,
};

/// Articulation points
pub use crate::graph::algorithms::find_articulation_points;

/// DFS trees and orders
pub use crate::graph::algorithms::{
    finish_order, make_dfs_forest, make_dfs_tree, postorder, reachable_count,
};

/// Connectivity of undirected graphs
pub use crate::graph::algorithms::{connected_components, count_connected_components};
