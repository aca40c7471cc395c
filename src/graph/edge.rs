//! Edge classification produced by depth-first search.
//!
//! This module provides [`EdgeType`], the four classes an edge can fall into while a DFS
//! is running, and [`EdgeStyle`], the rendering tag derived from it.
//!
//! The classification itself is computed by
//! [`DfsState::classify`](crate::graph::algorithms::DfsState::classify) from the live
//! discovery and finish timestamps.

use strum::Display;

/// Classification of an edge `(parent, child)` at the moment the DFS examines it.
///
/// | Class | Child state when examined | Graphs |
/// |-------|---------------------------|--------|
/// | [`Tree`](EdgeType::Tree) | undiscovered | all |
/// | [`Back`](EdgeType::Back) | discovered, not finished (an ancestor) | all |
/// | [`Forward`](EdgeType::Forward) | finished, discovered after the parent | directed |
/// | [`Cross`](EdgeType::Cross) | finished, discovered before the parent | directed |
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EdgeType {
    /// The edge used to discover the child
    Tree,
    /// Edge to an ancestor still under exploration
    Back,
    /// Edge to an already finished descendant
    Forward,
    /// Edge to a finished vertex in another subtree or an earlier tree
    Cross,
}

impl EdgeType {
    /// Returns `true` for tree edges.
    #[must_use]
    pub const fn is_tree(self) -> bool {
        matches!(self, EdgeType::Tree)
    }

    /// The rendering tag for this class: solid for tree edges, dotted otherwise.
    #[must_use]
    pub const fn style(self) -> EdgeStyle {
        match self {
            EdgeType::Tree => EdgeStyle::Solid,
            EdgeType::Back | EdgeType::Forward | EdgeType::Cross => EdgeStyle::Dotted,
        }
    }
}

/// Line style a renderer uses for an edge of a DFS tree.
///
/// The `Display` output (`"solid"`, `"dotted"`) matches the graphviz style names.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display)]
#[strum(serialize_all = "lowercase")]
pub enum EdgeStyle {
    /// Tree edges
    Solid,
    /// Every non-tree edge
    Dotted,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EdgeType; 4] = [
        EdgeType::Tree,
        EdgeType::Back,
        EdgeType::Forward,
        EdgeType::Cross,
    ];

    #[test]
    fn test_edge_type_display() {
        let names: Vec<String> = ALL.iter().map(|kind| kind.to_string()).collect();
        assert_eq!(names, vec!["tree", "back", "forward", "cross"]);
    }

    #[test]
    fn test_edge_style() {
        assert_eq!(EdgeType::Tree.style(), EdgeStyle::Solid);
        for kind in ALL.into_iter().filter(|kind| !kind.is_tree()) {
            assert_eq!(kind.style(), EdgeStyle::Dotted);
        }
        assert_eq!(EdgeStyle::Solid.to_string(), "solid");
        assert_eq!(EdgeStyle::Dotted.to_string(), "dotted");
    }
}
