use thiserror::Error;

use crate::graph::NodeId;

macro_rules! malformed_error {
    // Single string version
    ($line:expr, $msg:expr) => {
        crate::Error::Malformed {
            line: $line,
            message: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($line:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            line: $line,
            message: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Early termination of a traversal requested by a visitor is a normal outcome and is
/// reported through [`Traversal::aborted`](crate::graph::algorithms::Traversal::aborted),
/// never through this type.
///
/// # Error Categories
///
/// ## Lookup Errors
/// - [`Error::NodeNotFound`] - The referenced vertex is not part of the graph
/// - [`Error::EdgeNotFound`] - The referenced edge is not part of the graph
///
/// ## Construction Errors
/// - [`Error::SelfLoop`] - Undirected graphs do not accept self-loops
/// - [`Error::Malformed`] - The textual adjacency list could not be parsed
///
/// ## Traversal Errors
/// - [`Error::InvariantViolation`] - An edge matched none of the four edge classes
/// - [`Error::RecursionLimit`] - The configured traversal depth was exceeded
///
/// # Examples
///
/// ```rust
/// use graphscope::{Error, graph::{DirectedGraph, NodeId}};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_node(NodeId::new(0));
///
/// match graph.remove_edge(NodeId::new(0), NodeId::new(1)) {
///     Err(Error::EdgeNotFound(from, to)) => {
///         eprintln!("no edge {from} -> {to}");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
///     Ok(()) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The referenced vertex does not exist in the graph.
    ///
    /// Raised when removing a vertex that was never added, querying the
    /// neighbors of an unknown vertex or starting a traversal from one.
    #[error("Node {0} does not exist")]
    NodeNotFound(NodeId),

    /// The referenced edge does not exist in the graph.
    #[error("Edge {0} -> {1} does not exist")]
    EdgeNotFound(NodeId, NodeId),

    /// An undirected graph was asked to store an edge from a vertex to itself.
    #[error("Self-loop on {0} is not allowed in an undirected graph")]
    SelfLoop(NodeId),

    /// An edge could not be classified as tree, back, forward or cross.
    ///
    /// This only happens when the traversal state is inconsistent, for example
    /// a caller-supplied state that marks a vertex finished without ever
    /// discovering it. It is a defect, not a recoverable condition.
    #[error("Edge {parent} -> {child} matches no edge classification")]
    InvariantViolation {
        /// The vertex being explored
        parent: NodeId,
        /// The adjacent vertex under inspection
        child: NodeId,
    },

    /// The textual adjacency list is damaged and could not be parsed.
    ///
    /// # Fields
    ///
    /// * `line` - 1-based input line on which parsing failed
    /// * `message` - Detailed description of what was malformed
    #[error("Malformed - line {line}: {message}")]
    Malformed {
        /// The 1-based input line where the problem was detected
        line: usize,
        /// The message to be printed for the Malformed error
        message: String,
    },

    /// Recursion limit reached.
    ///
    /// The traversal reached the maximum tree depth configured through
    /// [`DfsConfig::max_depth`](crate::graph::algorithms::DfsConfig::max_depth).
    #[error("Reach the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),
}

impl Error {
    /// Returns `true` for the lookup failures ([`Error::NodeNotFound`], [`Error::EdgeNotFound`]).
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NodeNotFound(_) | Error::EdgeNotFound(_, _))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_grouping() {
        assert!(Error::NodeNotFound(NodeId::new(1)).is_not_found());
        assert!(Error::EdgeNotFound(NodeId::new(1), NodeId::new(2)).is_not_found());
        assert!(!Error::SelfLoop(NodeId::new(1)).is_not_found());
        assert!(!Error::RecursionLimit(4).is_not_found());
    }

    #[test]
    fn test_malformed_macro() {
        let err = malformed_error!(3, "expected {} fields", 2);
        assert_eq!(
            err,
            Error::Malformed {
                line: 3,
                message: "expected 2 fields".to_string()
            }
        );
        assert_eq!(err.to_string(), "Malformed - line 3: expected 2 fields");
    }

    #[test]
    fn test_display() {
        let err = Error::EdgeNotFound(NodeId::new(4), NodeId::new(7));
        assert_eq!(err.to_string(), "Edge 4 -> 7 does not exist");

        let err = Error::InvariantViolation {
            parent: NodeId::new(1),
            child: NodeId::new(2),
        };
        assert_eq!(
            err.to_string(),
            "Edge 1 -> 2 matches no edge classification"
        );
    }
}
