//! Traversal configuration for the DFS engine
//!
//! This module provides the knobs that bound a traversal and control how much of a
//! caller-supplied [`DfsState`](super::DfsState) is checked before the engine trusts it.

/// Configuration for a depth-first traversal
///
/// The engine never recurses natively, so the depth limit is not needed to protect the
/// call stack. It exists for callers that want to refuse pathological inputs, such as a
/// graph that degenerates into a single long chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DfsConfig {
    /// Deepest tree path allowed, counted in tree edges from the start vertex
    ///
    /// `Some(0)` only visits the start vertex. Discovering a vertex deeper than the limit
    /// fails with [`Error::RecursionLimit`](crate::Error::RecursionLimit). `None` is unbounded.
    pub max_depth: Option<usize>,

    /// Check a pre-seeded traversal state before starting
    ///
    /// Every finished vertex must be discovered and finish after its discovery, and every
    /// recorded parent must be discovered before its child. A failing check is reported as
    /// [`Error::InvariantViolation`](crate::Error::InvariantViolation).
    pub verify_state: bool,
}

impl DfsConfig {
    /// Creates a configuration without depth limit or state checks
    ///
    /// Same as [`DfsConfig::default`].
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Creates a configuration that limits the tree depth
    #[must_use]
    pub fn bounded(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            verify_state: false,
        }
    }

    /// Creates a configuration that validates the traversal state before starting
    #[must_use]
    pub fn strict() -> Self {
        Self {
            max_depth: None,
            verify_state: true,
        }
    }

    /// Returns `true` if a vertex at `depth` tree edges from the start may be discovered.
    pub(crate) fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |limit| depth <= limit)
    }
}
