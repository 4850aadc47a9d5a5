//! Error types for graph mutation and query operations.
//!
//! Degenerate inputs (empty graphs, disconnected graphs, complete graphs)
//! are handled by defined fallback values elsewhere and never surface here;
//! these errors cover structurally invalid operations only.

use thiserror::Error;

/// An error produced by [`crate::Graph`] operations.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// An edge insertion named the same node at both endpoints.
    #[error("self-loop on node {node} is not permitted in a simple graph")]
    SelfLoop {
        /// Node that appeared at both endpoints.
        node: usize,
    },
    /// A query referenced a node that is not present in the graph.
    #[error("node {node} is not present in the graph")]
    UnknownNode {
        /// Label of the missing node.
        node: usize,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::SelfLoop { .. } => GraphErrorCode::SelfLoop,
            Self::UnknownNode { .. } => GraphErrorCode::UnknownNode,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// An edge insertion named the same node at both endpoints.
    SelfLoop,
    /// A query referenced a node that is not present in the graph.
    UnknownNode,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelfLoop => "SELF_LOOP",
            Self::UnknownNode => "UNKNOWN_NODE",
        }
    }
}

/// Convenient alias for results returned by graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;
