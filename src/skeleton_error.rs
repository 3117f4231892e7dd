//! SkeletonError: Unified error type for skeleton-sieve public APIs
//!
//! Every fallible operation in the crate returns this error. Degenerate but
//! well-formed inputs (a single-node skeleton, a massless center of mass) are
//! not errors; they produce documented sentinel values instead.

use thiserror::Error;

/// Unified error type for skeleton operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkeletonError {
    /// Attempted to construct a NodeId with a zero value (invalid).
    #[error("NodeId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidNodeId,
    /// The two nodes are not connected in the skeleton graph.
    #[error("No path between node `{from}` and node `{to}`")]
    NoPath {
        /// Start node (debug-formatted).
        from: String,
        /// End node (debug-formatted).
        to: String,
    },
    /// A node was referenced that is not part of the skeleton.
    #[error("Topology error: node `{0}` is not part of the skeleton")]
    MissingNode(String),
    /// A node is part of the topology but has no position.
    #[error("Geometry error: node `{0}` has no coordinates")]
    MissingCoordinates(String),
    /// The skeleton contains a cycle; expected a tree.
    #[error("Topology error: cycle detected in skeleton (expected a tree)")]
    CycleDetected,
    /// A node has more than one parent; expected a tree.
    #[error("Topology error: node `{0}` has more than one parent")]
    MultipleParents(String),
    /// The skeleton has no root (empty, or every node has a parent).
    #[error("Topology error: skeleton has no root node")]
    EmptySkeleton,
    /// The skeleton has more than one parentless node.
    #[error("Topology error: skeleton has {0} root nodes (expected 1)")]
    MultipleRoots(usize),
    /// A numeric parameter is outside its valid range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl SkeletonError {
    pub(crate) fn missing_node<P: std::fmt::Debug>(p: P) -> Self {
        SkeletonError::MissingNode(format!("{p:?}"))
    }

    pub(crate) fn no_path<P: std::fmt::Debug>(from: P, to: P) -> Self {
        SkeletonError::NoPath {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}
