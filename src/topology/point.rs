//! `NodeId`: a strong, zero-cost handle for skeleton nodes
//!
//! Skeletons exported from tracing tools identify every node (treenode) by a
//! positive integer. `NodeId` wraps a nonzero `u64` so that 0 stays free as an
//! invalid or sentinel value, and so `Option<NodeId>` costs nothing extra.
//!
//! Algorithms in this crate are generic over any [`NodeLike`](super::bounds::NodeLike)
//! identifier; `NodeId` is the recommended default.

use crate::skeleton_error::SkeletonError;
use std::{fmt, num::NonZeroU64};

/// Opaque, hashable node identifier.
///
/// # Memory layout
/// This type is `repr(transparent)` over `NonZeroU64`, so it has the size
/// and alignment of a `u64`.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct NodeId(NonZeroU64);

impl NodeId {
    /// Creates a new `NodeId` from a raw `u64` value.
    ///
    /// # Errors
    ///
    /// Returns [`SkeletonError::InvalidNodeId`] if `raw == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use skeleton_sieve::topology::point::NodeId;
    /// let p = NodeId::new(1)?;
    /// assert_eq!(p.get(), 1);
    /// # Ok::<(), skeleton_sieve::skeleton_error::SkeletonError>(())
    /// ```
    #[inline]
    pub fn new(raw: u64) -> Result<Self, SkeletonError> {
        NonZeroU64::new(raw)
            .map(NodeId)
            .ok_or(SkeletonError::InvalidNodeId)
    }

    /// Returns the inner `u64` value of this `NodeId`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for NodeId {
    type Error = SkeletonError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        NodeId::new(raw)
    }
}

impl From<NodeId> for u64 {
    fn from(id: NodeId) -> u64 {
        id.get()
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

/// Displays as `NodeId(raw_value)`.
impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.get()).finish()
    }
}

/// Prints only the raw integer.
impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
