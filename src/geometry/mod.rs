//! Geometry utilities for skeleton-sieve.
//!
//! Positions are plain `[f64; 3]` triples (`x`, `y`, `z`). The helpers here
//! are explicit loops over those triples; there is no array library underneath.

pub mod metrics;
pub mod vector;

/// A position in 3D space, ordered `[x, y, z]`.
pub type Point3 = [f64; 3];

/// Cartesian axis selector, used to pin axes during smoothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index of this axis within a [`Point3`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

pub use metrics::{distance, l1_distance, midpoint};
