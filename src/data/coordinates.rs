//! Geometry/coordinates storage for skeleton nodes.
//!
//! Coordinates map each node identifier to a single [`Point3`]. The map is
//! the only place positions live; topology is kept separately in the arbor.

use crate::geometry::Point3;
use crate::skeleton_error::SkeletonError;
use crate::topology::bounds::NodeLike;
use std::collections::HashMap;

/// Node → position map.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinates<P: NodeLike> {
    positions: HashMap<P, Point3>,
}

impl<P: NodeLike> Default for Coordinates<P> {
    fn default() -> Self {
        Self {
            positions: HashMap::new(),
        }
    }
}

impl<P: NodeLike> Coordinates<P> {
    /// Creates an empty coordinate map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the position of `p`, returning the previous one.
    #[inline]
    pub fn insert(&mut self, p: P, position: Point3) -> Option<Point3> {
        self.positions.insert(p, position)
    }

    #[inline]
    pub fn contains(&self, p: P) -> bool {
        self.positions.contains_key(&p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of `p`, if stored.
    #[inline]
    pub fn get(&self, p: P) -> Option<Point3> {
        self.positions.get(&p).copied()
    }

    /// Position of `p`, or [`SkeletonError::MissingCoordinates`].
    #[inline]
    pub fn try_restrict(&self, p: P) -> Result<Point3, SkeletonError> {
        self.get(p)
            .ok_or_else(|| SkeletonError::MissingCoordinates(format!("{p:?}")))
    }

    /// Mutable position of `p`, or [`SkeletonError::MissingCoordinates`].
    #[inline]
    pub fn try_restrict_mut(&mut self, p: P) -> Result<&mut Point3, SkeletonError> {
        self.positions
            .get_mut(&p)
            .ok_or_else(|| SkeletonError::MissingCoordinates(format!("{p:?}")))
    }

    /// Positions of `nodes`, in the given order.
    pub fn gather(&self, nodes: &[P]) -> Result<Vec<Point3>, SkeletonError> {
        nodes.iter().map(|&p| self.try_restrict(p)).collect()
    }

    /// Iterate `(node, position)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (P, Point3)> + '_ {
        self.positions.iter().map(|(&p, &x)| (p, x))
    }
}

impl<P: NodeLike> FromIterator<(P, Point3)> for Coordinates<P> {
    fn from_iter<I: IntoIterator<Item = (P, Point3)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}
