//! Neuron skeleton: topology, positions and a cached landmark view.
//!
//! A [`Skeleton`] is built once per neuron by the caller's loading layer and
//! then handed read-only to the morphology algorithms. It owns:
//! - an [`InMemoryArbor`] with the child → parent edges,
//! - a [`Coordinates`] map with one position per node,
//! - an optional soma node used as the default base for branch order,
//! - a lazily computed [`Landmarks`] cache.
//!
//! # Example
//! ```rust
//! use skeleton_sieve::skeleton::Skeleton;
//!
//! let skeleton = Skeleton::try_from_parts(
//!     [(1u32, [0.0, 0.0, 0.0]), (2, [10.0, 0.0, 0.0]), (3, [20.0, 0.0, 0.0])],
//!     [(2, 1), (3, 2)],
//! )?;
//! assert_eq!(skeleton.root()?, 1);
//! assert_eq!(skeleton.leaves(), &[3]);
//! # Ok::<(), skeleton_sieve::skeleton_error::SkeletonError>(())
//! ```

use crate::data::coordinates::Coordinates;
use crate::geometry::{Point3, distance};
use crate::skeleton_error::SkeletonError;
use crate::topology::arbor::{Arbor, InMemoryArbor};
use crate::topology::bounds::NodeLike;
use crate::topology::cache::InvalidateCache;
use crate::topology::landmarks::{Landmarks, compute_landmarks};
use once_cell::sync::OnceCell;

/// A positioned tree of nodes.
#[derive(Clone, Debug)]
pub struct Skeleton<P: NodeLike> {
    arbor: InMemoryArbor<P>,
    coordinates: Coordinates<P>,
    soma: Option<P>,
    landmarks: OnceCell<Landmarks<P>>,
}

impl<P: NodeLike> Default for Skeleton<P> {
    fn default() -> Self {
        Self {
            arbor: InMemoryArbor::default(),
            coordinates: Coordinates::default(),
            soma: None,
            landmarks: OnceCell::new(),
        }
    }
}

impl<P: NodeLike> Skeleton<P> {
    /// Creates an empty skeleton.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a skeleton from a node map and `(child, parent)` edges.
    ///
    /// Every edge endpoint must appear in `nodes`, otherwise
    /// [`SkeletonError::MissingNode`] is returned.
    pub fn try_from_parts<N, E>(nodes: N, edges: E) -> Result<Self, SkeletonError>
    where
        N: IntoIterator<Item = (P, Point3)>,
        E: IntoIterator<Item = (P, P)>,
    {
        let mut skeleton = Self::new();
        for (p, position) in nodes {
            skeleton.add_node(p, position);
        }
        for (child, parent) in edges {
            skeleton.try_add_edge(child, parent)?;
        }
        Ok(skeleton)
    }

    /// Builds a skeleton from a node map and `(node, parent-or-none)` rows,
    /// the layout used by SWC-style exports.
    pub fn from_parent_map<N, E>(nodes: N, parents: E) -> Result<Self, SkeletonError>
    where
        N: IntoIterator<Item = (P, Point3)>,
        E: IntoIterator<Item = (P, Option<P>)>,
    {
        let mut skeleton = Self::new();
        for (p, position) in nodes {
            skeleton.add_node(p, position);
        }
        for (child, parent) in parents {
            match parent {
                Some(parent) => skeleton.try_add_edge(child, parent)?,
                None if !skeleton.arbor.contains(child) => {
                    return Err(SkeletonError::missing_node(child));
                }
                None => {}
            }
        }
        Ok(skeleton)
    }

    /// Assembles a skeleton from prebuilt parts without checking them.
    ///
    /// Nodes of `arbor` may lack a position here; use
    /// [`validate_tree`](crate::topology::validation::validate_tree) to
    /// reject such input.
    pub fn from_arbor(arbor: InMemoryArbor<P>, coordinates: Coordinates<P>) -> Self {
        Self {
            arbor,
            coordinates,
            soma: None,
            landmarks: OnceCell::new(),
        }
    }

    /// Adds (or moves) a node. Returns the previous position, if any.
    pub fn add_node(&mut self, p: P, position: Point3) -> Option<Point3> {
        if self.arbor.add_node(p) {
            self.invalidate_cache();
        }
        self.coordinates.insert(p, position)
    }

    /// Inserts the edge `child → parent`. Both nodes must already exist.
    pub fn try_add_edge(&mut self, child: P, parent: P) -> Result<(), SkeletonError> {
        for p in [child, parent] {
            if !self.arbor.contains(p) {
                return Err(SkeletonError::missing_node(p));
            }
        }
        self.arbor.add_edge(child, parent);
        self.invalidate_cache();
        Ok(())
    }

    /// Marks `p` as the soma landmark.
    pub fn set_soma(&mut self, p: P) -> Result<(), SkeletonError> {
        if !self.arbor.contains(p) {
            return Err(SkeletonError::missing_node(p));
        }
        self.soma = Some(p);
        Ok(())
    }

    #[inline]
    pub fn soma(&self) -> Option<P> {
        self.soma
    }

    #[inline]
    pub fn arbor(&self) -> &InMemoryArbor<P> {
        &self.arbor
    }

    #[inline]
    pub fn coordinates(&self) -> &Coordinates<P> {
        &self.coordinates
    }

    /// Returns a copy of this skeleton with every position replaced by the
    /// matching entry of `coordinates`. Nodes missing from `coordinates`
    /// keep their current position.
    pub fn with_coordinates(&self, coordinates: &Coordinates<P>) -> Self {
        let mut out = self.clone();
        for (p, position) in coordinates.iter() {
            if out.arbor.contains(p) {
                out.coordinates.insert(p, position);
            }
        }
        out
    }

    /// Position of `p`.
    #[inline]
    pub fn position(&self, p: P) -> Result<Point3, SkeletonError> {
        if !self.arbor.contains(p) {
            return Err(SkeletonError::missing_node(p));
        }
        self.coordinates.try_restrict(p)
    }

    /// Euclidean distance between the positions of `a` and `b`.
    #[inline]
    pub fn node_distance(&self, a: P, b: P) -> Result<f64, SkeletonError> {
        Ok(distance(self.position(a)?, self.position(b)?))
    }

    /// Cached landmark sets.
    pub fn landmarks(&self) -> &Landmarks<P> {
        self.landmarks.get_or_init(|| compute_landmarks(&self.arbor))
    }

    /// The root node (smallest parentless node).
    pub fn root(&self) -> Result<P, SkeletonError> {
        self.landmarks().root().ok_or(SkeletonError::EmptySkeleton)
    }

    #[inline]
    pub fn leaves(&self) -> &[P] {
        &self.landmarks().leaves
    }

    #[inline]
    pub fn bifurcations(&self) -> &[P] {
        &self.landmarks().bifurcations
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arbor.node_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arbor.node_count() == 0
    }

    /// Positions of `nodes` in the given order, or of every node in
    /// ascending identifier order when `nodes` is `None`.
    pub fn node_array(&self, nodes: Option<&[P]>) -> Result<Vec<Point3>, SkeletonError> {
        match nodes {
            Some(nodes) => nodes.iter().map(|&p| self.position(p)).collect(),
            None => self
                .arbor
                .sorted_nodes()
                .into_iter()
                .map(|p| self.position(p))
                .collect(),
        }
    }

    /// Like [`Skeleton::node_array`], but pairs each position with its node.
    pub fn node_array_with_ids(
        &self,
        nodes: Option<&[P]>,
    ) -> Result<Vec<(P, Point3)>, SkeletonError> {
        let ids = match nodes {
            Some(nodes) => nodes.to_vec(),
            None => self.arbor.sorted_nodes(),
        };
        ids.into_iter()
            .map(|p| Ok((p, self.position(p)?)))
            .collect()
    }
}

impl<P: NodeLike> InvalidateCache for Skeleton<P> {
    #[inline]
    fn invalidate_cache(&mut self) {
        self.landmarks.take();
    }
}

impl<P: NodeLike> Arbor for Skeleton<P> {
    type Node = P;
    type ChildIter<'a>
        = <InMemoryArbor<P> as Arbor>::ChildIter<'a>
    where
        Self: 'a;
    type ParentIter<'a>
        = <InMemoryArbor<P> as Arbor>::ParentIter<'a>
    where
        Self: 'a;

    #[inline]
    fn children<'a>(&'a self, p: P) -> Self::ChildIter<'a> {
        self.arbor.children(p)
    }

    #[inline]
    fn parents<'a>(&'a self, p: P) -> Self::ParentIter<'a> {
        self.arbor.parents(p)
    }

    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = P> + 'a> {
        self.arbor.nodes()
    }

    #[inline]
    fn contains(&self, p: P) -> bool {
        self.arbor.contains(p)
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.arbor.node_count()
    }

    #[inline]
    fn child_count(&self, p: P) -> usize {
        self.arbor.child_count(p)
    }

    #[inline]
    fn parent_count(&self, p: P) -> usize {
        self.arbor.parent_count(p)
    }

    fn is_tree_shaped(&self) -> bool {
        self.landmarks().is_tree_shaped()
    }
}
