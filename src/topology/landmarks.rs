//! Topological landmark sets derived from an [`Arbor`].
//!
//! [`Landmarks`] stores the roots, leaves, bifurcations and terminals of a
//! skeleton as sorted vectors. The sets are never persisted on their own;
//! they are recomputed from the edge maps and cached by [`Skeleton`](crate::skeleton::Skeleton).

use crate::topology::arbor::Arbor;
use crate::topology::bounds::NodeLike;

/// Precomputed landmark information for an arbor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Landmarks<P> {
    /// Nodes without a parent.
    pub roots: Vec<P>,
    /// Nodes without children.
    pub leaves: Vec<P>,
    /// Nodes with more than one child.
    pub bifurcations: Vec<P>,
    /// Nodes with undirected degree 1: non-root leaves, and roots with a
    /// single child.
    pub terminals: Vec<P>,
    /// Nodes with more than one parent (empty for a well-formed tree).
    pub multi_parent: Vec<P>,
}

impl<P: NodeLike> Landmarks<P> {
    /// The smallest root, if any.
    #[inline]
    pub fn root(&self) -> Option<P> {
        self.roots.first().copied()
    }

    #[inline]
    pub fn is_leaf(&self, p: P) -> bool {
        self.leaves.binary_search(&p).is_ok()
    }

    #[inline]
    pub fn is_bifurcation(&self, p: P) -> bool {
        self.bifurcations.binary_search(&p).is_ok()
    }

    #[inline]
    pub fn is_terminal(&self, p: P) -> bool {
        self.terminals.binary_search(&p).is_ok()
    }

    /// Whether every node has at most one parent.
    #[inline]
    pub fn is_tree_shaped(&self) -> bool {
        self.multi_parent.is_empty()
    }
}

/// Compute the landmark sets of `arbor`.
///
/// Runs in O(n log n); every output vector is sorted.
pub fn compute_landmarks<A: Arbor>(arbor: &A) -> Landmarks<A::Node> {
    let mut lm = Landmarks {
        roots: Vec::new(),
        leaves: Vec::new(),
        bifurcations: Vec::new(),
        terminals: Vec::new(),
        multi_parent: Vec::new(),
    };
    for p in arbor.sorted_nodes() {
        let n_parents = arbor.parent_count(p);
        let n_children = arbor.child_count(p);
        if n_parents == 0 {
            lm.roots.push(p);
        }
        if n_parents > 1 {
            lm.multi_parent.push(p);
        }
        if n_children == 0 {
            lm.leaves.push(p);
        }
        if n_children > 1 {
            lm.bifurcations.push(p);
        }
        if n_parents + n_children == 1 {
            lm.terminals.push(p);
        }
    }
    if lm.roots.len() > 1 {
        log::warn!(
            "Skeleton has {} root nodes; using {:?} as the root",
            lm.roots.len(),
            lm.roots[0]
        );
    }
    if !lm.multi_parent.is_empty() {
        log::warn!(
            "Skeleton is not tree-shaped: {} node(s) with more than one parent",
            lm.multi_parent.len()
        );
    }
    lm
}
