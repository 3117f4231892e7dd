//! In-memory implementation of the [`Arbor`] trait.
//!
//! [`InMemoryArbor`] keeps two mirrored hash maps: parent → children and
//! child → parents. Child lists preserve insertion order, which is what makes
//! branch-walking algorithms deterministic.

use super::arbor_trait::Arbor;
use crate::topology::bounds::NodeLike;
use std::collections::HashMap;

/// Hash-map backed parent/child adjacency.
#[derive(Clone, Debug)]
pub struct InMemoryArbor<P>
where
    P: NodeLike,
{
    /// Outgoing adjacency: maps each node to its children.
    pub adjacency_out: HashMap<P, Vec<P>>,
    /// Incoming adjacency: maps each node to its parents.
    pub adjacency_in: HashMap<P, Vec<P>>,
}

impl<P: NodeLike> Default for InMemoryArbor<P> {
    fn default() -> Self {
        Self {
            adjacency_out: HashMap::new(),
            adjacency_in: HashMap::new(),
        }
    }
}

impl<P: NodeLike> InMemoryArbor<P> {
    /// Creates a new, empty arbor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs an arbor from `(child, parent)` pairs.
    ///
    /// # Example
    /// ```rust
    /// use skeleton_sieve::topology::arbor::{Arbor, InMemoryArbor};
    /// let arbor = InMemoryArbor::from_edges([(2u32, 1), (3, 1)]);
    /// assert_eq!(arbor.child_count(1), 2);
    /// assert_eq!(arbor.parent(2), Some(1));
    /// ```
    pub fn from_edges<I: IntoIterator<Item = (P, P)>>(edges: I) -> Self {
        let mut arbor = Self::default();
        for (child, parent) in edges {
            arbor.add_edge(child, parent);
        }
        arbor
    }

    /// Adds an isolated node. Returns `false` if it was already present.
    pub fn add_node(&mut self, p: P) -> bool {
        let fresh = !self.adjacency_out.contains_key(&p);
        self.adjacency_out.entry(p).or_default();
        self.adjacency_in.entry(p).or_default();
        fresh
    }

    /// Inserts the edge `child → parent`, adding missing endpoints.
    ///
    /// Inserting an existing edge again is a no-op.
    pub fn add_edge(&mut self, child: P, parent: P) {
        self.add_node(child);
        self.add_node(parent);
        if self.has_edge(child, parent) {
            return;
        }
        self.adjacency_out.entry(parent).or_default().push(child);
        self.adjacency_in.entry(child).or_default().push(parent);
    }

    #[inline]
    pub fn has_edge(&self, child: P, parent: P) -> bool {
        self.adjacency_out
            .get(&parent)
            .map_or(false, |v| v.contains(&child))
    }

    #[cfg(debug_assertions)]
    pub fn debug_assert_consistent(&self) {
        for (parent, kids) in &self.adjacency_out {
            for child in kids {
                let ok = self
                    .adjacency_in
                    .get(child)
                    .map_or(false, |pars| pars.contains(parent));
                debug_assert!(
                    ok,
                    "Missing mirror in[{child:?}] for edge ({child:?} -> {parent:?})"
                );
            }
        }
        for (child, pars) in &self.adjacency_in {
            for parent in pars {
                let ok = self
                    .adjacency_out
                    .get(parent)
                    .map_or(false, |kids| kids.contains(child));
                debug_assert!(
                    ok,
                    "Missing mirror out[{parent:?}] for edge ({child:?} -> {parent:?})"
                );
            }
        }
    }
}

type NodeSliceIter<'a, P> = std::iter::Copied<std::slice::Iter<'a, P>>;

impl<P: NodeLike> Arbor for InMemoryArbor<P> {
    type Node = P;
    type ChildIter<'a>
        = NodeSliceIter<'a, P>
    where
        Self: 'a;
    type ParentIter<'a>
        = NodeSliceIter<'a, P>
    where
        Self: 'a;

    fn children<'a>(&'a self, p: P) -> Self::ChildIter<'a> {
        self.adjacency_out
            .get(&p)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .copied()
    }

    fn parents<'a>(&'a self, p: P) -> Self::ParentIter<'a> {
        self.adjacency_in
            .get(&p)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .copied()
    }

    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = P> + 'a> {
        Box::new(self.adjacency_out.keys().copied())
    }

    #[inline]
    fn contains(&self, p: P) -> bool {
        self.adjacency_out.contains_key(&p)
    }

    #[inline]
    fn node_count(&self) -> usize {
        self.adjacency_out.len()
    }

    #[inline]
    fn child_count(&self, p: P) -> usize {
        self.adjacency_out.get(&p).map_or(0, Vec::len)
    }

    #[inline]
    fn parent_count(&self, p: P) -> usize {
        self.adjacency_in.get(&p).map_or(0, Vec::len)
    }
}
