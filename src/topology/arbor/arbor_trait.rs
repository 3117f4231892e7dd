//! Core trait for the tree topology of a skeleton.
//!
//! This module defines the [`Arbor`] trait: a directed parent/child incidence
//! structure with both directions available. Edges point from a child to its
//! parent in the input data; the trait exposes them in both directions.

use crate::topology::bounds::NodeLike;

/// Read-only directed/undirected access to a skeleton's topology.
///
/// # Associated Types
/// - `Node`: the node identifier.
/// - `ChildIter`: iterator over the children (successors) of a node.
/// - `ParentIter`: iterator over the parents (predecessors) of a node.
///
/// A well-formed skeleton has at most one parent per node, but implementors
/// must still report every parent they store so that path queries can detect
/// and handle non-tree input.
pub trait Arbor {
    type Node: NodeLike;

    type ChildIter<'a>: Iterator<Item = Self::Node>
    where
        Self: 'a;
    type ParentIter<'a>: Iterator<Item = Self::Node>
    where
        Self: 'a;

    /// Successors of `p`, in insertion order.
    fn children<'a>(&'a self, p: Self::Node) -> Self::ChildIter<'a>;
    /// Predecessors of `p`, in insertion order.
    fn parents<'a>(&'a self, p: Self::Node) -> Self::ParentIter<'a>;

    /// All nodes, in unspecified order.
    fn nodes<'a>(&'a self) -> Box<dyn Iterator<Item = Self::Node> + 'a>;
    /// Whether `p` is part of this arbor.
    fn contains(&self, p: Self::Node) -> bool;
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// All nodes in ascending order.
    fn sorted_nodes(&self) -> Vec<Self::Node> {
        let mut out: Vec<_> = self.nodes().collect();
        out.sort_unstable();
        out
    }

    #[inline]
    fn child_count(&self, p: Self::Node) -> usize {
        self.children(p).count()
    }

    #[inline]
    fn parent_count(&self, p: Self::Node) -> usize {
        self.parents(p).count()
    }

    /// Undirected degree: parents plus children.
    #[inline]
    fn degree(&self, p: Self::Node) -> usize {
        self.parent_count(p) + self.child_count(p)
    }

    /// The single parent of `p`, or `None` for roots and multi-parent nodes.
    fn parent(&self, p: Self::Node) -> Option<Self::Node> {
        let mut it = self.parents(p);
        match (it.next(), it.next()) {
            (Some(q), None) => Some(q),
            _ => None,
        }
    }

    /// Undirected neighbours: parents first, then children.
    fn neighbors<'a>(&'a self, p: Self::Node) -> Box<dyn Iterator<Item = Self::Node> + 'a> {
        Box::new(self.parents(p).chain(self.children(p)))
    }

    /// Every directed edge as `(parent, child)`, parents in ascending order
    /// and children in insertion order.
    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = (Self::Node, Self::Node)> + 'a> {
        Box::new(
            self.sorted_nodes()
                .into_iter()
                .flat_map(move |p| self.children(p).map(move |c| (p, c))),
        )
    }

    /// Number of directed edges.
    fn edge_count(&self) -> usize {
        self.nodes().map(|p| self.child_count(p)).sum()
    }

    /// Whether no node has more than one parent.
    ///
    /// Implementations that cache landmarks should override this; the
    /// default scans every node.
    fn is_tree_shaped(&self) -> bool {
        self.nodes().all(|p| self.parent_count(p) <= 1)
    }
}
