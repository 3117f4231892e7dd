//! Decomposition of a skeleton into unbranched neurite segments.
//!
//! A neurite runs between two landmarks (the base node, a bifurcation, or a
//! terminal) and has no bifurcation strictly inside it. Enumerated from a
//! fixed base, the neurites partition the skeleton's edges: every edge lies
//! on exactly one segment.
//!
//! Terminals are the nodes of undirected degree 1. On a skeleton rooted at
//! `base` these are exactly the leaves; when `base` sits elsewhere the root
//! (if it has a single child) becomes a terminal too, which keeps the
//! partition complete for any base.

use crate::algs::traversal::shortest_path;
use crate::skeleton::Skeleton;
use crate::skeleton_error::SkeletonError;
use crate::topology::arbor::Arbor;
use crate::topology::bounds::NodeLike;
use std::collections::HashSet;

/// A segment and its reverse are the same neurite.
fn canonical<P: NodeLike>(segment: &[P]) -> Vec<P> {
    let reversed: Vec<P> = segment.iter().rev().copied().collect();
    if reversed.as_slice() < segment {
        reversed
    } else {
        segment.to_vec()
    }
}

/// Unique neurite segments of `skeleton`, enumerated from `base`.
///
/// `base` defaults to the root. For every landmark `t ≠ base` (bifurcations
/// first, then terminals, each in ascending order) the segment runs from the
/// last bifurcation strictly before `t` on the path `base → t` (or from
/// `base` itself) to `t`. Segments are oriented away from `base`.
///
/// A single-node or empty skeleton yields no segments.
///
/// # Errors
/// - [`SkeletonError::MissingNode`] if `base` is not in the skeleton.
/// - [`SkeletonError::NoPath`] if some landmark is not connected to `base`.
/// - [`SkeletonError::EmptySkeleton`] if `base` is `None` and the non-empty
///   skeleton has no root.
pub fn unique_neurites<P: NodeLike>(
    skeleton: &Skeleton<P>,
    base: Option<P>,
) -> Result<Vec<Vec<P>>, SkeletonError> {
    if skeleton.is_empty() {
        return Ok(Vec::new());
    }
    let base = match base {
        Some(b) if skeleton.contains(b) => b,
        Some(b) => return Err(SkeletonError::missing_node(b)),
        None => skeleton.root()?,
    };
    let lm = skeleton.landmarks();

    let mut seen: HashSet<Vec<P>> = HashSet::new();
    let mut neurites = Vec::new();
    for &target in lm.bifurcations.iter().chain(lm.terminals.iter()) {
        if target == base {
            continue;
        }
        let path = shortest_path(skeleton, base, target)?;
        let start = path[..path.len() - 1]
            .iter()
            .rposition(|&p| lm.is_bifurcation(p))
            .unwrap_or(0);
        let segment = &path[start..];
        if segment.len() < 2 {
            continue;
        }
        if seen.insert(canonical(segment)) {
            neurites.push(segment.to_vec());
        }
    }
    log::debug!(
        "unique_neurites(base={base:?}): {} segment(s) from {} bifurcation(s) and {} terminal(s)",
        neurites.len(),
        lm.bifurcations.len(),
        lm.terminals.len()
    );
    Ok(neurites)
}

impl<P: NodeLike> Skeleton<P> {
    /// See [`unique_neurites`].
    pub fn unique_neurites(&self, base: Option<P>) -> Result<Vec<Vec<P>>, SkeletonError> {
        unique_neurites(self, base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skel(edges: &[(u32, u32)]) -> Skeleton<u32> {
        let mut ids: Vec<u32> = edges.iter().flat_map(|&(c, p)| [c, p]).collect();
        ids.sort_unstable();
        ids.dedup();
        Skeleton::try_from_parts(
            ids.iter().map(|&i| (i, [i as f64, 0.0, 0.0])),
            edges.iter().copied(),
        )
        .unwrap()
    }

    #[test]
    fn y_tree_has_three_segments() {
        // R=1 → M=2 → {L1=3, L2=4}
        let s = skel(&[(2, 1), (3, 2), (4, 2)]);
        let n = unique_neurites(&s, None).unwrap();
        assert_eq!(n, vec![vec![1, 2], vec![2, 3], vec![2, 4]]);
        assert_eq!(n.len(), s.bifurcations().len() + s.leaves().len());
    }

    #[test]
    fn unbranched_line_is_one_segment() {
        let s = skel(&[(2, 1), (3, 2), (4, 3)]);
        assert_eq!(unique_neurites(&s, None).unwrap(), vec![vec![1, 2, 3, 4]]);
    }

    #[test]
    fn base_in_the_middle_splits_the_segment() {
        let s = skel(&[(2, 1), (3, 2), (4, 3)]);
        let n = unique_neurites(&s, Some(2)).unwrap();
        assert_eq!(n, vec![vec![2, 1], vec![2, 3, 4]]);
    }

    #[test]
    fn base_at_a_leaf_reaches_the_root() {
        let s = skel(&[(2, 1), (3, 2), (4, 2)]);
        let n = unique_neurites(&s, Some(3)).unwrap();
        assert_eq!(n, vec![vec![3, 2], vec![2, 1], vec![2, 4]]);
    }

    #[test]
    fn nested_bifurcations() {
        // 1 → 2 → {3, 4}; 3 → {5, 6}
        let s = skel(&[(2, 1), (3, 2), (4, 2), (5, 3), (6, 3)]);
        let n = unique_neurites(&s, None).unwrap();
        assert_eq!(
            n,
            vec![vec![1, 2], vec![2, 3], vec![2, 4], vec![3, 5], vec![3, 6]]
        );
    }

    #[test]
    fn single_node_is_empty() {
        let mut s = Skeleton::<u32>::new();
        s.add_node(1, [0.0; 3]);
        assert!(unique_neurites(&s, None).unwrap().is_empty());
        assert!(unique_neurites(&Skeleton::<u32>::new(), None).unwrap().is_empty());
    }

    #[test]
    fn unknown_base_errors() {
        let s = skel(&[(2, 1)]);
        assert!(matches!(
            unique_neurites(&s, Some(9)),
            Err(SkeletonError::MissingNode(_))
        ));
    }

    #[test]
    fn canonical_form_ignores_direction() {
        assert_eq!(canonical(&[3u32, 2, 1]), vec![1, 2, 3]);
        assert_eq!(canonical(&[1u32, 2, 3]), vec![1, 2, 3]);
    }
}
