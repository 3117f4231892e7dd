//! Structural validation of skeletons.
//!
//! Algorithms in this crate tolerate malformed input where they can (extra
//! roots are ignored, multi-parent graphs fall back to BFS paths). These
//! checks are for callers that want to reject such input up front.

use crate::algs::traversal::{Dir, TraversalBuilder};
use crate::skeleton::Skeleton;
use crate::skeleton_error::SkeletonError;
use crate::topology::arbor::Arbor;
use crate::topology::bounds::NodeLike;
use std::collections::{HashMap, HashSet, VecDeque};

/// Checks that `arbor` has no directed cycle (Kahn's algorithm).
pub fn check_acyclic<A: Arbor>(arbor: &A) -> Result<(), SkeletonError> {
    let mut in_deg: HashMap<A::Node, usize> = arbor
        .nodes()
        .map(|p| (p, arbor.parent_count(p)))
        .collect();
    let mut queue: VecDeque<A::Node> = in_deg
        .iter()
        .filter(|&(_, &d)| d == 0)
        .map(|(&p, _)| p)
        .collect();
    let mut seen = 0usize;
    while let Some(p) = queue.pop_front() {
        seen += 1;
        for child in arbor.children(p) {
            if let Some(d) = in_deg.get_mut(&child) {
                *d -= 1;
                if *d == 0 {
                    queue.push_back(child);
                }
            }
        }
    }
    if seen != in_deg.len() {
        return Err(SkeletonError::CycleDetected);
    }
    Ok(())
}

/// Validate that `skeleton` is a single rooted tree with full geometry.
///
/// Checks, in order: no node has more than one parent, there is exactly one
/// root, there is no cycle, every node is reachable from the root, and every
/// node has coordinates. An empty skeleton is valid.
pub fn validate_tree<P: NodeLike>(skeleton: &Skeleton<P>) -> Result<(), SkeletonError> {
    if skeleton.is_empty() {
        return Ok(());
    }
    let lm = skeleton.landmarks();
    if let Some(&p) = lm.multi_parent.first() {
        return Err(SkeletonError::MultipleParents(format!("{p:?}")));
    }
    let root = match lm.roots.as_slice() {
        [] => return Err(SkeletonError::CycleDetected),
        [root] => *root,
        roots => return Err(SkeletonError::MultipleRoots(roots.len())),
    };
    check_acyclic(skeleton)?;

    let reached: HashSet<P> = TraversalBuilder::new(skeleton)
        .seeds([root])
        .dir(Dir::Down)
        .dfs()
        .run()
        .into_iter()
        .collect();
    if reached.len() != skeleton.len() {
        if let Some(p) = skeleton.sorted_nodes().into_iter().find(|p| !reached.contains(p)) {
            return Err(SkeletonError::no_path(root, p));
        }
    }

    for p in skeleton.sorted_nodes() {
        if !skeleton.coordinates().contains(p) {
            return Err(SkeletonError::MissingCoordinates(format!("{p:?}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::coordinates::Coordinates;
    use crate::topology::arbor::InMemoryArbor;

    fn skel(edges: &[(u32, u32)]) -> Skeleton<u32> {
        let mut ids: Vec<u32> = edges.iter().flat_map(|&(c, p)| [c, p]).collect();
        ids.sort_unstable();
        ids.dedup();
        Skeleton::try_from_parts(ids.iter().map(|&i| (i, [0.0; 3])), edges.iter().copied()).unwrap()
    }

    #[test]
    fn empty_and_single_are_valid() {
        validate_tree(&Skeleton::<u32>::new()).unwrap();
        let mut s = Skeleton::new();
        s.add_node(1u32, [0.0; 3]);
        validate_tree(&s).unwrap();
    }

    #[test]
    fn y_tree_is_valid() {
        validate_tree(&skel(&[(2, 1), (3, 2), (4, 2)])).unwrap();
    }

    #[test]
    fn two_roots() {
        let s = skel(&[(2, 1), (4, 3)]);
        assert_eq!(validate_tree(&s), Err(SkeletonError::MultipleRoots(2)));
    }

    #[test]
    fn multiple_parents() {
        let s = skel(&[(3, 1), (3, 2)]);
        assert_eq!(
            validate_tree(&s),
            Err(SkeletonError::MultipleParents("3".into()))
        );
    }

    #[test]
    fn pure_cycle_has_no_root() {
        let s = skel(&[(2, 1), (3, 2), (1, 3)]);
        assert_eq!(validate_tree(&s), Err(SkeletonError::CycleDetected));
    }

    #[test]
    fn kahn_detects_cycles() {
        let a = InMemoryArbor::from_edges([(2u32, 1), (3, 2)]);
        check_acyclic(&a).unwrap();
        let c = InMemoryArbor::from_edges([(2u32, 1), (3, 2), (2, 3)]);
        assert_eq!(check_acyclic(&c), Err(SkeletonError::CycleDetected));
    }

    #[test]
    fn missing_coordinates() {
        let arbor = InMemoryArbor::from_edges([(2u32, 1)]);
        let coords: Coordinates<u32> = [(1, [0.0; 3])].into_iter().collect();
        let s = Skeleton::from_arbor(arbor, coords);
        assert_eq!(
            validate_tree(&s),
            Err(SkeletonError::MissingCoordinates("2".into()))
        );
    }

    #[test]
    fn unreachable_node_behind_a_cycle() {
        // 1 → 2, plus a detached 3 ⇄ 4 loop: one root, but 3 and 4 are cut off.
        let s = skel(&[(2, 1), (4, 3), (3, 4)]);
        assert_eq!(validate_tree(&s), Err(SkeletonError::CycleDetected));
    }
}
