mod util;

use skeleton_sieve::DebugInvariants;
use skeleton_sieve::skeleton::Skeleton;
use skeleton_sieve::skeleton_error::SkeletonError;
use skeleton_sieve::topology::validation::validate_tree;
use util::*;

#[test]
fn random_trees_are_valid() {
    for seed in 0..10 {
        let s = random_tree(seed, 50);
        validate_tree(&s).unwrap();
        s.validate_invariants().unwrap();
    }
}

#[test]
fn forest_is_rejected_but_still_usable() {
    let s = skeleton_with(&[(2, 1), (4, 3)], |i| [i as f64, 0.0, 0.0]);
    assert_eq!(validate_tree(&s), Err(SkeletonError::MultipleRoots(2)));
    // The smallest root is used; the other component is unreachable from it.
    assert_eq!(s.root().unwrap(), 1);
    assert_eq!(s.path_length(1, 2).unwrap(), 1.0);
    assert!(matches!(
        s.unique_neurites(None),
        Err(SkeletonError::NoPath { .. })
    ));
}

#[test]
fn parent_map_round_trip() {
    let rows = [(1u32, None), (2, Some(1)), (3, Some(2)), (4, Some(2))];
    let s = Skeleton::from_parent_map(rows.iter().map(|&(i, _)| (i, [i as f64, 0.0, 0.0])), rows)
        .unwrap();
    validate_tree(&s).unwrap();
    assert_eq!(s.bifurcations(), &[2]);
}
