#![allow(dead_code)]
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use skeleton_sieve::geometry::Point3;
use skeleton_sieve::skeleton::Skeleton;
use std::collections::HashSet;

/// Build a skeleton from `(child, parent)` edges; node `i` sits at
/// `positions(i)`.
pub fn skeleton_with(edges: &[(u32, u32)], positions: impl Fn(u32) -> Point3) -> Skeleton<u32> {
    let mut ids: Vec<u32> = edges.iter().flat_map(|&(c, p)| [c, p]).collect();
    ids.sort_unstable();
    ids.dedup();
    Skeleton::try_from_parts(ids.iter().map(|&i| (i, positions(i))), edges.iter().copied())
        .unwrap()
}

/// Straight line `1 → 2 → … → n` along x with the given spacing.
pub fn line(n: u32, spacing: f64) -> Skeleton<u32> {
    let edges: Vec<(u32, u32)> = (2..=n).map(|i| (i, i - 1)).collect();
    if edges.is_empty() {
        let mut s = Skeleton::new();
        s.add_node(1, [0.0; 3]);
        return s;
    }
    skeleton_with(&edges, |i| [(i - 1) as f64 * spacing, 0.0, 0.0])
}

/// Random tree on nodes `1..=n`: node `i > 1` picks a parent in `1..i`.
/// Positions are small integer lattice points.
pub fn random_tree(seed: u64, n: u32) -> Skeleton<u32> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut s = Skeleton::new();
    for i in 1..=n {
        let pos = [
            rng.gen_range(-50..=50) as f64,
            rng.gen_range(-50..=50) as f64,
            rng.gen_range(-50..=50) as f64,
        ];
        s.add_node(i, pos);
    }
    for i in 2..=n {
        let parent = rng.gen_range(1..i);
        s.try_add_edge(i, parent).unwrap();
    }
    s
}

/// Undirected edge key.
pub fn undirected(a: u32, b: u32) -> (u32, u32) {
    if a < b { (a, b) } else { (b, a) }
}

/// Edge set of a skeleton as undirected keys.
pub fn edge_set(s: &Skeleton<u32>) -> HashSet<(u32, u32)> {
    use skeleton_sieve::topology::arbor::Arbor;
    s.edges().map(|(p, c)| undirected(p, c)).collect()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * (1.0 + a.abs().max(b.abs()))
}

pub fn approx_pt(a: Point3, b: Point3) -> bool {
    (0..3).all(|i| approx(a[i], b[i]))
}
