//! Scalar morphometrics over a whole skeleton.
//!
//! Degenerate skeletons produce sentinels, not errors: a single node has
//! zero path length, and a skeleton without any edge length has a NaN
//! center of mass.

use crate::algs::neurites::unique_neurites;
use crate::algs::traversal::{path_length, path_nodes_length, shortest_path};
use crate::geometry::metrics::{distance, midpoint};
use crate::geometry::Point3;
use crate::skeleton::Skeleton;
use crate::skeleton_error::SkeletonError;
use crate::topology::arbor::Arbor;
use crate::topology::bounds::NodeLike;
use std::collections::HashMap;

/// Length-weighted mean of edge midpoints ("a series of tubes").
///
/// Returns `[NaN; 3]` when the total edge length is zero.
pub fn center_of_mass<P: NodeLike>(skeleton: &Skeleton<P>) -> Result<Point3, SkeletonError> {
    let mut com = [0.0f64; 3];
    let mut mass = 0.0;
    for (parent, child) in skeleton.edges() {
        let a = skeleton.position(parent)?;
        let b = skeleton.position(child)?;
        let m = midpoint(a, b);
        let d = distance(a, b);
        for axis in 0..3 {
            com[axis] += m[axis] * d;
        }
        mass += d;
    }
    if mass == 0.0 {
        return Ok([f64::NAN; 3]);
    }
    Ok(com.map(|c| c / mass))
}

/// Summed length of every neurite segment, i.e. total cable length.
pub fn total_pathlength<P: NodeLike>(skeleton: &Skeleton<P>) -> Result<f64, SkeletonError> {
    unique_neurites(skeleton, None)?
        .iter()
        .map(|segment| path_nodes_length(skeleton, segment))
        .sum()
}

/// Path length from the root to every leaf, in ascending leaf order.
///
/// Returns `None` if the skeleton has no leaves.
pub fn root_to_leaf_pathlengths<P: NodeLike>(
    skeleton: &Skeleton<P>,
) -> Result<Option<Vec<f64>>, SkeletonError> {
    let leaves = skeleton.leaves();
    if leaves.is_empty() {
        return Ok(None);
    }
    let root = skeleton.root()?;
    leaves
        .iter()
        .map(|&leaf| path_length(skeleton, root, leaf))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Length of the longest unbranched segment.
///
/// Without bifurcations this is the longest root-to-leaf path; a single-node
/// skeleton has length 0.
pub fn longest_neurite_length<P: NodeLike>(skeleton: &Skeleton<P>) -> Result<f64, SkeletonError> {
    if skeleton.len() <= 1 {
        return Ok(0.0);
    }
    let lengths = if skeleton.bifurcations().is_empty() {
        root_to_leaf_pathlengths(skeleton)?.unwrap_or_default()
    } else {
        unique_neurites(skeleton, None)?
            .iter()
            .map(|segment| path_nodes_length(skeleton, segment))
            .collect::<Result<Vec<_>, _>>()?
    };
    Ok(lengths.into_iter().fold(0.0, f64::max))
}

/// Node sequence of the path with the most nodes between two leaves.
///
/// - A single node yields that node.
/// - With one leaf, the path runs from the root to it.
/// - Otherwise all leaf pairs are compared; on ties the first pair in
///   ascending order wins.
pub fn longest_node_path<P: NodeLike>(skeleton: &Skeleton<P>) -> Result<Vec<P>, SkeletonError> {
    let root = skeleton.root()?;
    if skeleton.len() == 1 {
        return Ok(vec![root]);
    }
    let leaves = skeleton.leaves();
    if let [leaf] = leaves {
        return shortest_path(skeleton, root, *leaf);
    }
    let mut longest: Vec<P> = Vec::new();
    for (i, &a) in leaves.iter().enumerate() {
        for &b in &leaves[i + 1..] {
            let path = shortest_path(skeleton, a, b)?;
            if path.len() > longest.len() {
                longest = path;
            }
        }
    }
    Ok(longest)
}

/// Flat node/edge arrays.
///
/// Nodes are numbered by first appearance while scanning children in
/// ascending order, each followed by its parents. Edges are returned as
/// `(child_index, parent_index)` pairs.
pub fn node_edge_array<P: NodeLike>(
    skeleton: &Skeleton<P>,
) -> Result<(Vec<Point3>, Vec<(usize, usize)>), SkeletonError> {
    let mut index: HashMap<P, usize> = HashMap::with_capacity(skeleton.len());
    let mut nodes = Vec::with_capacity(skeleton.len());
    let mut edges = Vec::new();

    let mut index_of = |p: P, nodes: &mut Vec<Point3>| -> Result<usize, SkeletonError> {
        if let Some(&i) = index.get(&p) {
            return Ok(i);
        }
        nodes.push(skeleton.position(p)?);
        index.insert(p, nodes.len() - 1);
        Ok(nodes.len() - 1)
    };

    for child in skeleton.sorted_nodes() {
        let ci = index_of(child, &mut nodes)?;
        for parent in skeleton.parents(child) {
            let pi = index_of(parent, &mut nodes)?;
            edges.push((ci, pi));
        }
    }
    Ok((nodes, edges))
}
