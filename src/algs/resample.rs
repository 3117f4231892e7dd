//! Resampling a skeleton into evenly spaced points.
//!
//! Two independent strategies:
//! - [`resampled_edge_array`] subdivides every edge longer than the sampling
//!   distance into spans of exactly that length, ending on the original child.
//! - [`resampled_node_array`] walks the tree from a start node and splits
//!   each edge into `floor(l / D)` equal steps. Edges shorter than `D`
//!   contribute only their start point; that under-sampling is intended.
//!
//! The branch walk recurses once per child at every branch point and
//! concatenates what each branch returns, so no accumulator is shared
//! between recursive calls.

use crate::algs::traversal::preorder_edges;
use crate::geometry::Point3;
use crate::geometry::metrics::distance;
use crate::geometry::vector::{add, lerp, scale, sub};
use crate::skeleton::Skeleton;
use crate::skeleton_error::SkeletonError;
use crate::topology::arbor::Arbor;
use crate::topology::bounds::NodeLike;
use std::collections::HashSet;

/// Default sampling distance (the EM section thickness the tooling was
/// built around).
pub const DEFAULT_RESAMPLE_DISTANCE: f64 = 40.0;

/// One straight piece of a resampled edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSpan {
    pub start: Point3,
    pub end: Point3,
}

impl EdgeSpan {
    #[inline]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    /// `[sx, sy, sz, ex, ey, ez]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 6] {
        let [sx, sy, sz] = self.start;
        let [ex, ey, ez] = self.end;
        [sx, sy, sz, ex, ey, ez]
    }
}

fn check_distance(distance: f64) -> Result<(), SkeletonError> {
    if !(distance.is_finite() && distance > 0.0) {
        return Err(SkeletonError::InvalidParameter(format!(
            "resampling distance must be positive and finite, got {distance}"
        )));
    }
    Ok(())
}

/// Split the straight edge `up → vp` into spans of length `interval`.
///
/// Edges no longer than `interval` come back unchanged as a single span.
/// Otherwise cut points sit at `up + n·k·interval` for every `k` with
/// `k·interval < |vp − up|`, and the last span ends exactly at `vp`.
pub fn subdivide_edge(up: Point3, vp: Point3, interval: f64) -> Vec<EdgeSpan> {
    let d = distance(up, vp);
    if d <= interval {
        return vec![EdgeSpan::new(up, vp)];
    }
    let mut spans = Vec::with_capacity((d / interval).ceil() as usize);
    let mut s = up;
    let mut delta = interval;
    while delta < d {
        let e = lerp(up, vp, delta / d);
        spans.push(EdgeSpan::new(s, e));
        s = e;
        delta += interval;
    }
    spans.push(EdgeSpan::new(s, vp));
    log::trace!("subdivided edge of length {d} into {} span(s)", spans.len());
    spans
}

/// Per-edge subdivision of the whole skeleton.
///
/// Edges are visited parent → child, grouped by parent in DFS pre-order
/// from the sorted roots. Edges in components without a root are skipped
/// (see [`preorder_edges`]).
pub fn resampled_edge_array<P: NodeLike>(
    skeleton: &Skeleton<P>,
    distance: f64,
) -> Result<Vec<EdgeSpan>, SkeletonError> {
    check_distance(distance)?;
    let mut out = Vec::with_capacity(skeleton.len());
    for (u, v) in preorder_edges(skeleton) {
        out.extend(subdivide_edge(
            skeleton.position(u)?,
            skeleton.position(v)?,
            distance,
        ));
    }
    log::debug!("resampled_edge_array: {} span(s)", out.len());
    Ok(out)
}

/// Points emitted for one edge `start → end` by the uniform walk.
fn walk_edge(sn: Point3, en: Point3, interval: f64) -> Vec<Point3> {
    let l = distance(sn, en);
    if l < interval {
        return vec![sn];
    }
    let slope = sub(en, sn);
    let step = scale(slope, interval / l);
    let breaks = (l / interval) as usize;
    let mut points = Vec::with_capacity(breaks + 1);
    let mut origin = sn;
    for _ in 0..breaks {
        points.push(origin);
        origin = add(origin, step);
    }
    points.push(origin);
    points
}

/// Walk from `start`, beginning with the edge `start → end` when given.
///
/// `on_path` holds the nodes between the walk's origin and `start`; a
/// successor already on it closes a directed cycle.
fn walk_from<P: NodeLike>(
    skeleton: &Skeleton<P>,
    start: P,
    end: Option<P>,
    distance: f64,
    on_path: &mut HashSet<P>,
) -> Result<Vec<Point3>, SkeletonError> {
    let mut entered = Vec::new();
    let nodes = walk_branch(skeleton, start, end, distance, on_path, &mut entered);
    for p in entered {
        on_path.remove(&p);
    }
    nodes
}

fn walk_branch<P: NodeLike>(
    skeleton: &Skeleton<P>,
    mut start: P,
    mut end: Option<P>,
    distance: f64,
    on_path: &mut HashSet<P>,
    entered: &mut Vec<P>,
) -> Result<Vec<Point3>, SkeletonError> {
    let mut nodes = Vec::new();
    loop {
        let next = match end.take() {
            Some(e) => e,
            None => {
                let children: Vec<P> = skeleton.children(start).collect();
                match children.as_slice() {
                    [] => return Ok(nodes),
                    [only] => *only,
                    branches => {
                        for &child in branches {
                            nodes.extend(walk_from(skeleton, start, Some(child), distance, on_path)?);
                        }
                        return Ok(nodes);
                    }
                }
            }
        };
        if !on_path.insert(next) {
            log::warn!("resampled_node_array: cycle through {next:?}");
            return Err(SkeletonError::CycleDetected);
        }
        entered.push(next);
        nodes.extend(walk_edge(
            skeleton.position(start)?,
            skeleton.position(next)?,
            distance,
        ));
        start = next;
    }
}

/// Uniform-interval walk over the tree.
///
/// Starting at `start` (default: the root) the walk follows successors. For
/// an edge of length `l`:
/// - `l < distance`: the start point is emitted as is;
/// - otherwise `floor(l / distance)` steps of `(end − start)·(distance / l)`
///   are taken, emitting the point before each step and the accumulated
///   point after the last one.
///
/// A node without successors ends the walk without being emitted. At a
/// branch point every child branch is walked separately, and their points
/// are concatenated in child insertion order.
///
/// # Errors
/// - [`SkeletonError::MissingNode`] if `start` is unknown.
/// - [`SkeletonError::CycleDetected`] if the walk reaches a node that is
///   already on its own path. Nodes with several parents are walked once per
///   incoming path.
pub fn resampled_node_array<P: NodeLike>(
    skeleton: &Skeleton<P>,
    distance: f64,
    start: Option<P>,
) -> Result<Vec<Point3>, SkeletonError> {
    check_distance(distance)?;
    let start = match start {
        Some(s) if skeleton.contains(s) => s,
        Some(s) => return Err(SkeletonError::missing_node(s)),
        None => skeleton.root()?,
    };
    let nodes = walk_from(skeleton, start, None, distance, &mut HashSet::from([start]))?;
    log::debug!("resampled_node_array(start={start:?}): {} point(s)", nodes.len());
    Ok(nodes)
}
