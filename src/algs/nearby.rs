//! Path-distance neighbour search along an unbranched point sequence.
//!
//! "Near" is measured along the sequence, not in space: starting at point
//! `i`, step sizes between consecutive points are accumulated while walking
//! forward and then backward, and the walk stops as soon as the accumulated
//! distance reaches the limit. Step sizes are L1 norms (`Σ|Δ|`).
//!
//! # Window limit
//! [`WindowMetric::SquaredRadius`] (the default) compares the accumulated
//! distance against `max_dist²`, the window that existing smoothed
//! skeletons were produced with, even though the accumulated quantity is a
//! plain distance. [`WindowMetric::Radius`] compares against
//! `max_dist` and is the dimensionally consistent variant.

use crate::geometry::Point3;
use crate::geometry::metrics::l1_distance;
use itertools::Itertools;

/// How `max_dist` turns into the accumulated-distance limit.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WindowMetric {
    /// Limit is `max_dist²`.
    #[default]
    SquaredRadius,
    /// Limit is `max_dist`.
    Radius,
}

impl WindowMetric {
    #[inline]
    pub fn limit(self, max_dist: f64) -> f64 {
        match self {
            WindowMetric::SquaredRadius => max_dist * max_dist,
            WindowMetric::Radius => max_dist,
        }
    }
}

/// Options for [`find_nearby_indices`] / [`find_nearby_points`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearbyOpts {
    /// Put the point itself first in its own neighbour list.
    pub include_point: bool,
    pub metric: WindowMetric,
}

impl Default for NearbyOpts {
    fn default() -> Self {
        Self {
            include_point: true,
            metric: WindowMetric::SquaredRadius,
        }
    }
}

/// For every point, the indices of the points within the path-distance
/// window.
///
/// Each list holds the point itself (if requested), then the forward
/// neighbours in walking order, then the backward neighbours in walking
/// order. The accumulated distance must stay strictly below the limit.
pub fn find_nearby_indices(points: &[Point3], max_dist: f64, opts: &NearbyOpts) -> Vec<Vec<usize>> {
    let limit = opts.metric.limit(max_dist);
    let steps: Vec<f64> = points
        .iter()
        .tuple_windows()
        .map(|(&a, &b)| l1_distance(b, a))
        .collect();
    let n = points.len();

    (0..n)
        .map(|i| {
            let mut near = Vec::new();
            if opts.include_point {
                near.push(i);
            }
            let mut d = 0.0;
            for j in i + 1..n {
                d += steps[j - 1];
                if d >= limit {
                    break;
                }
                near.push(j);
            }
            let mut d = 0.0;
            for j in (0..i).rev() {
                d += steps[j];
                if d >= limit {
                    break;
                }
                near.push(j);
            }
            near
        })
        .collect()
}

/// Same as [`find_nearby_indices`], returning coordinates instead.
pub fn find_nearby_points(points: &[Point3], max_dist: f64, opts: &NearbyOpts) -> Vec<Vec<Point3>> {
    find_nearby_indices(points, max_dist, opts)
        .into_iter()
        .map(|near| near.into_iter().map(|j| points[j]).collect())
        .collect()
}
