//! Gaussian smoothing of neurite point sequences.
//!
//! Each interior point is replaced by a weighted mean of itself and its
//! path-distance neighbours (see [`crate::algs::nearby`]). The point itself
//! carries weight 1, each neighbour `exp(−d²/(2σ²))` where `d` is the
//! Euclidean distance to the point. Sequence endpoints never move, so
//! smoothing a whole skeleton segment by segment keeps bifurcations and
//! leaves in place.

use crate::algs::nearby::{NearbyOpts, WindowMetric, find_nearby_points};
use crate::algs::neurites::unique_neurites;
use crate::data::coordinates::Coordinates;
use crate::geometry::metrics::distance;
use crate::geometry::{Axis, Point3};
use crate::skeleton::Skeleton;
use crate::skeleton_error::SkeletonError;
use crate::topology::bounds::NodeLike;

/// Parameters for [`gaussian_smooth_points`] and [`gaussian_smooth_neuron`].
///
/// Missing fields take their defaults when deserializing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Kernel width, in the units of the coordinates.
    pub sigma: f64,
    /// Weight below which a neighbour no longer contributes; sets the window.
    pub min_effect: f64,
    /// Axes that keep their original value after smoothing.
    pub fix_axes: Vec<Axis>,
    pub metric: WindowMetric,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            sigma: 300.0,
            min_effect: 1e-6,
            fix_axes: Vec::new(),
            metric: WindowMetric::SquaredRadius,
        }
    }
}

impl SmoothingConfig {
    pub fn validate(&self) -> Result<(), SkeletonError> {
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(SkeletonError::InvalidParameter(format!(
                "sigma must be positive and finite, got {}",
                self.sigma
            )));
        }
        if !(self.min_effect > 0.0 && self.min_effect < 1.0) {
            return Err(SkeletonError::InvalidParameter(format!(
                "min_effect must lie in (0, 1), got {}",
                self.min_effect
            )));
        }
        Ok(())
    }

    /// Path distance at which a neighbour's weight drops to `min_effect`.
    pub fn window(&self) -> f64 {
        (-self.min_effect.ln() * 2.0 * self.sigma * self.sigma).sqrt()
    }

    #[inline]
    fn weight(&self, d: f64) -> f64 {
        (-(d * d) / (2.0 * self.sigma * self.sigma)).exp()
    }
}

/// Smooth an unbranched point sequence.
///
/// The first and last points, and points without neighbours in the window,
/// are returned unchanged.
pub fn gaussian_smooth_points(
    points: &[Point3],
    cfg: &SmoothingConfig,
) -> Result<Vec<Point3>, SkeletonError> {
    cfg.validate()?;
    let opts = NearbyOpts {
        include_point: false,
        metric: cfg.metric,
    };
    let nearby = find_nearby_points(points, cfg.window(), &opts);
    let last = points.len().saturating_sub(1);

    let smoothed = points
        .iter()
        .zip(&nearby)
        .enumerate()
        .map(|(i, (&pt, near))| {
            if i == 0 || i == last || near.is_empty() {
                return pt;
            }
            let mut acc = pt;
            let mut total = 1.0;
            for &q in near {
                let w = cfg.weight(distance(q, pt));
                for axis in 0..3 {
                    acc[axis] += q[axis] * w;
                }
                total += w;
            }
            let mut out = acc.map(|c| c / total);
            for axis in &cfg.fix_axes {
                out[axis.index()] = pt[axis.index()];
            }
            out
        })
        .collect();
    Ok(smoothed)
}

/// Smooth every neurite of `skeleton`, returning the new coordinate map.
///
/// Segments come from [`unique_neurites`] rooted at the skeleton's root.
/// Nodes outside every segment keep their position. The skeleton itself is
/// not modified; pair the result with [`Skeleton::with_coordinates`] to get
/// a smoothed copy.
pub fn gaussian_smooth_neuron<P: NodeLike>(
    skeleton: &Skeleton<P>,
    cfg: &SmoothingConfig,
) -> Result<Coordinates<P>, SkeletonError> {
    cfg.validate()?;
    let mut coords = skeleton.coordinates().clone();
    let segments = unique_neurites(skeleton, None)?;
    for segment in &segments {
        let points = skeleton.coordinates().gather(segment)?;
        let smoothed = gaussian_smooth_points(&points, cfg)?;
        for (&node, position) in segment.iter().zip(smoothed) {
            *coords.try_restrict_mut(node)? = position;
        }
    }
    log::debug!(
        "gaussian_smooth_neuron: sigma={} window={} over {} segment(s)",
        cfg.sigma,
        cfg.window(),
        segments.len()
    );
    Ok(coords)
}

impl<P: NodeLike> Skeleton<P> {
    /// Smoothed copy of this skeleton; see [`gaussian_smooth_neuron`].
    pub fn smoothed(&self, cfg: &SmoothingConfig) -> Result<Self, SkeletonError> {
        Ok(self.with_coordinates(&gaussian_smooth_neuron(self, cfg)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::arbor::Arbor;

    fn approx_pt(a: Point3, b: Point3) -> bool {
        (0..3).all(|i| (a[i] - b[i]).abs() < 1e-9)
    }

    #[test]
    fn defaults() {
        let cfg = SmoothingConfig::default();
        assert_eq!(cfg.sigma, 300.0);
        assert_eq!(cfg.min_effect, 1e-6);
        assert!(cfg.fix_axes.is_empty());
        assert_eq!(cfg.metric, WindowMetric::SquaredRadius);
        cfg.validate().unwrap();
        // sqrt(-ln(1e-6) * 2 * 300²) ≈ 1576.3
        assert!((cfg.window() - 1576.3).abs() < 0.1);
    }

    #[test]
    fn invalid_parameters() {
        let bad_sigma = SmoothingConfig {
            sigma: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            bad_sigma.validate(),
            Err(SkeletonError::InvalidParameter(_))
        ));
        let bad_effect = SmoothingConfig {
            min_effect: 1.0,
            ..Default::default()
        };
        assert!(gaussian_smooth_points(&[[0.0; 3]], &bad_effect).is_err());
    }

    #[test]
    fn colinear_evenly_spaced_is_fixed() {
        let pts: Vec<Point3> = (0..9).map(|i| [i as f64, 0.0, 0.0]).collect();
        let cfg = SmoothingConfig {
            sigma: 0.25,
            ..Default::default()
        };
        let out = gaussian_smooth_points(&pts, &cfg).unwrap();
        for (a, b) in out.iter().zip(&pts) {
            assert!(approx_pt(*a, *b), "{a:?} != {b:?}");
        }
    }

    #[test]
    fn kink_is_pulled_in_and_endpoints_stay() {
        let pts = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 0.0, 0.0]];
        let cfg = SmoothingConfig {
            sigma: 1.0,
            ..Default::default()
        };
        let out = gaussian_smooth_points(&pts, &cfg).unwrap();
        assert_eq!(out[0], pts[0]);
        assert_eq!(out[2], pts[2]);
        assert!(out[1][1] < 1.0 && out[1][1] > 0.0);
        assert!((out[1][0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fixed_axes_keep_original_values() {
        let pts = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 0.0, 0.0]];
        let cfg = SmoothingConfig {
            sigma: 1.0,
            fix_axes: vec![Axis::Z],
            ..Default::default()
        };
        let out = gaussian_smooth_points(&pts, &cfg).unwrap();
        assert_eq!(out[1][2], 1.0);
        assert!(out[1][1] < 1.0);
    }

    #[test]
    fn short_sequences_are_unchanged() {
        let cfg = SmoothingConfig::default();
        assert!(gaussian_smooth_points(&[], &cfg).unwrap().is_empty());
        let two = [[0.0; 3], [5.0, 5.0, 5.0]];
        assert_eq!(gaussian_smooth_points(&two, &cfg).unwrap(), two.to_vec());
    }

    #[test]
    fn neuron_smoothing_keeps_landmarks_and_input() {
        // 1 → 2 → 3 → {4, 5} with a kink at 2
        let s = Skeleton::try_from_parts(
            [
                (1u32, [0.0, 0.0, 0.0]),
                (2, [1.0, 1.0, 0.0]),
                (3, [2.0, 0.0, 0.0]),
                (4, [3.0, 0.0, 0.0]),
                (5, [2.0, -1.0, 0.0]),
            ],
            [(2, 1), (3, 2), (4, 3), (5, 3)],
        )
        .unwrap();
        let cfg = SmoothingConfig {
            sigma: 1.0,
            ..Default::default()
        };
        let coords = gaussian_smooth_neuron(&s, &cfg).unwrap();
        for n in [1, 3, 4, 5] {
            assert_eq!(coords.get(n), s.coordinates().get(n));
        }
        let moved = coords.get(2).unwrap();
        assert!(moved[1] < 1.0);
        assert_eq!(s.position(2).unwrap(), [1.0, 1.0, 0.0]);

        let smoothed = s.smoothed(&cfg).unwrap();
        assert_eq!(smoothed.position(2).unwrap(), moved);
        assert_eq!(smoothed.edge_count(), s.edge_count());
    }
}
