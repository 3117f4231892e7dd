//! Distance and midpoint metrics between positions.

use super::Point3;
use super::vector::{norm, sub};

/// Euclidean distance `sqrt(Σ (p0ᵢ − p1ᵢ)²)`.
#[inline]
pub fn distance(p0: Point3, p1: Point3) -> f64 {
    norm(sub(p0, p1))
}

/// Manhattan (L1) distance `Σ |p0ᵢ − p1ᵢ|`.
///
/// This is the step size the path-distance neighbor search accumulates.
#[inline]
pub fn l1_distance(p0: Point3, p1: Point3) -> f64 {
    (p0[0] - p1[0]).abs() + (p0[1] - p1[1]).abs() + (p0[2] - p1[2]).abs()
}

/// Elementwise average of two positions.
#[inline]
pub fn midpoint(p0: Point3, p1: Point3) -> Point3 {
    [
        (p0[0] + p1[0]) / 2.0,
        (p0[1] + p1[1]) / 2.0,
        (p0[2] + p1[2]) / 2.0,
    ]
}

/// Sum of Euclidean distances between consecutive positions.
///
/// Returns 0 for fewer than two positions.
pub fn polyline_length(points: &[Point3]) -> f64 {
    points.windows(2).map(|w| distance(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn distance_is_euclidean() {
        assert!(approx(distance([0.0, 0.0, 0.0], [3.0, 4.0, 12.0]), 13.0));
        assert_eq!(distance([1.0, 1.0, 1.0], [1.0, 1.0, 1.0]), 0.0);
    }

    #[test]
    fn l1_sums_absolute_deltas() {
        assert!(approx(l1_distance([0.0, 0.0, 0.0], [3.0, -4.0, 1.0]), 8.0));
    }

    #[test]
    fn midpoint_averages() {
        assert_eq!(midpoint([0.0, 2.0, -4.0], [2.0, 4.0, 4.0]), [1.0, 3.0, 0.0]);
    }

    #[test]
    fn polyline_length_sums_steps() {
        let pts = [[0.0, 0.0, 0.0], [3.0, 4.0, 0.0], [3.0, 4.0, 10.0]];
        assert!(approx(polyline_length(&pts), 15.0));
        assert_eq!(polyline_length(&pts[..1]), 0.0);
        assert_eq!(polyline_length(&[]), 0.0);
    }
}
