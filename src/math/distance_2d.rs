use super::Point2;

/// Squared planar distance between two points.
#[must_use]
pub fn point_dist_sq(a: &Point2, b: &Point2) -> f64 {
    (a - b).norm_squared()
}

/// Squared planar distance from `point` to the closest point of segment `a → b`.
///
/// A zero-length segment degrades to the distance to `a`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn point_to_segment_dist_sq(point: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq == 0.0 {
        return point_dist_sq(point, a);
    }
    let t = (point - a).dot(&ab) / len_sq;
    if t <= 0.0 {
        point_dist_sq(point, a)
    } else if t >= 1.0 {
        point_dist_sq(point, b)
    } else {
        point_dist_sq(point, &(a + ab * t))
    }
}
