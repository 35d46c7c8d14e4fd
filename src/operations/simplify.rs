//! Polyline vertex reduction used by [`Polygon::simplify`](crate::Polygon::simplify).
//!
//! Both passes work on squared tolerances in the planar `(lng, lat)` view and
//! always keep the first and last point.

use crate::math::distance_2d::{point_dist_sq, point_to_segment_dist_sq};
use crate::math::Point2;

/// Drops points closer than the tolerance to the previously kept point.
#[must_use]
pub fn radial_distance(points: &[Point2], sq_tolerance: f64) -> Vec<Point2> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };
    let mut kept = vec![first];
    let mut prev = first;
    for &point in rest {
        if point_dist_sq(&point, &prev) > sq_tolerance {
            kept.push(point);
            prev = point;
        }
    }
    if let Some(&last) = rest.last() {
        if last != prev {
            kept.push(last);
        }
    }
    kept
}

/// Ramer–Douglas–Peucker with an explicit stack instead of recursion.
#[must_use]
pub fn douglas_peucker(points: &[Point2], sq_tolerance: f64) -> Vec<Point2> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }
    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack = vec![(0, n - 1)];
    while let Some((first, last)) = stack.pop() {
        let mut max_sq = 0.0;
        let mut index = first;
        for i in first + 1..last {
            let sq = point_to_segment_dist_sq(&points[i], &points[first], &points[last]);
            if sq > max_sq {
                index = i;
                max_sq = sq;
            }
        }
        if max_sq > sq_tolerance {
            keep[index] = true;
            stack.push((first, index));
            stack.push((index, last));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(*p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn radial_drops_close_points() {
        let pts = [p(0.0, 0.0), p(0.1, 0.0), p(1.0, 0.0), p(1.05, 0.0), p(2.0, 0.0)];
        let out = radial_distance(&pts, 0.25);
        assert_eq!(out, vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)]);
    }

    #[test]
    fn radial_keeps_last_point() {
        let pts = [p(0.0, 0.0), p(1.0, 0.0), p(1.1, 0.0)];
        let out = radial_distance(&pts, 0.25);
        assert_eq!(out, vec![p(0.0, 0.0), p(1.0, 0.0), p(1.1, 0.0)]);
        assert!(radial_distance(&[], 1.0).is_empty());
    }

    #[test]
    fn dp_removes_near_line_points() {
        let pts = [p(0.0, 0.0), p(1.0, 0.1), p(2.0, 0.0), p(3.0, 2.0), p(4.0, 0.0)];
        let out = douglas_peucker(&pts, 0.25);
        assert_eq!(out, vec![p(0.0, 0.0), p(2.0, 0.0), p(3.0, 2.0), p(4.0, 0.0)]);
    }

    #[test]
    fn dp_short_input_unchanged() {
        let pts = [p(0.0, 0.0), p(1.0, 1.0)];
        assert_eq!(douglas_peucker(&pts, 1.0), pts.to_vec());
    }
}
