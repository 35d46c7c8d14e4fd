use super::intersect_2d::{classify_point, PointLocation};
use super::Point2;

/// Computes the signed area of a closed ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the area-weighted centroid of a closed ring.
///
/// Returns `None` when the absolute signed area is below `min_area`.
#[must_use]
pub fn centroid_2d(points: &[Point2], min_area: f64) -> Option<Point2> {
    let area = signed_area_2d(points);
    if area.abs() < min_area {
        return None;
    }
    let n = points.len();
    let (mut cx, mut cy) = (0.0, 0.0);
    for i in 0..n {
        let j = (i + 1) % n;
        let cross = points[i].x * points[j].y - points[j].x * points[i].y;
        cx += (points[i].x + points[j].x) * cross;
        cy += (points[i].y + points[j].y) * cross;
    }
    Some(Point2::new(cx / (6.0 * area), cy / (6.0 * area)))
}

/// Returns the `(min, max)` corners of the axis-aligned bounding box.
#[must_use]
pub fn bounds_2d(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

/// Even-odd containment test for a closed ring of either winding.
///
/// An edge toggles inclusion when the point's `x` lies between the edge's
/// `x` bounds (one side inclusive) and the point's `y` is at or below the
/// edge's interpolated `y` at that `x`. Vertical edges never toggle.
#[must_use]
pub fn point_in_ring(point: &Point2, ring: &[Point2]) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut prev = ring[ring.len() - 1];
    for &cur in ring {
        if (cur.x >= point.x) != (prev.x >= point.x)
            && point.y <= (prev.y - cur.y) * (point.x - cur.x) / (prev.x - cur.x) + cur.y
        {
            inside = !inside;
        }
        prev = cur;
    }
    inside
}

/// Like [`point_in_ring`], but a point on the ring's boundary is outside.
#[must_use]
pub fn point_strictly_inside_ring(point: &Point2, ring: &[Point2]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        let location = classify_point(point, &ring[i], &ring[(i + 1) % n]);
        if matches!(
            location,
            PointLocation::Origin | PointLocation::Destination | PointLocation::Between(_)
        ) {
            return false;
        }
    }
    point_in_ring(point, ring)
}
