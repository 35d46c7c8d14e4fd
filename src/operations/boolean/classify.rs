use std::f64::consts::PI;

use crate::math::polygon_2d::bounds_2d;
use crate::math::Point2;

/// Number of scanline steps across the face height.
const SCAN_STEPS: f64 = 13.0;

/// Finds a point strictly inside `ring`.
///
/// Scans horizontal lines from `ymin + h/π` upwards in steps of `h/13` and
/// returns the midpoint between the two leftmost distinct boundary
/// crossings of the first line that has them. Returns `None` for rings
/// without height or when no scanline yields such a pair.
#[must_use]
pub fn interior_point(ring: &[Point2]) -> Option<Point2> {
    let (min, max) = bounds_2d(ring)?;
    let height = max.y - min.y;
    if ring.len() < 3 || height <= 0.0 {
        return None;
    }

    let step = height / SCAN_STEPS;
    let mut y = min.y + height / PI;
    while y <= max.y {
        let mut xs = scanline_crossings(ring, y);
        xs.sort_by(f64::total_cmp);
        if let &[x0, x1, ..] = xs.as_slice() {
            if x0 < x1 {
                return Some(Point2::new((x0 + x1) * 0.5, y));
            }
        }
        y += step;
    }
    None
}

/// `x` of every edge crossing the horizontal line at `y`, half-open in `y`
/// so a vertex on the line is counted once.
fn scanline_crossings(ring: &[Point2], y: f64) -> Vec<f64> {
    let n = ring.len();
    let mut xs = Vec::new();
    for i in 0..n {
        let p = ring[i];
        let q = ring[(i + 1) % n];
        if (p.y > y) != (q.y > y) {
            xs.push(p.x + (y - p.y) * (q.x - p.x) / (q.y - p.y));
        }
    }
    xs
}
