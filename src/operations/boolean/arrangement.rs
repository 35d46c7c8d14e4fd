use std::cmp::Ordering;

use crate::math::intersect_2d::{classify_point, line_line_relation, LineRelation, PointLocation};
use crate::math::{round_decimals, Point2, INTERSECTION_DECIMALS};

/// A directed segment `origin → destination`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub origin: Point2,
    pub destination: Point2,
}

impl Edge {
    #[must_use]
    pub fn new(origin: Point2, destination: Point2) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// The same segment traversed the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.destination, self.origin)
    }

    /// `true` when both edges cover the same segment, in either direction.
    #[must_use]
    pub fn same_segment(&self, other: &Edge) -> bool {
        self == other || *self == other.reversed()
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.origin, &self.destination)
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.origin == self.destination
    }
}

/// Edges between consecutive ring vertices, closing edge included.
/// Zero-length edges are skipped.
#[must_use]
pub fn ring_edges(ring: &[Point2]) -> Vec<Edge> {
    let n = ring.len();
    (0..n)
        .map(|i| Edge::new(ring[i], ring[(i + 1) % n]))
        .filter(|e| !e.is_degenerate())
        .collect()
}

/// A point on an edge with its parameter `t` (0 = origin, 1 = destination).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitPoint {
    pub point: Point2,
    pub t: f64,
}

/// Points where `other` meets `edge`, parametrised along `edge`.
///
/// Endpoints of `other` that lie on `edge` are reported exactly, which also
/// covers shared vertices and collinear overlaps. Otherwise a proper crossing
/// yields one point, rounded to [`INTERSECTION_DECIMALS`] decimals.
#[must_use]
pub fn edge_intersections(edge: &Edge, other: &Edge) -> Vec<SplitPoint> {
    let relation = line_line_relation(
        &edge.origin,
        &edge.destination,
        &other.origin,
        &other.destination,
    );
    if relation == LineRelation::Parallel {
        return Vec::new();
    }

    let mut found = Vec::new();
    for endpoint in [other.origin, other.destination] {
        let t = match classify_point(&endpoint, &edge.origin, &edge.destination) {
            PointLocation::Origin => 0.0,
            PointLocation::Destination => 1.0,
            PointLocation::Between(t) => t,
            _ => continue,
        };
        found.push(SplitPoint { point: endpoint, t });
    }
    if !found.is_empty() {
        return found;
    }

    let LineRelation::Crossing { t, u } = relation else {
        return found;
    };
    if t <= 0.0 || t >= 1.0 || !(0.0..=1.0).contains(&u) {
        return found;
    }
    if let Some(point) = crossing_point(edge, other) {
        let d = edge.destination - edge.origin;
        let t = (point - edge.origin).dot(&d) / d.norm_squared();
        found.push(SplitPoint { point, t });
    }
    found
}

/// Intersection point of two crossing segments, evaluated on a canonical
/// ordering of the pair so that `(a, b)` and `(b, a)` give the same bits.
fn crossing_point(a: &Edge, b: &Edge) -> Option<Point2> {
    let mut first = canonical(a);
    let mut second = canonical(b);
    if cmp_points(&second.0, &first.0).then_with(|| cmp_points(&second.1, &first.1))
        == Ordering::Less
    {
        std::mem::swap(&mut first, &mut second);
    }
    match line_line_relation(&first.0, &first.1, &second.0, &second.1) {
        LineRelation::Crossing { t, .. } => {
            let p = first.0 + (first.1 - first.0) * t;
            Some(Point2::new(
                round_decimals(p.x, INTERSECTION_DECIMALS),
                round_decimals(p.y, INTERSECTION_DECIMALS),
            ))
        }
        _ => None,
    }
}

fn canonical(edge: &Edge) -> (Point2, Point2) {
    if cmp_points(&edge.destination, &edge.origin) == Ordering::Less {
        (edge.destination, edge.origin)
    } else {
        (edge.origin, edge.destination)
    }
}

fn cmp_points(a: &Point2, b: &Point2) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Splits every edge at its intersections with all other edges.
///
/// The result holds no duplicate segments (an edge equals its reverse) and
/// no two sub-edges cross in their interiors.
#[must_use]
pub fn build_arrangement(edges: &[Edge]) -> Vec<Edge> {
    let mut sub_edges: Vec<Edge> = Vec::new();
    for (i, edge) in edges.iter().enumerate() {
        let mut splits = vec![
            SplitPoint {
                point: edge.origin,
                t: 0.0,
            },
            SplitPoint {
                point: edge.destination,
                t: 1.0,
            },
        ];
        for (j, other) in edges.iter().enumerate() {
            if i == j {
                continue;
            }
            for split in edge_intersections(edge, other) {
                if !splits.iter().any(|s| s.point == split.point) {
                    splits.push(split);
                }
            }
        }
        splits.sort_by(|a, b| a.t.total_cmp(&b.t));

        for pair in splits.windows(2) {
            let piece = Edge::new(pair[0].point, pair[1].point);
            if !piece.is_degenerate() && !sub_edges.iter().any(|e| e.same_segment(&piece)) {
                sub_edges.push(piece);
            }
        }
    }
    sub_edges
}
