use super::{Point2, ANGLE_TOLERANCE, ON_EDGE_TOLERANCE};

/// Position of a point relative to a directed edge `origin → destination`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointLocation {
    /// Exactly the edge's origin.
    Origin,
    /// Exactly the edge's destination.
    Destination,
    /// On the edge's interior, at parameter `t` in `[0, 1]`.
    Between(f64),
    /// Left of the supporting line.
    Left,
    /// Right of the supporting line.
    Right,
    /// On the supporting line, before the origin.
    Behind,
    /// On the supporting line, past the destination.
    Beyond,
}

/// Classifies `point` against the directed edge `origin → destination`.
///
/// Endpoint matches are exact. Otherwise the point is on the line when its
/// perpendicular distance is within [`ON_EDGE_TOLERANCE`].
#[must_use]
#[allow(clippy::float_cmp)]
pub fn classify_point(point: &Point2, origin: &Point2, destination: &Point2) -> PointLocation {
    if point == origin {
        return PointLocation::Origin;
    }
    if point == destination {
        return PointLocation::Destination;
    }
    let a = destination - origin;
    let b = point - origin;
    let len_sq = a.norm_squared();
    if len_sq == 0.0 {
        return PointLocation::Beyond;
    }
    let offset = a.perp(&b) / len_sq.sqrt();
    if offset > ON_EDGE_TOLERANCE {
        return PointLocation::Left;
    }
    if offset < -ON_EDGE_TOLERANCE {
        return PointLocation::Right;
    }
    let along = a.dot(&b);
    if along < 0.0 {
        return PointLocation::Behind;
    }
    if b.norm_squared() > len_sq {
        return PointLocation::Beyond;
    }
    PointLocation::Between(along / len_sq)
}

/// Relation between the infinite lines through two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineRelation {
    /// Zero determinant, distinct lines.
    Parallel,
    /// Zero determinant, same line.
    Collinear,
    /// Lines meet at `a0 + t * (a1 - a0)` = `b0 + u * (b1 - b0)`.
    Crossing { t: f64, u: f64 },
}

/// Solves the 2×2 system for the lines through `a0 → a1` and `b0 → b1`.
///
/// The zero tests are exact: a determinant of zero means parallel or
/// collinear, anything else yields parameters.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn line_line_relation(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> LineRelation {
    let da = a1 - a0;
    let db = b1 - b0;
    let w = a0 - b0;
    let denom = da.perp(&db);
    let nom_a = db.perp(&w);
    if denom == 0.0 {
        return if nom_a == 0.0 {
            LineRelation::Collinear
        } else {
            LineRelation::Parallel
        };
    }
    let nom_b = da.perp(&w);
    LineRelation::Crossing {
        t: nom_a / denom,
        u: nom_b / denom,
    }
}

/// Polar angle of the direction `from → to`, in degrees within `[0, 360)`.
#[must_use]
pub fn polar_angle(from: &Point2, to: &Point2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees().rem_euclid(360.0)
}

/// Turning angle at `destination` when arriving along `origin → destination`
/// and leaving towards `candidate`.
///
/// Measured clockwise from the reversed incoming direction, in degrees
/// within `(0, 360]`. Small values are sharp left turns, values near 360
/// are sharp right turns. Leaving back along the incoming edge is 360.
#[must_use]
pub fn turning_angle(origin: &Point2, destination: &Point2, candidate: &Point2) -> f64 {
    let back = polar_angle(destination, origin);
    let out = polar_angle(destination, candidate);
    let theta = (back - out).rem_euclid(360.0);
    if theta < ANGLE_TOLERANCE {
        360.0
    } else {
        theta
    }
}
