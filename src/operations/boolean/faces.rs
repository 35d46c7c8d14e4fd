use tracing::trace;

use crate::error::{OperationError, Result};
use crate::math::intersect_2d::turning_angle;
use crate::math::polygon_2d::{point_strictly_inside_ring, signed_area_2d};
use crate::math::Point2;

use super::arrangement::Edge;

/// Which candidate to follow at a vertex during a face walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRule {
    /// Smallest clockwise turn from the reversed incoming edge (leftmost exit).
    Min,
    /// Largest clockwise turn from the reversed incoming edge (rightmost exit).
    Max,
}

impl TurnRule {
    fn prefers(self, angle: f64, best: f64) -> bool {
        match self {
            TurnRule::Min => angle < best,
            TurnRule::Max => angle > best,
        }
    }
}

/// A closed loop of arrangement vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub vertices: Vec<Point2>,
}

impl Face {
    /// Absolute planar area.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.vertices).abs()
    }

    /// Same vertex count and every vertex of `self` present in `other`.
    #[must_use]
    pub fn same_vertices(&self, other: &Face) -> bool {
        self.vertices.len() == other.vertices.len()
            && self.vertices.iter().all(|v| other.vertices.contains(v))
    }
}

/// A closed walk and whether it crossed some sub-edge in both directions.
struct Walk {
    face: Face,
    doubles_back: bool,
}

/// Enumerates the faces of an arrangement.
///
/// Every sub-edge starts one walk per [`TurnRule`], unless an earlier walk
/// with the same rule already traversed it in its stored direction. A walk
/// ends when it re-enters its starting directed edge. Faces are dropped when
/// they have fewer than 3 vertices, run along a sub-edge both ways (around a
/// dangling edge), enclose the midpoint of any sub-edge, or repeat an earlier
/// face's vertex set. A loop pinched at a single vertex is kept.
///
/// # Errors
///
/// Returns `OperationError::FaceExtraction` if a walk takes more than
/// `max_steps` steps without closing.
pub fn extract_faces(edges: &[Edge], max_steps: usize) -> Result<Vec<Face>> {
    let midpoints: Vec<Point2> = edges.iter().map(Edge::midpoint).collect();
    let mut faces: Vec<Face> = Vec::new();

    for rule in [TurnRule::Min, TurnRule::Max] {
        let mut visited = vec![false; edges.len()];
        for start in 0..edges.len() {
            if visited[start] {
                continue;
            }
            let Walk { face, doubles_back } =
                walk_face(edges, start, rule, max_steps, &mut visited)?;

            if face.vertices.len() < 3 || doubles_back {
                trace!(start, ?rule, len = face.vertices.len(), "walk is not a face");
                continue;
            }
            if midpoints
                .iter()
                .any(|m| point_strictly_inside_ring(m, &face.vertices))
            {
                trace!(start, ?rule, "face encloses a sub-edge");
                continue;
            }
            if faces.iter().any(|f| f.same_vertices(&face)) {
                trace!(start, ?rule, "duplicate face");
                continue;
            }
            faces.push(face);
        }
    }
    Ok(faces)
}

/// Follows `rule` from `edges[start]` until the starting directed edge recurs.
fn walk_face(
    edges: &[Edge],
    start: usize,
    rule: TurnRule,
    max_steps: usize,
    visited: &mut [bool],
) -> Result<Walk> {
    let first = edges[start];
    let (mut org, mut dest, mut current) = (first.origin, first.destination, start);
    let mut vertices = Vec::new();
    // Per sub-edge: traversed forward, traversed backward.
    let mut traversed = vec![(false, false); edges.len()];
    let mut steps = 0;

    loop {
        vertices.push(org);
        if org == edges[current].origin {
            visited[current] = true;
            traversed[current].0 = true;
        } else {
            traversed[current].1 = true;
        }

        let mut best: Option<(usize, Point2, f64)> = None;
        for (j, candidate) in edges.iter().enumerate() {
            if j == current {
                continue;
            }
            let far = if candidate.origin == dest {
                candidate.destination
            } else if candidate.destination == dest {
                candidate.origin
            } else {
                continue;
            };
            let angle = turning_angle(&org, &dest, &far);
            let better = match best {
                Some((_, _, b)) => rule.prefers(angle, b),
                None => true,
            };
            if better {
                best = Some((j, far, angle));
            }
        }
        // A dead end turns back along the same edge.
        let (next, far) = best.map_or((current, org), |(j, far, _)| (j, far));

        org = dest;
        dest = far;
        current = next;
        steps += 1;

        if org == first.origin && dest == first.destination {
            return Ok(Walk {
                face: Face { vertices },
                doubles_back: traversed.iter().any(|&(fwd, back)| fwd && back),
            });
        }
        if steps > max_steps {
            return Err(OperationError::FaceExtraction {
                start_edge: start,
                steps,
            }
            .into());
        }
    }
}
