use tracing::{debug, trace, warn};

use crate::error::{OperationError, Result};
use crate::geometry::{Coord, Polygon};
use crate::math::distance_2d::point_dist_sq;
use crate::math::polygon_2d::point_in_ring;
use crate::math::Point2;

use super::arrangement::{build_arrangement, ring_edges};
use super::classify::interior_point;
use super::faces::{extract_faces, Face};
use super::select::BooleanOp;

/// Tuning knobs for [`BooleanOperation`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BooleanOptions {
    /// Faces with a smaller absolute planar area are dropped as slivers.
    pub min_face_area: f64,
    /// Vertices of B within this planar distance of a vertex of A are moved onto it.
    pub snap_distance: f64,
    /// Step bound for one face walk; `None` means `2 * sub_edges + 1`.
    pub max_walk_steps: Option<usize>,
}

impl Default for BooleanOptions {
    fn default() -> Self {
        Self {
            min_face_area: 0.0001,
            snap_distance: 1e-8,
            max_walk_steps: None,
        }
    }
}

impl BooleanOptions {
    #[must_use]
    pub fn with_min_face_area(mut self, min_face_area: f64) -> Self {
        self.min_face_area = min_face_area;
        self
    }

    #[must_use]
    pub fn with_snap_distance(mut self, snap_distance: f64) -> Self {
        self.snap_distance = snap_distance;
        self
    }

    #[must_use]
    pub fn with_max_walk_steps(mut self, max_walk_steps: usize) -> Self {
        self.max_walk_steps = Some(max_walk_steps);
        self
    }
}

/// Boolean combination of two simple polygons.
///
/// The result is the list of arrangement faces whose interior matches the
/// operation, each as its own polygon. Faces are never merged, so a union
/// of two overlapping polygons yields the pieces A − B, A ∩ B and B − A.
#[derive(Debug, Clone)]
pub struct BooleanOperation<'a> {
    polygon_a: &'a Polygon,
    polygon_b: &'a Polygon,
    op: BooleanOp,
    options: BooleanOptions,
}

impl<'a> BooleanOperation<'a> {
    /// Creates a new boolean operation with default options.
    #[must_use]
    pub fn new(polygon_a: &'a Polygon, polygon_b: &'a Polygon, op: BooleanOp) -> Self {
        Self {
            polygon_a,
            polygon_b,
            op,
            options: BooleanOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: BooleanOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if either polygon has fewer
    /// than 3 vertices, or `OperationError::FaceExtraction` if a face walk
    /// exceeds its step bound.
    pub fn execute(&self) -> Result<Vec<Polygon>> {
        if !self.polygon_a.is_valid() || !self.polygon_b.is_valid() {
            return Err(OperationError::InvalidInput(format!(
                "boolean {} needs two polygons with at least 3 vertices, got {} and {}",
                self.op,
                self.polygon_a.size(),
                self.polygon_b.size()
            ))
            .into());
        }

        let ring_a = self.polygon_a.to_points();
        let ring_b = snap_vertices(
            &self.polygon_b.to_points(),
            &ring_a,
            self.options.snap_distance,
        );

        let mut edges = ring_edges(&ring_a);
        edges.extend(ring_edges(&ring_b));
        let sub_edges = build_arrangement(&edges);
        debug!(
            op = %self.op,
            edges = edges.len(),
            sub_edges = sub_edges.len(),
            "built arrangement"
        );

        let max_steps = self
            .options
            .max_walk_steps
            .unwrap_or(2 * sub_edges.len() + 1);
        let faces = extract_faces(&sub_edges, max_steps)?;
        debug!(faces = faces.len(), "extracted faces");

        let mut result = Vec::new();
        for (index, face) in faces.into_iter().enumerate() {
            let area = face.area();
            if area < self.options.min_face_area {
                trace!(index, area, "dropping sliver face");
                continue;
            }
            let Some(sample) = interior_point(&face.vertices) else {
                warn!(index, area, "face has no interior sample point, dropping it");
                continue;
            };
            let in_a = point_in_ring(&sample, &ring_a);
            let in_b = point_in_ring(&sample, &ring_b);
            let keep = self.op.keeps(in_a, in_b);
            trace!(index, area, in_a, in_b, keep, "classified face");
            if keep {
                result.push(face_to_polygon(face)?);
            }
        }
        debug!(op = %self.op, kept = result.len(), "boolean operation done");
        Ok(result)
    }
}

/// Combines `a` and `b` with default options.
///
/// # Errors
///
/// See [`BooleanOperation::execute`].
pub fn boolean_op(a: &Polygon, b: &Polygon, op: BooleanOp) -> Result<Vec<Polygon>> {
    BooleanOperation::new(a, b, op).execute()
}

/// Replaces each point of `ring` lying within `distance` of an anchor with
/// that anchor.
fn snap_vertices(ring: &[Point2], anchors: &[Point2], distance: f64) -> Vec<Point2> {
    let limit = distance * distance;
    ring.iter()
        .map(|p| {
            anchors
                .iter()
                .find(|a| point_dist_sq(p, a) <= limit)
                .copied()
                .unwrap_or(*p)
        })
        .collect()
}

fn face_to_polygon(face: Face) -> Result<Polygon> {
    Polygon::from_coords(face.vertices.iter().map(Coord::from_point).collect())
}
