//! Boolean algebra on simple polygons via a planar edge arrangement.
//!
//! Both rings are split at every mutual intersection, the faces of the
//! resulting arrangement are traced, and each face is kept or dropped by
//! testing an interior sample point against the two inputs.

mod arrangement;
mod classify;
mod engine;
mod faces;
mod select;

pub use arrangement::{build_arrangement, edge_intersections, ring_edges, Edge, SplitPoint};
pub use classify::interior_point;
pub use engine::{boolean_op, BooleanOperation, BooleanOptions};
pub use faces::{extract_faces, Face, TurnRule};
pub use select::BooleanOp;
