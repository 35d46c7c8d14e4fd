pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeoError, Result};
pub use geometry::{Coord, GeometryRef, LatLng, Polygon};
pub use operations::boolean::{boolean_op, BooleanOp, BooleanOperation, BooleanOptions};
