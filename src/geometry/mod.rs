pub mod coord;
pub mod polygon;
pub mod text;

pub use coord::Coord;
pub use polygon::{GeometryRef, LatLng, Polygon};
