pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type. `x` carries longitude, `y` carries latitude.
pub type Point2 = nalgebra::Point2<f64>;

/// Perpendicular distance below which a point counts as lying on an edge.
pub const ON_EDGE_TOLERANCE: f64 = 1e-9;

/// Turning angles (degrees) below this are treated as a full turn.
pub const ANGLE_TOLERANCE: f64 = 1e-12;

/// Decimal places kept for computed intersection coordinates.
pub const INTERSECTION_DECIMALS: i32 = 9;

/// Rounds `value` to `decimals` decimal places.
#[must_use]
pub fn round_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
