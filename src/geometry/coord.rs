use std::fmt;
use std::str::FromStr;

use approx::AbsDiffEq;

use crate::error::{FormatError, GeoError, Result};
use crate::math::{round_decimals, Point2};

/// Earth radius in kilometres used by the haversine distance.
pub const HAVERSINE_RADIUS_KM: f64 = 6372.8;

/// Earth radius in metres used when projecting a destination point.
pub const PROJECTION_RADIUS_M: f64 = 6_372_797.6;

/// Per-axis tolerance in degrees (about a millimetre) for coordinate equality.
pub const COORD_EPSILON: f64 = 1e-8;

/// A geodetic point in degrees.
///
/// Plain value type. `PartialEq` is exact; [`Coord::equals`] (and the
/// [`AbsDiffEq`] impl) compare within [`COORD_EPSILON`] on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coord {
    /// Creates a coordinate from latitude and longitude in degrees.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parses latitude and longitude text, accepting `,` as decimal separator.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidNumber` if either value is not a finite number.
    pub fn from_strs(latitude: &str, longitude: &str) -> Result<Self> {
        Ok(Self::new(parse_number(latitude)?, parse_number(longitude)?))
    }

    /// Planar view of this coordinate: `x` = longitude, `y` = latitude.
    #[must_use]
    pub fn to_point(&self) -> Point2 {
        Point2::new(self.longitude, self.latitude)
    }

    /// Inverse of [`Coord::to_point`].
    #[must_use]
    pub fn from_point(point: &Point2) -> Self {
        Self::new(point.y, point.x)
    }

    /// Rounds both axes to `precision` decimals in place.
    ///
    /// 6 decimals is roughly 0.1 m, 5 about 1 m, 4 about 10 m.
    pub fn round(&mut self, precision: i32) {
        self.latitude = round_decimals(self.latitude, precision);
        self.longitude = round_decimals(self.longitude, precision);
    }

    /// Great-circle distance in metres (haversine).
    #[must_use]
    pub fn distance(&self, other: &Coord) -> f64 {
        haversine(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// Planar distance in degrees, without any earth model.
    #[must_use]
    pub fn simple_distance(&self, other: &Coord) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlng = self.longitude - other.longitude;
        (dlat * dlat + dlng * dlng).sqrt()
    }

    /// Initial bearing from `self` towards `other` in degrees within `[0, 360)`.
    ///
    /// 0 is north, 90 east, 180 south, 270 west.
    #[must_use]
    pub fn bearing(&self, other: &Coord) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let y = dlon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
        let degrees = y.atan2(x).to_degrees();
        if degrees < 0.0 {
            degrees + 360.0
        } else {
            degrees
        }
    }

    /// Moves this coordinate `distance` metres along `bearing` degrees.
    ///
    /// Returns `self` for chaining.
    pub fn move_in_place(&mut self, distance: f64, bearing: f64) -> &mut Self {
        let bearing = bearing.to_radians();
        let angular = distance / PROJECTION_RADIUS_M;
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();

        let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
        let lon2 = lon1
            + (bearing.sin() * angular.sin() * lat1.cos())
                .atan2(angular.cos() - lat1.sin() * lat2.sin());

        self.latitude = lat2.to_degrees();
        self.longitude = lon2.to_degrees();
        self
    }

    /// Returns a copy moved `distance` metres along `bearing` degrees.
    #[must_use]
    pub fn moved_clone(&self, distance: f64, bearing: f64) -> Coord {
        let mut moved = *self;
        moved.move_in_place(distance, bearing);
        moved
    }

    /// Approximate equality within [`COORD_EPSILON`] on each axis.
    #[must_use]
    pub fn equals(&self, other: &Coord) -> bool {
        self.abs_diff_eq(other, COORD_EPSILON)
    }

    /// WKT ordering: `"lng lat"` with 6 decimals.
    #[must_use]
    pub fn to_wkt_string(&self) -> String {
        format!("{:.6} {:.6}", self.longitude, self.latitude)
    }
}

/// Haversine distance in metres between two latitude/longitude pairs.
#[must_use]
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();

    let a = (dlat / 2.0).sin().powi(2) + (dlon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    1000.0 * HAVERSINE_RADIUS_KM * c
}

impl AbsDiffEq for Coord {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        COORD_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.latitude, &other.latitude, epsilon)
            && f64::abs_diff_eq(&self.longitude, &other.longitude, epsilon)
    }
}

/// `"lat,lng"` with 6 decimals.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lng"`.
impl FromStr for Coord {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| FormatError::InvalidCoordinate(s.to_owned()))?;
        Self::from_strs(lat, lng)
    }
}

/// Parses a finite number, accepting `,` as decimal separator.
pub(crate) fn parse_number(text: &str) -> Result<f64> {
    let normalized = text.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(FormatError::InvalidNumber(text.to_owned()).into()),
    }
}
