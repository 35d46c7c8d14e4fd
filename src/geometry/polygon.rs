use std::str::FromStr;

use tracing::warn;

use crate::error::{ConstructionError, GeoError, GeometryError, Result};
use crate::math::polygon_2d::{centroid_2d, point_in_ring, signed_area_2d};
use crate::math::Point2;
use crate::operations::simplify::{douglas_peucker, radial_distance};

use super::coord::Coord;
use super::text;

/// Earth radius in metres used by the spherical ring area.
pub const AREA_RADIUS_M: f64 = 6_378_137.0;

/// Lower bound for the outer/inner circle radii, in metres.
pub const MIN_CIRCLE_RADIUS: f64 = 0.1;

/// Below this absolute planar area the centroid is undefined.
pub const DEGENERATE_AREA: f64 = 1e-15;

/// Polygons with fewer vertices are returned unchanged by [`Polygon::simplify`].
pub const SIMPLIFY_MIN_VERTICES: usize = 10;

/// Distance (metres) from the first vertex beyond which a point is "far away".
pub const FAR_AWAY_DISTANCE: f64 = 15_000.0;

/// A `{lat, lng}` record, one of the accepted polygon input shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Target of [`Polygon::distance`].
#[derive(Debug, Clone, Copy)]
pub enum GeometryRef<'a> {
    Coord(&'a Coord),
    Polygon(&'a Polygon),
}

impl<'a> From<&'a Coord> for GeometryRef<'a> {
    fn from(c: &'a Coord) -> Self {
        GeometryRef::Coord(c)
    }
}

impl<'a> From<&'a Polygon> for GeometryRef<'a> {
    fn from(p: &'a Polygon) -> Self {
        GeometryRef::Polygon(p)
    }
}

/// A simple polygon without holes, implicitly closed, of either winding.
///
/// Always holds at least 3 vertices. A trailing vertex equal to the first
/// (within [`Coord::equals`]) is stripped at construction, so the closing
/// edge is never stored twice.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Coord>", into = "Vec<Coord>")
)]
pub struct Polygon {
    vertices: Vec<Coord>,
}

impl Polygon {
    /// Creates a polygon from coordinates.
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError::TooFewPoints` if fewer than 3 coordinates are given.
    pub fn from_coords(vertices: Vec<Coord>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(ConstructionError::TooFewPoints {
                found: vertices.len(),
            }
            .into());
        }
        Ok(Self::with_vertices(vertices))
    }

    /// Creates a polygon from `{lat, lng}` records.
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError::TooFewPoints` if fewer than 3 records are given.
    pub fn from_lat_lngs(points: &[LatLng]) -> Result<Self> {
        Self::from_coords(points.iter().map(|p| Coord::new(p.lat, p.lng)).collect())
    }

    /// Creates a polygon from 2-element pairs.
    ///
    /// Pairs are read as `[lat, lng]`, unless the first pair looks like
    /// `[lng, lat]` (first component below 10, second above 30).
    ///
    /// # Errors
    ///
    /// Returns `ConstructionError::TooFewPoints` if fewer than 3 pairs are given.
    pub fn from_pairs(pairs: &[[f64; 2]]) -> Result<Self> {
        let lng_first = pairs
            .first()
            .is_some_and(|first| first[0] < 10.0 && first[1] > 30.0);
        let coords = pairs
            .iter()
            .map(|&[a, b]| {
                if lng_first {
                    Coord::new(b, a)
                } else {
                    Coord::new(a, b)
                }
            })
            .collect();
        Self::from_coords(coords)
    }

    /// Parses `"lat,lng|lat,lng|..."`.
    ///
    /// # Errors
    ///
    /// Returns a construction error for fewer than 3 points, or a format
    /// error for non-numeric values.
    pub fn from_poly_string(text: &str) -> Result<Self> {
        Self::from_coords(text::parse_poly_string(text)?)
    }

    /// Parses a WKT `POLYGON((lng lat, ...))`.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidWkt` for malformed text, or a construction
    /// error for fewer than 3 distinct points.
    pub fn from_wkt(text: &str) -> Result<Self> {
        Self::from_coords(text::parse_wkt(text)?)
    }

    /// Builds from a vertex list already known to hold at least 3 entries.
    fn with_vertices(mut vertices: Vec<Coord>) -> Self {
        while vertices.len() >= 4 && vertices[0].equals(&vertices[vertices.len() - 1]) {
            vertices.pop();
        }
        Self { vertices }
    }

    /// The vertices in stored order.
    #[must_use]
    pub fn vertices(&self) -> &[Coord] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// `true` when the polygon has more than 2 vertices.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.vertices.len() > 2
    }

    /// Planar view of the vertices (`x` = longitude, `y` = latitude).
    #[must_use]
    pub fn to_points(&self) -> Vec<Point2> {
        self.vertices.iter().map(Coord::to_point).collect()
    }

    /// The same vertices in opposite winding.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// `"lat,lng|"` per vertex with 6 decimals.
    #[must_use]
    pub fn poly_string(&self) -> String {
        text::format_poly_string(&self.vertices)
    }

    /// WKT `POLYGON((lng lat, ...))`, closed by repeating the first vertex.
    #[must_use]
    pub fn wkt_string(&self) -> String {
        text::format_wkt(&self.vertices)
    }

    /// The vertices as `{lat, lng}` records.
    #[must_use]
    pub fn lat_lngs(&self) -> Vec<LatLng> {
        self.vertices
            .iter()
            .map(|c| LatLng {
                lat: c.latitude,
                lng: c.longitude,
            })
            .collect()
    }

    /// Cheap pre-check: `true` when the first vertex is more than 15 km from `point`.
    #[must_use]
    pub fn far_away(&self, point: &Coord) -> bool {
        !self.is_valid() || self.vertices[0].distance(point) > FAR_AWAY_DISTANCE
    }

    /// Even-odd containment test, independent of winding.
    #[must_use]
    pub fn contains(&self, point: &Coord) -> bool {
        point_in_ring(&point.to_point(), &self.to_points())
    }

    /// Signed planar area in squared degrees. The sign encodes the winding.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.to_points())
    }

    /// Approximate area projected onto the sphere (Chamberlain–Duquette),
    /// in square metres. Positive for clockwise rings.
    #[must_use]
    pub fn ring_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut sum = 0.0;
        for i in 0..n {
            let p1 = &self.vertices[i];
            let p2 = &self.vertices[(i + 1) % n];
            let p3 = &self.vertices[(i + 2) % n];
            sum += (p3.longitude.to_radians() - p1.longitude.to_radians())
                * p2.latitude.to_radians().sin();
        }
        sum * AREA_RADIUS_M * AREA_RADIUS_M / 2.0
    }

    /// Absolute spherical area in square metres.
    #[must_use]
    pub fn area_square_meters(&self) -> f64 {
        self.ring_area().abs()
    }

    /// Area-weighted centroid.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` when the absolute planar area is
    /// below [`DEGENERATE_AREA`] (collinear or coincident vertices).
    pub fn try_center(&self) -> Result<Coord> {
        centroid_2d(&self.to_points(), DEGENERATE_AREA)
            .map(|p| Coord::from_point(&p))
            .ok_or_else(|| {
                GeometryError::Degenerate(format!(
                    "polygon area below {DEGENERATE_AREA}, no centroid"
                ))
                .into()
            })
    }

    /// Centroid, falling back to the first vertex for degenerate polygons.
    #[must_use]
    pub fn center(&self) -> Coord {
        self.try_center().unwrap_or(self.vertices[0])
    }

    /// Radius (metres) of a circle around [`Polygon::center`] enclosing all vertices.
    ///
    /// Approximate: the farthest vertex from the centroid, at least
    /// [`MIN_CIRCLE_RADIUS`].
    #[must_use]
    pub fn smallest_outer_circle_radius(&self) -> f64 {
        let center = self.center();
        self.vertices
            .iter()
            .map(|v| center.distance(v))
            .fold(MIN_CIRCLE_RADIUS, f64::max)
    }

    /// Radius (metres) of a circle around [`Polygon::center`] touching the nearest vertex.
    ///
    /// Approximate: the nearest vertex to the centroid, at least
    /// [`MIN_CIRCLE_RADIUS`].
    #[must_use]
    pub fn largest_inner_circle_radius(&self) -> f64 {
        let center = self.center();
        self.vertices
            .iter()
            .map(|v| center.distance(v))
            .fold(f64::INFINITY, f64::min)
            .max(MIN_CIRCLE_RADIUS)
    }

    /// Metres from `point` to the polygon: 0 when contained, otherwise the
    /// distance to the nearest vertex.
    #[must_use]
    pub fn distance_to_point(&self, point: &Coord) -> f64 {
        if self.contains(point) {
            return 0.0;
        }
        self.vertices
            .iter()
            .map(|v| point.distance(v))
            .fold(f64::INFINITY, f64::min)
    }

    /// Metres between the two outer circles, 0 when they overlap.
    #[must_use]
    pub fn distance_to_polygon(&self, other: &Polygon) -> f64 {
        let gap = self.center().distance(&other.center())
            - self.smallest_outer_circle_radius()
            - other.smallest_outer_circle_radius();
        gap.max(0.0)
    }

    /// Distance in metres to a coordinate or another polygon.
    #[must_use]
    pub fn distance<'a>(&self, target: impl Into<GeometryRef<'a>>) -> f64 {
        match target.into() {
            GeometryRef::Coord(c) => self.distance_to_point(c),
            GeometryRef::Polygon(p) => self.distance_to_polygon(p),
        }
    }

    /// Moves every vertex `meters` away from the centroid along the
    /// centroid→vertex bearing. Negative values shrink.
    #[must_use]
    pub fn expand(&self, meters: f64) -> Polygon {
        let center = self.center();
        let vertices = self
            .vertices
            .iter()
            .map(|v| v.moved_clone(meters, center.bearing(v)))
            .collect();
        Self::with_vertices(vertices)
    }

    /// Rigid translation of every vertex by `distance` metres along `bearing` degrees.
    #[must_use]
    pub fn moved_clone(&self, distance: f64, bearing: f64) -> Polygon {
        let vertices = self
            .vertices
            .iter()
            .map(|v| v.moved_clone(distance, bearing))
            .collect();
        Self::with_vertices(vertices)
    }

    /// Douglas–Peucker simplification with `tolerance` in degrees.
    ///
    /// When `highest_quality` is false a radial-distance pass runs first.
    /// Polygons below [`SIMPLIFY_MIN_VERTICES`] vertices, and results that no
    /// longer form a polygon, come back as an unmodified copy.
    #[must_use]
    pub fn simplify(&self, tolerance: f64, highest_quality: bool) -> Polygon {
        if self.vertices.len() < SIMPLIFY_MIN_VERTICES {
            return self.clone();
        }
        let sq_tolerance = tolerance * tolerance;
        let mut points = self.to_points();
        if !highest_quality {
            points = radial_distance(&points, sq_tolerance);
        }
        let points = douglas_peucker(&points, sq_tolerance);
        match Self::from_coords(points.iter().map(Coord::from_point).collect()) {
            Ok(simplified) => simplified,
            Err(err) => {
                warn!(%err, tolerance, "simplify produced no polygon, keeping original");
                self.clone()
            }
        }
    }
}

/// Equal when the 6-decimal `"lat,lng|..."` serialisations match.
///
/// Sensitive to vertex order and start point.
impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.poly_string() == other.poly_string()
    }
}

impl Eq for Polygon {}

/// Parses WKT when the text mentions `polygon`, else `"lat,lng|..."`.
impl FromStr for Polygon {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(ConstructionError::Unrecognized("empty polygon text".to_owned()).into());
        }
        if s.to_ascii_lowercase().contains("polygon") {
            Self::from_wkt(s)
        } else {
            Self::from_poly_string(s)
        }
    }
}

impl TryFrom<Vec<Coord>> for Polygon {
    type Error = GeoError;

    fn try_from(vertices: Vec<Coord>) -> Result<Self> {
        Self::from_coords(vertices)
    }
}

impl From<Polygon> for Vec<Coord> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const VOORTUIN: &str = "52.773351978321,6.180108127987|52.773389299363,6.1804309267635|\
        52.773571452384,6.180429585659|52.773564556135,6.1802386819716|\
        52.773654105861,6.1802271658714|52.773654790414,6.180183718435|\
        52.773770682493,6.1801657519843|52.773763253848,6.1800029462468|\
        52.773636561026,6.1800332595583|52.773547924003,6.1800450960751|";

    fn square() -> Polygon {
        Polygon::from_poly_string("1,1|2,1|2,2|1,2").unwrap()
    }

    #[test]
    fn construction_shapes_agree() {
        let p1 = Polygon::from_coords(vec![
            Coord::new(1.0, 1.0),
            Coord::new(2.0, 1.0),
            Coord::new(2.0, 2.0),
            Coord::new(1.0, 2.0),
        ])
        .unwrap();
        assert_eq!(p1, square());

        let p3 = Polygon::from_pairs(&[[1.0, 1.0], [2.0, 1.0], [2.0, 2.0], [1.0, 2.0]]).unwrap();
        assert_eq!(p3, p1);

        let p4 = Polygon::from_lat_lngs(&[
            LatLng { lat: 1.0, lng: 1.0 },
            LatLng { lat: 2.0, lng: 1.0 },
            LatLng { lat: 2.0, lng: 2.0 },
            LatLng { lat: 1.0, lng: 2.0 },
        ])
        .unwrap();
        assert_eq!(p4, p1);

        let p5: Polygon = "POLYGON((1 1, 1 2, 2 2, 2 1, 1 1))".parse().unwrap();
        assert_eq!(p5, p1);
    }

    #[test]
    fn pairs_detect_lng_lat_order() {
        let p = Polygon::from_pairs(&[[6.18, 52.77], [6.19, 52.77], [6.19, 52.78]]).unwrap();
        assert_abs_diff_eq!(p.vertices()[0], Coord::new(52.77, 6.18));
    }

    #[test]
    fn too_few_points() {
        assert!(matches!(
            Polygon::from_coords(vec![Coord::new(1.0, 1.0), Coord::new(2.0, 2.0)]),
            Err(GeoError::Construction(ConstructionError::TooFewPoints { found: 2 }))
        ));
        assert!(matches!(
            "   ".parse::<Polygon>(),
            Err(GeoError::Construction(ConstructionError::Unrecognized(_)))
        ));
    }

    #[test]
    fn closing_vertices_are_stripped() {
        let p = Polygon::from_poly_string("1,1|2,1|2,2|1,2|1,1|1,1").unwrap();
        assert_eq!(p.size(), 4);
        // A triangle keeps all three vertices even if the last equals the first.
        let t = Polygon::from_poly_string("1,1|2,1|1,1").unwrap();
        assert_eq!(t.size(), 3);
    }

    #[test]
    fn collinear_polygon_is_valid() {
        let p = Polygon::from_coords(vec![
            Coord::new(1.0, 1.0),
            Coord::new(2.0, 2.0),
            Coord::new(3.0, 3.0),
        ])
        .unwrap();
        assert!(p.is_valid());
    }

    #[test]
    fn to_string_formats() {
        assert_eq!(
            square().poly_string(),
            "1.000000,1.000000|2.000000,1.000000|2.000000,2.000000|1.000000,2.000000|"
        );
        assert_eq!(
            square().wkt_string(),
            "POLYGON((1.000000 1.000000,1.000000 2.000000,2.000000 2.000000,2.000000 1.000000,1.000000 1.000000))"
        );
    }

    #[test]
    fn poly_string_round_trip() {
        let p = Polygon::from_poly_string(VOORTUIN).unwrap();
        let again = Polygon::from_poly_string(&p.poly_string()).unwrap();
        assert_eq!(again, p);
    }

    #[test]
    fn rotation_is_not_equal() {
        let rotated = Polygon::from_poly_string("2,1|2,2|1,2|1,1").unwrap();
        assert_ne!(rotated, square());
    }

    #[test]
    fn signed_area_and_reverse() {
        let p = square();
        assert_abs_diff_eq!(p.signed_area(), 1.0);
        assert_abs_diff_eq!(p.reversed().signed_area(), -1.0);

        let v = Polygon::from_poly_string(VOORTUIN).unwrap();
        assert_abs_diff_eq!(v.signed_area().abs(), v.reversed().signed_area().abs());
    }

    #[test]
    fn center_of_square() {
        assert_abs_diff_eq!(square().center(), Coord::new(1.5, 1.5));
    }

    #[test]
    fn center_of_l_shape_and_garden() {
        let hf = Polygon::from_poly_string("1,1|1,3|3,3|3,2|5,2|5,1").unwrap();
        assert_abs_diff_eq!(
            hf.center(),
            Coord::new(2.666_666_666_666_666_5, 1.833_333_333_333_333_3),
            epsilon = 1e-6
        );
        let v = Polygon::from_poly_string(VOORTUIN).unwrap();
        assert_abs_diff_eq!(
            v.center(),
            Coord::new(52.773_533_141_930_18, 6.180_202_337_260_852_6),
            epsilon = 1e-6
        );
    }

    #[test]
    fn center_falls_back_to_first_vertex() {
        let p = Polygon::from_coords(vec![
            Coord::new(1.0, 1.0),
            Coord::new(2.0, 2.0),
            Coord::new(3.0, 3.0),
        ])
        .unwrap();
        assert!(matches!(
            p.try_center(),
            Err(GeoError::Geometry(GeometryError::Degenerate(_)))
        ));
        assert_eq!(p.center(), Coord::new(1.0, 1.0));
        assert_abs_diff_eq!(p.largest_inner_circle_radius(), MIN_CIRCLE_RADIUS);
    }

    #[test]
    fn convex_center_is_inside() {
        let p = Polygon::from_poly_string("52,6|52.001,6.0002|52.0013,6.001|52.0002,6.0014").unwrap();
        assert!(p.contains(&p.center()));
        assert!(p.reversed().contains(&p.reversed().center()));
    }

    #[test]
    fn outer_circle() {
        let v = Polygon::from_poly_string(VOORTUIN).unwrap();
        assert_abs_diff_eq!(v.smallest_outer_circle_radius(), 28.92, epsilon = 0.1);
    }

    #[test]
    fn inner_circle() {
        let p = Polygon::from_poly_string("52,6|52.001,6|52.001,6.001|52,6.001|").unwrap();
        assert_abs_diff_eq!(p.center(), Coord::new(52.0005, 6.0005), epsilon = 1e-3);
        assert_abs_diff_eq!(p.largest_inner_circle_radius(), 65.38, epsilon = 0.1);
    }

    #[test]
    fn expand() {
        let v = Polygon::from_poly_string(VOORTUIN).unwrap();
        assert_abs_diff_eq!(v.expand(1.0).smallest_outer_circle_radius(), 30.0, epsilon = 0.1);

        let small = Polygon::from_poly_string("1,1|1.00001,1|1.00001,1.00001|1,1.00001|").unwrap();
        assert_eq!(
            small.expand(1.0).poly_string(),
            "0.999994,0.999994|1.000016,0.999994|1.000016,1.000016|0.999994,1.000016|"
        );
    }

    #[test]
    fn contains_square_both_windings() {
        for text in ["1,1|2,1|2,2|1,2", "1,1|1,2|2,2|2,1"] {
            let hf = Polygon::from_poly_string(text).unwrap();
            assert!(hf.contains(&Coord::new(1.5, 1.5)), "{text}");
            assert!(!hf.contains(&Coord::new(2.5, 2.5)), "{text}");
            assert!(!hf.contains(&Coord::new(0.8, 1.5)), "{text}");
            assert!(!hf.contains(&Coord::new(2.8, 1.5)), "{text}");
            assert!(!hf.contains(&Coord::new(0.8, 0.999)), "{text}");
        }
    }

    #[test]
    fn contains_complex_both_windings() {
        //       g
        // 5   +--+
        // 4   | b| f
        // 3  c|  +--+
        // 2   |  a  | d
        // 1   +-----+
        // |        e
        // |---1--2--3--->
        for text in ["1,1|3,1|3,3|2,3|2,5|1,5|", "1,1|1,5|2,5|2,3|3,3|3,1|"] {
            let hf = Polygon::from_poly_string(text).unwrap();
            assert!(hf.contains(&Coord::new(2.0, 2.0)), "a {text}");
            assert!(hf.contains(&Coord::new(1.5, 4.0)), "b {text}");
            assert!(!hf.contains(&Coord::new(0.8, 3.0)), "c {text}");
            assert!(!hf.contains(&Coord::new(3.1, 2.0)), "d {text}");
            assert!(!hf.contains(&Coord::new(2.5, 0.99)), "e {text}");
            assert!(!hf.contains(&Coord::new(2.5, 4.0)), "f {text}");
            assert!(!hf.contains(&Coord::new(1.5, 6.0)), "g {text}");
        }
    }

    #[test]
    fn contains_concave() {
        let hf = Polygon::from_poly_string("1,2|4,7|11,4|8,0|6,1|7,3|5,4|3,1|").unwrap();
        let inside = [(2.0, 2.0), (3.0, 4.0), (7.01, 3.0), (6.9, 2.0), (8.0, 3.0), (3.1, 2.0)];
        let outside = [
            (5.0, 3.0),
            (6.5, 3.0),
            (10.5, 3.0),
            (0.8, 3.0),
            (2.5, 0.99),
            (2.5, 5.0),
            (1.5, 6.0),
            (9.0, 6.0),
        ];
        for (lat, lng) in inside {
            assert!(hf.contains(&Coord::new(lat, lng)), "({lat}, {lng})");
        }
        for (lat, lng) in outside {
            assert!(!hf.contains(&Coord::new(lat, lng)), "({lat}, {lng})");
        }
    }

    #[test]
    fn contains_real_world() {
        let v = Polygon::from_poly_string(VOORTUIN).unwrap();
        assert!(v.contains(&Coord::new(52.773_502, 6.180_314)));
        assert!(v.contains(&Coord::new(52.773_617, 6.180_163)));
        assert!(!v.contains(&Coord::new(52.773_596, 6.180_311)));

        let bos = Polygon::from_poly_string(
            "52.773295,6.179491|52.776129,6.186224|52.781629,6.180451|52.779042,6.173573|",
        )
        .unwrap();
        assert!(bos.contains(&Coord::new(52.777_413, 6.175_508)));
    }

    #[test]
    fn area_square_meters() {
        let v = Polygon::from_poly_string(VOORTUIN).unwrap();
        assert_abs_diff_eq!(v.area_square_meters(), 794.45, epsilon = 0.1);
        assert_abs_diff_eq!(v.ring_area(), -v.reversed().ring_area(), epsilon = 1e-6);
    }

    #[test]
    fn distance_to_coord() {
        let v = Polygon::from_poly_string(VOORTUIN).unwrap();
        let mut c = Coord::new(52.773_351_978_321, 6.180_430_926_763_5);
        c.move_in_place(140.0, 90.0);
        assert_abs_diff_eq!(v.distance_to_point(&c), 140.0, epsilon = 1.0);
        assert_abs_diff_eq!(v.distance(&c), 140.0, epsilon = 1.0);
        assert_abs_diff_eq!(v.distance(&v.center()), 0.0);
    }

    #[test]
    fn distance_to_polygon() {
        let v = Polygon::from_poly_string(VOORTUIN).unwrap();
        let moved = v.moved_clone(140.0, 90.0);
        assert_abs_diff_eq!(v.distance_to_polygon(&moved), 80.0, epsilon = 5.0);
        assert_abs_diff_eq!(v.distance(&moved), 80.0, epsilon = 5.0);
        assert_abs_diff_eq!(v.distance(&v), 0.0);
    }

    #[test]
    fn far_away() {
        let v = Polygon::from_poly_string(VOORTUIN).unwrap();
        assert!(!v.far_away(&Coord::new(52.78, 6.18)));
        assert!(v.far_away(&Coord::new(53.0, 6.18)));
    }

    #[test]
    fn simplify_skips_small_polygons() {
        let p = square();
        assert_eq!(p.simplify(0.5, true), p);
    }

    #[test]
    fn simplify_removes_near_collinear_vertices() {
        // A 1e-3 degree square with four extra vertices per side, each off
        // the side by at most 1e-6 degrees.
        let mut coords = Vec::new();
        let corners = [(0.0, 0.0), (0.0, 0.001), (0.001, 0.001), (0.001, 0.0)];
        for i in 0..4 {
            let (lat0, lng0) = corners[i];
            let (lat1, lng1) = corners[(i + 1) % 4];
            for k in 0..5 {
                let f = f64::from(k) / 5.0;
                let wiggle = if k == 0 { 0.0 } else { 1e-6 };
                coords.push(Coord::new(
                    52.0 + lat0 + (lat1 - lat0) * f + wiggle,
                    6.0 + lng0 + (lng1 - lng0) * f,
                ));
            }
        }
        let original = Polygon::from_coords(coords).unwrap();
        assert_eq!(original.size(), 20);

        for highest_quality in [true, false] {
            let simplified = original.simplify(0.0001, highest_quality);
            assert!(simplified.size() < original.size(), "hq={highest_quality}");
            assert!(simplified.size() >= 4, "hq={highest_quality}");
            for v in simplified.vertices() {
                let nearest = original
                    .vertices()
                    .iter()
                    .map(|o| o.simple_distance(v))
                    .fold(f64::INFINITY, f64::min);
                assert!(nearest < 0.0001, "hq={highest_quality} {v}");
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_revalidates() {
        let json = serde_json::to_string(&square()).unwrap();
        let back: Polygon = serde_json::from_str(&json).unwrap();
        assert_eq!(back, square());
        assert!(serde_json::from_str::<Polygon>(
            r#"[{"latitude":1.0,"longitude":1.0},{"latitude":2.0,"longitude":2.0}]"#
        )
        .is_err());
    }
}
