//! Text formats for polygons: `"lat,lng|lat,lng|..."` and WKT `POLYGON((lng lat, ...))`.

use crate::error::{ConstructionError, FormatError, Result};

use super::coord::Coord;

/// Parses `"lat,lng|lat,lng|..."`. Pieces that are not a `lat,lng` pair
/// (such as the empty piece after a trailing `|`) are skipped.
///
/// # Errors
///
/// Returns `ConstructionError::TooFewPoints` if fewer than 3 pairs are found,
/// or `FormatError::InvalidNumber` if a pair holds a non-numeric value.
pub fn parse_poly_string(text: &str) -> Result<Vec<Coord>> {
    let pieces: Vec<&str> = text.split('|').collect();
    if pieces.len() < 3 {
        return Err(ConstructionError::TooFewPoints {
            found: pieces.len(),
        }
        .into());
    }
    let mut coords = Vec::with_capacity(pieces.len());
    for piece in pieces {
        if let Some((lat, lng)) = piece.split_once(',') {
            if lng.contains(',') {
                continue;
            }
            coords.push(Coord::from_strs(lat, lng)?);
        }
    }
    if coords.len() < 3 {
        return Err(ConstructionError::TooFewPoints {
            found: coords.len(),
        }
        .into());
    }
    Ok(coords)
}

/// Parses a WKT `POLYGON((lng lat, ...))` outer ring.
///
/// The ring must list at least 4 nodes; a closing node textually equal to
/// the first is dropped.
///
/// # Errors
///
/// Returns `FormatError::InvalidWkt` if the text is not a WKT polygon or a
/// node is not a `lng lat` pair, and `FormatError::InvalidNumber` if a value
/// is not numeric.
pub fn parse_wkt(text: &str) -> Result<Vec<Coord>> {
    let ring = wkt_ring_body(text).ok_or_else(|| FormatError::InvalidWkt(text.to_owned()))?;
    let mut nodes: Vec<&str> = ring.split(',').map(str::trim).collect();
    if nodes.len() < 4 {
        return Err(FormatError::InvalidWkt(format!("less than 4 points: {text}")).into());
    }
    if nodes.first() == nodes.last() {
        nodes.pop();
    }
    nodes
        .into_iter()
        .map(|node| {
            let mut parts = node.split_whitespace();
            match (parts.next(), parts.next(), parts.next()) {
                (Some(lng), Some(lat), None) => Coord::from_strs(lat, lng),
                _ => Err(FormatError::InvalidWkt(format!("bad node {node:?}")).into()),
            }
        })
        .collect()
}

/// Extracts the text between `POLYGON ((` and the final `))`.
fn wkt_ring_body(text: &str) -> Option<&str> {
    let start = text.to_ascii_uppercase().find("POLYGON")? + "POLYGON".len();
    let rest = text[start..].trim_start().strip_prefix('(')?;
    let rest = rest.trim_start().strip_prefix('(')?;
    let end = rest.rfind("))")?;
    Some(&rest[..end])
}

/// Formats `"lat,lng|"` per vertex with 6 decimals, trailing separator included.
#[must_use]
pub fn format_poly_string(coords: &[Coord]) -> String {
    let mut out = String::with_capacity(coords.len() * 22);
    for c in coords {
        out.push_str(&c.to_string());
        out.push('|');
    }
    out
}

/// Formats a closed WKT ring, repeating the first vertex at the end.
#[must_use]
pub fn format_wkt(coords: &[Coord]) -> String {
    let mut out = String::from("POLYGON((");
    for c in coords {
        out.push_str(&c.to_wkt_string());
        out.push(',');
    }
    if let Some(first) = coords.first() {
        out.push_str(&first.to_wkt_string());
    }
    out.push_str("))");
    out
}
