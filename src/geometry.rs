use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A canonical geographic coordinate (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Canonical geometry materialized from a raw location encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(Coordinate),
    Polygon(Vec<Coordinate>),
}

impl Geometry {
    /// Get the point coordinate if this geometry is a point
    #[must_use]
    pub fn as_point(&self) -> Option<Coordinate> {
        match self {
            Geometry::Point(coord) => Some(*coord),
            Geometry::Polygon(_) => None,
        }
    }
}

/// Normalize a raw location geometry into the canonical model.
///
/// The persistence layer emits geometry in three shapes: a GeoJSON-like
/// object (`{"type": "Point", "coordinates": [lng, lat]}` or the Polygon
/// equivalent), a WKT string (`POINT(lng lat)` / `POLYGON((lng lat, ...))`),
/// or an already-canonical `{lat, lng}` object. Anything else, including
/// coordinates that are non-numeric, non-finite, or outside valid
/// latitude/longitude ranges, yields `None`: the location is unusable for
/// conflict purposes, which is not an error.
#[must_use]
pub fn parse_geometry(raw: &Value) -> Option<Geometry> {
    if let Some(point) = parse_geojson_point(raw) {
        return Some(Geometry::Point(point));
    }

    if let Some(ring) = parse_geojson_polygon(raw) {
        return Some(Geometry::Polygon(ring));
    }

    if let Some(text) = raw.as_str() {
        if text.contains("POINT") {
            return parse_wkt_point(text).map(Geometry::Point);
        }
        if text.contains("POLYGON") {
            return parse_wkt_polygon(text).map(Geometry::Polygon);
        }
        return None;
    }

    parse_raw_coordinate(raw).map(Geometry::Point)
}

fn parse_geojson_point(raw: &Value) -> Option<Coordinate> {
    if raw["type"].as_str() != Some("Point") {
        return None;
    }

    let coords = raw["coordinates"].as_array()?;
    if coords.len() != 2 {
        return None;
    }

    let lng = coords[0].as_f64()?;
    let lat = coords[1].as_f64()?;
    checked_coordinate(lat, lng)
}

fn parse_geojson_polygon(raw: &Value) -> Option<Vec<Coordinate>> {
    if raw["type"].as_str() != Some("Polygon") {
        return None;
    }

    // Only the outer ring is used; holes are irrelevant to proximity checks
    let outer_ring = raw["coordinates"].as_array()?.first()?.as_array()?;

    let mut vertices = Vec::with_capacity(outer_ring.len());
    for pair in outer_ring {
        let pair = pair.as_array()?;
        if pair.len() < 2 {
            return None;
        }
        let lng = pair[0].as_f64()?;
        let lat = pair[1].as_f64()?;
        vertices.push(checked_coordinate(lat, lng)?);
    }

    if vertices.len() < 3 {
        return None;
    }

    Some(vertices)
}

fn parse_wkt_point(text: &str) -> Option<Coordinate> {
    let inner = wkt_body(text, "POINT")?;

    let mut tokens = inner.split_whitespace();
    let lng = tokens.next()?.parse::<f64>().ok()?;
    let lat = tokens.next()?.parse::<f64>().ok()?;
    if tokens.next().is_some() {
        return None;
    }

    checked_coordinate(lat, lng)
}

fn parse_wkt_polygon(text: &str) -> Option<Vec<Coordinate>> {
    let inner = wkt_body(text, "POLYGON")?;
    let inner = inner.trim_start_matches('(').trim_end_matches(')');

    let mut vertices = Vec::new();
    for pair in inner.split(',') {
        let mut tokens = pair.split_whitespace();
        let lng = tokens.next()?.parse::<f64>().ok()?;
        let lat = tokens.next()?.parse::<f64>().ok()?;
        vertices.push(checked_coordinate(lat, lng)?);
    }

    if vertices.len() < 3 {
        return None;
    }

    Some(vertices)
}

/// Extract the text between the outermost parentheses following a WKT keyword
fn wkt_body<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let after_keyword = &text[text.find(keyword)? + keyword.len()..];
    let open = after_keyword.find('(')?;
    let close = after_keyword.rfind(')')?;
    if close <= open {
        return None;
    }
    Some(&after_keyword[open + 1..close])
}

fn parse_raw_coordinate(raw: &Value) -> Option<Coordinate> {
    if !raw.is_object() {
        return None;
    }

    let lat = raw["lat"].as_f64()?;
    let lng = raw["lng"].as_f64()?;
    checked_coordinate(lat, lng)
}

fn checked_coordinate(lat: f64, lng: f64) -> Option<Coordinate> {
    if !lat.is_finite() || !lng.is_finite() {
        return None;
    }
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return None;
    }
    Some(Coordinate { lat, lng })
}
