use crate::constants::EARTH_RADIUS_M;
use crate::geometry::{Coordinate, Geometry};

/// Great-circle distance between two coordinates in meters (haversine)
#[must_use]
pub fn haversine_distance_m(a: Coordinate, b: Coordinate) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let delta_phi = (b.lat - a.lat).to_radians();
    let delta_lambda = (b.lng - a.lng).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Check whether two point footprints fall within the proximity threshold
#[must_use]
pub fn points_overlap(a: Coordinate, b: Coordinate, threshold_m: f64) -> bool {
    haversine_distance_m(a, b) < threshold_m
}

/// Check whether two canonical geometries overlap spatially.
///
/// Only point/point pairs are evaluated; any pair involving a polygon is
/// reported as non-overlapping. Polygon footprints are normalized for display
/// purposes, but the proximity check has no polygon semantics.
#[must_use]
pub fn geometries_overlap(a: &Geometry, b: &Geometry, threshold_m: f64) -> bool {
    match (a.as_point(), b.as_point()) {
        (Some(point_a), Some(point_b)) => points_overlap(point_a, point_b, threshold_m),
        _ => false,
    }
}
