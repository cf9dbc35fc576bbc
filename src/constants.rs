/// Mean Earth radius in meters, used by the haversine distance computation
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Default proximity threshold for spatial overlap (meters)
///
/// Two point footprints closer than this are considered to occupy the same
/// work area. Tunable per call through `ConflictConfig`.
pub const DEFAULT_PROXIMITY_THRESHOLD_M: f64 = 100.0;

/// Calendar date format for project schedule fields (ISO-8601)
pub const DATE_FORMAT: &str = "%Y-%m-%d";
