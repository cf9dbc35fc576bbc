use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A geographic footprint attached to a project.
///
/// `geometry` is kept exactly as the persistence layer emitted it: a
/// GeoJSON-like object, a WKT string, or a raw `{lat, lng}` object. The
/// conflict engine normalizes it through `geometry::parse_geometry` at the
/// point of comparison; nothing in the snapshot is canonicalized at rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub project_id: String,
    pub geometry: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Location {
    #[must_use]
    pub fn new(id: String, project_id: String, geometry: Value) -> Self {
        Self {
            id,
            project_id,
            geometry,
            created_at: None,
        }
    }
}
