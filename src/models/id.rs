/// ID generation for directory records
///
/// Projects and locations are keyed by UUID strings so identifiers generated
/// by different dashboard sessions never collide.

/// Generate a new UUID string for project IDs
#[must_use]
pub fn generate_project_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Generate a new UUID string for location IDs
#[must_use]
pub fn generate_location_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
