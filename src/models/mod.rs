mod id;
mod location;
mod project;

pub use id::{generate_location_id, generate_project_id};
pub use location::Location;
pub use project::{Project, ProjectPriority, ProjectStatus};
