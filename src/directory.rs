use crate::conflict::{find_conflicts, ConflictConfig};
use crate::models::{Location, Project};
use std::collections::{HashMap, HashSet};

/// An immutable view of the project directory at one moment.
///
/// The detector never mutates a snapshot; callers rebuild one (and rerun
/// detection) after every create, update, or delete.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ProjectSnapshot {
    pub projects: Vec<Project>,
    pub locations_by_project: HashMap<String, Vec<Location>>,
}

impl ProjectSnapshot {
    /// Get the locations recorded for a project, if any
    #[must_use]
    pub fn locations_for(&self, project_id: &str) -> &[Location] {
        self.locations_by_project
            .get(project_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Run conflict detection over this snapshot
    #[must_use]
    pub fn find_conflicts(&self, config: &ConflictConfig) -> HashSet<String> {
        find_conflicts(&self.projects, &self.locations_by_project, config)
    }
}

/// Contract for whatever owns the project records.
///
/// The conflict engine only ever reads; create/update/delete live with the
/// implementer. `snapshot` may fail (a backing store can be unreachable), but
/// once a snapshot is obtained, detection itself cannot.
pub trait ProjectDirectory {
    /// Produce the current snapshot of projects and their locations
    ///
    /// # Errors
    /// Returns a description of the failure when the directory's backing
    /// store cannot be read.
    fn snapshot(&self) -> Result<ProjectSnapshot, String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProjectPriority, ProjectStatus};
    use serde_json::json;

    struct FixedDirectory {
        snapshot: ProjectSnapshot,
    }

    impl ProjectDirectory for FixedDirectory {
        fn snapshot(&self) -> Result<ProjectSnapshot, String> {
            Ok(self.snapshot.clone())
        }
    }

    fn sample_snapshot() -> ProjectSnapshot {
        let project = |id: &str| Project {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: None,
            status: ProjectStatus::InProgress,
            priority: ProjectPriority::High,
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("2024-06-01".to_string()),
            budget: None,
            department: None,
            contractor_name: None,
            location_name: None,
            color: None,
            created_at: None,
            updated_at: None,
        };

        let mut locations_by_project = HashMap::new();
        locations_by_project.insert(
            "a".to_string(),
            vec![Location::new(
                "l1".to_string(),
                "a".to_string(),
                json!({"lat": 34.1478, "lng": -118.1445}),
            )],
        );
        locations_by_project.insert(
            "b".to_string(),
            vec![Location::new(
                "l2".to_string(),
                "b".to_string(),
                json!("POINT(-118.1445 34.1478)"),
            )],
        );

        ProjectSnapshot {
            projects: vec![project("a"), project("b")],
            locations_by_project,
        }
    }

    #[test]
    fn test_snapshot_find_conflicts() {
        let snapshot = sample_snapshot();
        let conflicts = snapshot.find_conflicts(&ConflictConfig::default());
        assert_eq!(conflicts.len(), 2);
    }

    #[test]
    fn test_locations_for_unknown_project() {
        let snapshot = sample_snapshot();
        assert!(snapshot.locations_for("missing").is_empty());
    }

    #[test]
    fn test_directory_trait_supplies_snapshot() {
        let directory = FixedDirectory {
            snapshot: sample_snapshot(),
        };

        let snapshot = directory.snapshot().expect("snapshot available");
        assert_eq!(snapshot.projects.len(), 2);
        assert_eq!(snapshot.locations_for("a").len(), 1);
    }
}
