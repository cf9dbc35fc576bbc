use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planned,
    InProgress,
    Completed,
    OnHold,
}

impl ProjectStatus {
    /// Get a human-readable label for the status
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Planned => "Planned",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl ProjectPriority {
    /// Get a human-readable label for the priority
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProjectPriority::Low => "Low",
            ProjectPriority::Medium => "Medium",
            ProjectPriority::High => "High",
            ProjectPriority::Critical => "Critical",
        }
    }
}

/// A municipal project as supplied by the project directory.
///
/// Schedule fields stay as raw ISO-8601 strings: the directory emits whatever
/// the persistence layer stored, and the conflict engine treats an
/// unparseable or missing date as "cannot conflict" rather than rejecting the
/// record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub priority: ProjectPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contractor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Project {
    /// Get the schedule window if both endpoints are present
    ///
    /// Projects missing either date are never considered for temporal
    /// overlap.
    #[must_use]
    pub fn schedule(&self) -> Option<(&str, &str)> {
        match (self.start_date.as_deref(), self.end_date.as_deref()) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        Project {
            id: "p1".to_string(),
            name: "Sewer Upgrade".to_string(),
            description: None,
            status: ProjectStatus::Planned,
            priority: ProjectPriority::Medium,
            start_date: Some("2024-01-01".to_string()),
            end_date: Some("2024-06-01".to_string()),
            budget: Some(250_000.0),
            department: Some("Public Works".to_string()),
            contractor_name: None,
            location_name: None,
            color: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_schedule_present() {
        let project = sample_project();
        assert_eq!(project.schedule(), Some(("2024-01-01", "2024-06-01")));
    }

    #[test]
    fn test_schedule_missing_end() {
        let mut project = sample_project();
        project.end_date = None;
        assert_eq!(project.schedule(), None);
    }

    #[test]
    fn test_schedule_missing_both() {
        let mut project = sample_project();
        project.start_date = None;
        project.end_date = None;
        assert_eq!(project.schedule(), None);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).expect("serializes");
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn test_priority_deserializes_snake_case() {
        let priority: ProjectPriority =
            serde_json::from_str("\"critical\"").expect("deserializes");
        assert_eq!(priority, ProjectPriority::Critical);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProjectStatus::Planned.label(), "Planned");
        assert_eq!(ProjectStatus::OnHold.label(), "On Hold");
    }
}
