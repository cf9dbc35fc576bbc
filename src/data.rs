use crate::directory::{ProjectDirectory, ProjectSnapshot};
use crate::models::{Location, Project, ProjectPriority, ProjectStatus};
use std::collections::HashMap;

/// Load the embedded demo snapshot.
///
/// The sample mirrors the dashboard's seeded mock data: point footprints in
/// GeoJSON, WKT, and raw `{lat,lng}` form, one polygon footprint, one
/// unsupported geometry, and one project without a schedule. Malformed rows
/// are skipped, never fatal.
#[must_use]
pub fn demo_snapshot() -> ProjectSnapshot {
    let projects = parse_projects_csv(include_str!("../test-data/projects.csv"));
    let locations_by_project =
        parse_locations_json(include_str!("../test-data/locations.json"));

    ProjectSnapshot {
        projects,
        locations_by_project,
    }
}

/// Directory backed by the embedded demo data
pub struct DemoDirectory;

impl ProjectDirectory for DemoDirectory {
    fn snapshot(&self) -> Result<ProjectSnapshot, String> {
        Ok(demo_snapshot())
    }
}

fn parse_projects_csv(csv_content: &str) -> Vec<Project> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(csv_content.as_bytes());

    let mut records = reader.records();

    // First row is the header
    if records.next().is_none() {
        return Vec::new();
    }

    let mut projects = Vec::new();

    for record in records {
        let Ok(row) = record else { continue };
        let Some(project) = parse_project_row(&row) else {
            continue;
        };
        projects.push(project);
    }

    projects
}

fn parse_project_row(row: &csv::StringRecord) -> Option<Project> {
    let id = non_empty(row.get(0)?)?;
    let name = non_empty(row.get(1)?)?;
    let status = parse_status(row.get(3)?)?;
    let priority = parse_priority(row.get(4)?)?;

    Some(Project {
        id: id.to_string(),
        name: name.to_string(),
        description: row.get(2).and_then(non_empty).map(String::from),
        status,
        priority,
        start_date: row.get(5).and_then(non_empty).map(String::from),
        end_date: row.get(6).and_then(non_empty).map(String::from),
        budget: row.get(7).and_then(|s| s.parse::<f64>().ok()),
        department: row.get(8).and_then(non_empty).map(String::from),
        contractor_name: row.get(9).and_then(non_empty).map(String::from),
        location_name: row.get(10).and_then(non_empty).map(String::from),
        color: row.get(11).and_then(non_empty).map(String::from),
        created_at: None,
        updated_at: None,
    })
}

fn parse_locations_json(json_content: &str) -> HashMap<String, Vec<Location>> {
    let locations: Vec<Location> = serde_json::from_str(json_content).unwrap_or_default();

    let mut by_project: HashMap<String, Vec<Location>> = HashMap::new();
    for location in locations {
        by_project
            .entry(location.project_id.clone())
            .or_default()
            .push(location);
    }

    by_project
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

fn parse_status(s: &str) -> Option<ProjectStatus> {
    match s {
        "planned" => Some(ProjectStatus::Planned),
        "in_progress" => Some(ProjectStatus::InProgress),
        "completed" => Some(ProjectStatus::Completed),
        "on_hold" => Some(ProjectStatus::OnHold),
        _ => None,
    }
}

fn parse_priority(s: &str) -> Option<ProjectPriority> {
    match s {
        "low" => Some(ProjectPriority::Low),
        "medium" => Some(ProjectPriority::Medium),
        "high" => Some(ProjectPriority::High),
        "critical" => Some(ProjectPriority::Critical),
        _ => None,
    }
}
