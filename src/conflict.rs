use crate::constants::DEFAULT_PROXIMITY_THRESHOLD_M;
use crate::geometry::{parse_geometry, Geometry};
use crate::models::{Location, Project};
use crate::spatial::geometries_overlap;
use crate::time::dates_overlap;
use std::collections::{HashMap, HashSet};

/// Tuning knobs for conflict detection
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ConflictConfig {
    /// Maximum distance between two point footprints to flag them as
    /// occupying the same work area (meters)
    pub proximity_threshold_m: f64,
}

impl Default for ConflictConfig {
    fn default() -> Self {
        Self {
            proximity_threshold_m: DEFAULT_PROXIMITY_THRESHOLD_M,
        }
    }
}

/// Find all projects whose schedules overlap in time and whose footprints
/// overlap in space.
///
/// Returns the set of conflicting project IDs, recomputed in full from the
/// given snapshot. Membership is independent of iteration order. Projects
/// missing either schedule date, and locations whose geometry fails to
/// normalize, contribute no conflicts; nothing in this function raises.
#[must_use]
pub fn find_conflicts(
    projects: &[Project],
    locations_by_project: &HashMap<String, Vec<Location>>,
    config: &ConflictConfig,
) -> HashSet<String> {
    let mut conflicts = HashSet::new();

    // Normalize each project's geometries once, not once per pair
    let footprints: Vec<Vec<Geometry>> = projects
        .iter()
        .map(|project| normalized_footprints(&project.id, locations_by_project))
        .collect();

    for (i, project_a) in projects.iter().enumerate() {
        let Some((start_a, end_a)) = project_a.schedule() else {
            continue;
        };

        for (j, project_b) in projects.iter().enumerate().skip(i + 1) {
            let Some((start_b, end_b)) = project_b.schedule() else {
                continue;
            };

            if !dates_overlap(start_a, end_a, start_b, end_b) {
                continue;
            }

            if any_footprint_overlap(&footprints[i], &footprints[j], config.proximity_threshold_m) {
                conflicts.insert(project_a.id.clone());
                conflicts.insert(project_b.id.clone());
            }
        }
    }

    log::debug!(
        "conflict detection: {} projects scanned, {} flagged",
        projects.len(),
        conflicts.len()
    );

    conflicts
}

/// Check a project being created or edited against the existing directory.
///
/// Returns the IDs of existing projects that would conflict with the
/// candidate, so the form can warn before saving. The candidate's own ID is
/// never reported, which keeps edits of a saved project from conflicting
/// with themselves.
#[must_use]
pub fn conflicts_with_candidate(
    candidate: &Project,
    candidate_locations: &[Location],
    existing: &[Project],
    locations_by_project: &HashMap<String, Vec<Location>>,
    config: &ConflictConfig,
) -> Vec<String> {
    let Some((candidate_start, candidate_end)) = candidate.schedule() else {
        return Vec::new();
    };

    let candidate_footprints: Vec<Geometry> = candidate_locations
        .iter()
        .filter_map(|location| parse_geometry(&location.geometry))
        .collect();

    let mut conflicting = Vec::new();

    for project in existing {
        if project.id == candidate.id {
            continue;
        }

        let Some((start, end)) = project.schedule() else {
            continue;
        };

        if !dates_overlap(candidate_start, candidate_end, start, end) {
            continue;
        }

        let footprints = normalized_footprints(&project.id, locations_by_project);
        if any_footprint_overlap(
            &candidate_footprints,
            &footprints,
            config.proximity_threshold_m,
        ) {
            conflicting.push(project.id.clone());
        }
    }

    conflicting
}

fn normalized_footprints(
    project_id: &str,
    locations_by_project: &HashMap<String, Vec<Location>>,
) -> Vec<Geometry> {
    locations_by_project
        .get(project_id)
        .map(|locations| {
            locations
                .iter()
                .filter_map(|location| parse_geometry(&location.geometry))
                .collect()
        })
        .unwrap_or_default()
}

fn any_footprint_overlap(a: &[Geometry], b: &[Geometry], threshold_m: f64) -> bool {
    a.iter()
        .any(|geom_a| b.iter().any(|geom_b| geometries_overlap(geom_a, geom_b, threshold_m)))
}
