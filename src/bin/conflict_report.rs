use civic_plan::data::DemoDirectory;
use civic_plan::{ConflictConfig, ProjectDirectory};
use std::env;

fn main() -> Result<(), String> {
    env_logger::init();

    // Threshold override from the environment, e.g. PROXIMITY_THRESHOLD_M=250
    let mut config = ConflictConfig::default();
    if let Some(threshold) = env::var("PROXIMITY_THRESHOLD_M")
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
    {
        config.proximity_threshold_m = threshold;
    }

    let snapshot = DemoDirectory.snapshot()?;
    let conflicts = snapshot.find_conflicts(&config);

    println!(
        "Checked {} projects (threshold {} m): {} flagged",
        snapshot.projects.len(),
        config.proximity_threshold_m,
        conflicts.len()
    );

    for project in &snapshot.projects {
        if conflicts.contains(&project.id) {
            let schedule = project
                .schedule()
                .map_or_else(|| "unscheduled".to_string(), |(s, e)| format!("{s} to {e}"));
            println!("  CONFLICT {} - {} ({schedule})", project.id, project.name);
        }
    }

    Ok(())
}
