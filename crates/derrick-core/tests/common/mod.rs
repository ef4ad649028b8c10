use derrick_core::{params::CreateMilestone, TrackerBuilder};
use tempfile::TempDir;

/// Helper function to create a test tracker
#[allow(dead_code)]
pub async fn create_test_tracker() -> (TempDir, derrick_core::Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// Parameters for a valid milestone in `project_id`
#[allow(dead_code)]
pub fn milestone_params(project_id: &str, name: &str, planned_date: &str) -> CreateMilestone {
    CreateMilestone {
        project_id: project_id.to_string(),
        name: Some(name.to_string()),
        description: Some(format!("{name} description")),
        planned_date: Some(planned_date.to_string()),
        status: None,
    }
}
