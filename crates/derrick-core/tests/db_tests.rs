use derrick_core::{
    models::{MilestoneChanges, NewMilestone, NewTask, Status, StatusPolicy, TaskChanges},
    Database, TrackerError,
};
use jiff::civil::date;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn new_milestone(project_id: &str, name: &str, day: i8) -> NewMilestone {
    NewMilestone {
        project_id: project_id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        planned_date: date(2024, 1, day),
        status: Status::Planned,
    }
}

fn new_task(name: &str, status: Status) -> NewTask {
    NewTask {
        name: name.to_string(),
        status,
        completion_percentage: 0,
        start_date: date(2024, 1, 1),
        end_date: date(2024, 1, 5),
        depends_on: vec![],
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();
    assert!(temp_file.path().exists());

    // Opening again must not fail on the existing schema
    Database::new(temp_file.path()).expect("Failed to reopen database");
}

#[test]
fn test_create_and_get_milestone() {
    let (_temp_file, mut db) = create_test_db();

    let created = db
        .create_milestone(&new_milestone("p1", "Spud", 10))
        .expect("Failed to create milestone");
    assert!(created.id > 0);
    assert!(created.tasks.is_empty());

    let fetched = db
        .get_milestone(created.id)
        .expect("Failed to get milestone")
        .expect("Milestone should exist");
    assert_eq!(fetched, created);

    assert!(db.get_milestone(created.id + 100).unwrap().is_none());
}

#[test]
fn test_create_completed_milestone_sets_actual_date() {
    let (_temp_file, mut db) = create_test_db();

    let milestone = db
        .create_milestone(&NewMilestone {
            status: Status::Completed,
            ..new_milestone("p1", "Spud", 10)
        })
        .unwrap();
    assert!(milestone.actual_date.is_some());
}

#[test]
fn test_list_milestones_by_planned_date() {
    let (_temp_file, mut db) = create_test_db();

    db.create_milestone(&new_milestone("p1", "Late", 20)).unwrap();
    db.create_milestone(&new_milestone("p1", "Early", 5)).unwrap();
    db.create_milestone(&new_milestone("p2", "Elsewhere", 1))
        .unwrap();

    let names: Vec<_> = db
        .list_milestones("p1")
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["Early", "Late"]);
    assert!(db.list_milestones("p3").unwrap().is_empty());
}

#[test]
fn test_task_lifecycle() {
    let (_temp_file, mut db) = create_test_db();
    let milestone = db.create_milestone(&new_milestone("p1", "Spud", 10)).unwrap();

    let write = db
        .create_task(
            milestone.id,
            &NewTask {
                depends_on: vec![7, 8],
                ..new_task("Survey", Status::Planned)
            },
        )
        .unwrap();
    assert_eq!(write.project_id, "p1");
    assert_eq!(write.task.order, 0);

    let updated = db
        .update_task(
            milestone.id,
            write.task.id,
            &TaskChanges {
                completion_percentage: Some(80),
                status: Some(Status::InProgress),
                ..Default::default()
            },
            StatusPolicy::Permissive,
        )
        .unwrap();
    assert_eq!(updated.changes.len(), 2);

    let stored = db.get_milestone(milestone.id).unwrap().unwrap();
    assert_eq!(stored.tasks.len(), 1);
    assert_eq!(stored.tasks[0].completion_percentage, 80);
    assert_eq!(stored.tasks[0].status, Status::InProgress);
    assert_eq!(stored.tasks[0].depends_on, vec![7, 8]);

    db.delete_task(milestone.id, write.task.id).unwrap();
    assert!(db.get_milestone(milestone.id).unwrap().unwrap().tasks.is_empty());
}

#[test]
fn test_task_requires_live_milestone() {
    let (_temp_file, mut db) = create_test_db();
    let milestone = db.create_milestone(&new_milestone("p1", "Spud", 10)).unwrap();
    db.delete_milestone(milestone.id).unwrap();

    let err = db
        .create_task(milestone.id, &new_task("Survey", Status::Planned))
        .unwrap_err();
    assert!(matches!(err, TrackerError::MilestoneNotFound { .. }));
}

#[test]
fn test_task_ids_are_scoped_to_milestone() {
    let (_temp_file, mut db) = create_test_db();
    let first = db.create_milestone(&new_milestone("p1", "One", 1)).unwrap();
    let second = db.create_milestone(&new_milestone("p1", "Two", 2)).unwrap();
    let task = db
        .create_task(first.id, &new_task("Survey", Status::Planned))
        .unwrap()
        .task;

    let err = db
        .update_task(
            second.id,
            task.id,
            &TaskChanges::default(),
            StatusPolicy::Permissive,
        )
        .unwrap_err();
    assert!(matches!(err, TrackerError::TaskNotFound { .. }));
}

#[test]
fn test_unchanged_update_keeps_timestamp() {
    let (_temp_file, mut db) = create_test_db();
    let milestone = db.create_milestone(&new_milestone("p1", "Spud", 10)).unwrap();

    let (unchanged, changes) = db
        .update_milestone(
            milestone.id,
            &MilestoneChanges {
                name: Some("Spud".to_string()),
                ..Default::default()
            },
            StatusPolicy::Permissive,
        )
        .unwrap();
    assert!(changes.is_empty());
    assert_eq!(unchanged.updated_at, milestone.updated_at);
}

#[test]
fn test_strict_policy_leaves_row_untouched() {
    let (_temp_file, mut db) = create_test_db();
    let milestone = db.create_milestone(&new_milestone("p1", "Spud", 10)).unwrap();

    let result = db.update_milestone(
        milestone.id,
        &MilestoneChanges {
            status: Some(Status::Completed),
            ..Default::default()
        },
        StatusPolicy::Strict,
    );
    assert!(result.is_err());

    let stored = db.get_milestone(milestone.id).unwrap().unwrap();
    assert_eq!(stored.status, Status::Planned);
    assert_eq!(stored.actual_date, None);
}

#[test]
fn test_reopen_keeps_existing_rows() {
    let (temp_file, mut db) = create_test_db();
    let created = db
        .create_milestone(&new_milestone("p1", "Spud", 5))
        .unwrap();
    drop(db);

    let mut reopened = Database::new(temp_file.path()).expect("Failed to reopen database");
    let milestones = reopened.list_milestones("p1").unwrap();
    assert_eq!(milestones.len(), 1);
    assert_eq!(milestones[0].id, created.id);

    reopened.delete_milestone(created.id).unwrap();
    assert!(reopened.list_milestones("p1").unwrap().is_empty());
}
