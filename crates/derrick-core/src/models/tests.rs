#[cfg(test)]
mod model_tests {
    use jiff::{civil::date, Timestamp};

    use crate::{
        display::{CreateResult, Milestones, UpdateResult},
        models::{Milestone, MilestoneTask, ProgressSummary, ProjectProgress, Status},
    };

    fn create_test_task(id: u64, status: Status) -> MilestoneTask {
        MilestoneTask {
            id,
            milestone_id: 456,
            name: format!("Task {id}"),
            status,
            completion_percentage: if status == Status::Completed { 100 } else { 25 },
            start_date: date(2024, 1, 1),
            end_date: date(2024, 1, 15),
            depends_on: vec![],
            order: id as u32,
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            updated_at: Timestamp::from_second(1641081600).unwrap(), // 2022-01-02 00:00:00 UTC
        }
    }

    fn create_test_milestone(tasks: Vec<MilestoneTask>) -> Milestone {
        Milestone {
            id: 456,
            project_id: "well-7".to_string(),
            name: "Site Prep".to_string(),
            description: "Clear and level the pad".to_string(),
            planned_date: date(2024, 1, 31),
            actual_date: None,
            status: Status::InProgress,
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1641081600).unwrap(),
            tasks,
        }
    }

    #[test]
    fn test_milestone_json_shape() {
        let milestone = create_test_milestone(vec![create_test_task(1, Status::InProgress)]);
        let json = serde_json::to_value(&milestone).unwrap();

        assert_eq!(json["id"], 456);
        assert_eq!(json["projectId"], "well-7");
        assert_eq!(json["plannedDate"], "2024-01-31");
        assert!(json["actualDate"].is_null());
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["tasks"][0]["completionPercentage"], 25);
        assert_eq!(json["tasks"][0]["startDate"], "2024-01-01");
        assert_eq!(json["tasks"][0]["dependsOn"], serde_json::json!([]));
    }

    #[test]
    fn test_milestone_json_roundtrip_keeps_tasks() {
        let milestone = create_test_milestone(vec![
            create_test_task(1, Status::Completed),
            create_test_task(2, Status::Delayed),
        ]);
        let json = serde_json::to_string(&milestone).unwrap();
        let parsed: Milestone = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, milestone);
    }

    #[test]
    fn test_milestone_display() {
        let mut milestone = create_test_milestone(vec![
            create_test_task(1, Status::Completed),
            create_test_task(2, Status::InProgress),
        ]);
        milestone.tasks[1].depends_on = vec![1];
        let output = milestone.to_string();

        assert!(output.starts_with("# 456. Site Prep\n"));
        assert!(output.contains("- Project: well-7"));
        assert!(output.contains("- Status: ➤ In Progress"));
        assert!(output.contains("- Planned: 2024-01-31"));
        assert!(!output.contains("- Actual:"));
        assert!(output.contains("- Progress: 75% (1/2 completed)"));
        assert!(output.contains("Clear and level the pad"));
        assert!(output.contains("## Tasks"));
        assert!(output.contains("### 1. Task 1 (✓ Completed, 100%)"));
        assert!(output.contains("- Window: 2024-01-01 to 2024-01-15"));
        assert!(output.contains("- Depends on: 1"));
    }

    #[test]
    fn test_empty_milestone_display() {
        let mut milestone = create_test_milestone(vec![]);
        milestone.status = Status::Completed;
        milestone.actual_date = Some(date(2024, 1, 29));
        let output = milestone.to_string();

        assert!(output.contains("- Actual: 2024-01-29"));
        assert!(output.contains("No tasks in this milestone."));
        assert!(output.contains("- Progress: 0% (0/0 completed)"));
    }

    #[test]
    fn test_milestones_collection_display() {
        assert_eq!(Milestones(vec![]).to_string(), "No milestones found.\n");

        let milestones = Milestones(vec![create_test_milestone(vec![
            create_test_task(1, Status::Completed),
            create_test_task(2, Status::Planned),
        ])]);
        let output = milestones.to_string();
        assert!(output.contains("## Site Prep (ID: 456) 50%"));
        assert!(output.contains("- **Tasks**: 2 (1 completed)"));
        assert_eq!(milestones.len(), 1);
        assert_eq!(milestones[0].id, 456);
    }

    #[test]
    fn test_progress_display() {
        let milestones = vec![create_test_milestone(vec![
            create_test_task(1, Status::Completed),
            create_test_task(2, Status::InProgress),
            create_test_task(3, Status::Planned),
            create_test_task(4, Status::Delayed),
        ])];
        let progress = ProjectProgress::from_milestones("well-7", &milestones);
        let output = progress.to_string();

        assert!(output.starts_with("# Progress for project well-7\n"));
        assert!(output.contains("- Overall: 38%"));
        assert!(output.contains("- ⚠ Delayed: 1"));
        assert!(output.contains("## Milestones"));
        assert!(output.contains("- **Site Prep** (ID: 456, ➤ In Progress): 38% of 4 tasks"));
    }

    #[test]
    fn test_progress_json_shape() {
        let summary = ProgressSummary::from_statuses([Status::InProgress, Status::InProgress]);
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["overall"], 50);
        assert_eq!(json["inProgress"], 2);
        assert_eq!(json["delayed"], 0);
    }

    #[test]
    fn test_result_wrappers_display() {
        let created = CreateResult::new(create_test_task(3, Status::Planned));
        assert!(created
            .to_string()
            .starts_with("Created task with ID: 3 in milestone 456"));

        let updated = UpdateResult::with_changes(
            create_test_milestone(vec![]),
            vec!["Status changed from planned to in-progress".to_string()],
        );
        let output = updated.to_string();
        assert!(output.starts_with("Updated milestone with ID: 456"));
        assert!(output.contains("Changes made:"));
        assert!(output.contains("Status changed from planned to in-progress"));

        let unchanged = UpdateResult::new(create_test_milestone(vec![]));
        assert!(!unchanged.to_string().contains("Changes made:"));
    }
}
