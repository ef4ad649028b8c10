use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a test database
fn derrick_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("derrick").expect("Failed to find derrick binary");
    cmd.env_remove("DERRICK_STRICT_STATUS")
        .env_remove("DERRICK_BIND")
        .env_remove("DERRICK_PORT")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

fn create_site_prep(temp_dir: &TempDir) {
    derrick_cmd(temp_dir)
        .args([
            "milestone",
            "create",
            "well-7",
            "Site Prep",
            "--description",
            "Clear and level the pad",
            "--planned-date",
            "2024-01-01",
        ])
        .assert()
        .success();
}

fn add_task(temp_dir: &TempDir, name: &str, status: &str) {
    derrick_cmd(temp_dir)
        .args([
            "task",
            "add",
            "1",
            name,
            "--start-date",
            "2024-01-01",
            "--end-date",
            "2024-01-10",
            "--status",
            status,
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_create_milestone_success() {
    let temp_dir = create_cli_test_environment();

    derrick_cmd(&temp_dir)
        .args([
            "milestone",
            "create",
            "well-7",
            "Site Prep",
            "-d",
            "Clear and level the pad",
            "-p",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created milestone with ID: 1"))
        .stdout(predicate::str::contains("# 1. Site Prep"))
        .stdout(predicate::str::contains("- Status: ○ Planned"))
        .stdout(predicate::str::contains("No tasks in this milestone."));
}

#[test]
fn test_cli_create_milestone_rejects_bad_date() {
    let temp_dir = create_cli_test_environment();

    derrick_cmd(&temp_dir)
        .args([
            "milestone",
            "create",
            "well-7",
            "Site Prep",
            "--description",
            "Clear and level the pad",
            "--planned-date",
            "01/02/2024",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plannedDate"));
}

#[test]
fn test_cli_list_empty_milestones() {
    let temp_dir = create_cli_test_environment();

    derrick_cmd(&temp_dir)
        .args(["milestone", "list", "nowhere"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No milestones found."));
}

#[test]
fn test_cli_list_milestones() {
    let temp_dir = create_cli_test_environment();
    create_site_prep(&temp_dir);
    add_task(&temp_dir, "Survey", "completed");

    derrick_cmd(&temp_dir)
        .args(["m", "list", "well-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Site Prep (ID: 1) 100%"))
        .stdout(predicate::str::contains("- **Tasks**: 1 (1 completed)"));
}

#[test]
fn test_cli_add_task_and_show() {
    let temp_dir = create_cli_test_environment();
    create_site_prep(&temp_dir);

    derrick_cmd(&temp_dir)
        .args([
            "task",
            "add",
            "1",
            "Survey",
            "--start-date",
            "2024-01-01",
            "--end-date",
            "2024-01-05",
            "--completion",
            "20",
            "--depends-on",
            "7,8",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task with ID: 1 in milestone 1"))
        .stdout(predicate::str::contains("### 1. Survey (○ Planned, 20%)"));

    derrick_cmd(&temp_dir)
        .args(["milestone", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Tasks"))
        .stdout(predicate::str::contains("- Window: 2024-01-01 to 2024-01-05"))
        .stdout(predicate::str::contains("- Depends on: 7, 8"));
}

#[test]
fn test_cli_add_task_window_validation() {
    let temp_dir = create_cli_test_environment();
    create_site_prep(&temp_dir);

    derrick_cmd(&temp_dir)
        .args([
            "task",
            "add",
            "1",
            "Survey",
            "--start-date",
            "2024-01-05",
            "--end-date",
            "2024-01-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("endDate"));
}

#[test]
fn test_cli_add_task_to_missing_milestone() {
    let temp_dir = create_cli_test_environment();

    derrick_cmd(&temp_dir)
        .args([
            "task",
            "add",
            "42",
            "Survey",
            "--start-date",
            "2024-01-01",
            "--end-date",
            "2024-01-05",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Milestone with ID 42 not found"));
}

#[test]
fn test_cli_update_task_status_skip_is_permissive() {
    let temp_dir = create_cli_test_environment();
    create_site_prep(&temp_dir);
    add_task(&temp_dir, "Survey", "planned");

    derrick_cmd(&temp_dir)
        .args(["task", "update", "1", "1", "--status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated task with ID: 1"))
        .stdout(predicate::str::contains(
            "- Status changed from planned to completed",
        ))
        .stdout(predicate::str::contains("(✓ Completed, 0%)"));
}

#[test]
fn test_cli_strict_status_rejects_skip() {
    let temp_dir = create_cli_test_environment();
    create_site_prep(&temp_dir);
    add_task(&temp_dir, "Survey", "planned");

    derrick_cmd(&temp_dir)
        .args([
            "--strict-status",
            "task",
            "update",
            "1",
            "1",
            "--status",
            "completed",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cannot change status from 'planned' to 'completed'",
        ));

    derrick_cmd(&temp_dir)
        .env("DERRICK_STRICT_STATUS", "1")
        .args(["task", "update", "1", "1", "--status", "in-progress"])
        .assert()
        .success();
}

#[test]
fn test_cli_complete_milestone_with_actual_date() {
    let temp_dir = create_cli_test_environment();
    create_site_prep(&temp_dir);

    derrick_cmd(&temp_dir)
        .args([
            "milestone",
            "update",
            "1",
            "--status",
            "completed",
            "--actual-date",
            "2024-01-03",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated milestone with ID: 1"))
        .stdout(predicate::str::contains("- Actual: 2024-01-03"));

    derrick_cmd(&temp_dir)
        .args(["milestone", "update", "1", "--status", "delayed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared actual date"))
        .stdout(predicate::str::contains("- Actual:").not());
}

#[test]
fn test_cli_progress() {
    let temp_dir = create_cli_test_environment();
    create_site_prep(&temp_dir);
    add_task(&temp_dir, "Survey", "completed");
    add_task(&temp_dir, "Clear", "in-progress");
    add_task(&temp_dir, "Level", "planned");
    add_task(&temp_dir, "Gravel", "delayed");

    derrick_cmd(&temp_dir)
        .args(["progress", "well-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Progress for project well-7"))
        .stdout(predicate::str::contains("- Overall: 38%"));

    derrick_cmd(&temp_dir)
        .args(["progress", "well-7", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"overall\": 38"))
        .stdout(predicate::str::contains("\"inProgress\": 1"));
}

#[test]
fn test_cli_delete_milestone() {
    let temp_dir = create_cli_test_environment();
    create_site_prep(&temp_dir);
    add_task(&temp_dir, "Survey", "planned");

    derrick_cmd(&temp_dir)
        .args(["milestone", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Deleted milestone 1 (Site Prep) with 1 tasks",
        ));

    derrick_cmd(&temp_dir)
        .args(["milestone", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Milestone with ID 1 not found"));

    derrick_cmd(&temp_dir)
        .args(["progress", "well-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Overall: 0%"));
}

#[test]
fn test_cli_delete_task() {
    let temp_dir = create_cli_test_environment();
    create_site_prep(&temp_dir);
    add_task(&temp_dir, "Survey", "planned");

    derrick_cmd(&temp_dir)
        .args(["task", "delete", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted task 1 (Survey) from milestone 1",
        ));

    derrick_cmd(&temp_dir)
        .args(["task", "delete", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task with ID 1 not found in milestone 1"));
}

#[test]
fn test_cli_help_output() {
    Command::cargo_bin("derrick")
        .expect("Failed to find derrick binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("milestone"))
        .stdout(predicate::str::contains("task"))
        .stdout(predicate::str::contains("progress"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_cli_version_output() {
    Command::cargo_bin("derrick")
        .expect("Failed to find derrick binary")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("derrick"));
}

#[test]
fn test_cli_ignores_server_environment() {
    let temp_dir = create_cli_test_environment();

    derrick_cmd(&temp_dir)
        .env("DERRICK_PORT", "not-a-port")
        .env("DERRICK_BIND", "nowhere")
        .args(["milestone", "list", "well-7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No milestones found."));

    derrick_cmd(&temp_dir)
        .env("DERRICK_PORT", "70000")
        .args(["progress", "well-7", "--json"])
        .assert()
        .success();
}

#[test]
fn test_cli_invalid_strict_status_environment() {
    let temp_dir = create_cli_test_environment();

    derrick_cmd(&temp_dir)
        .env("DERRICK_STRICT_STATUS", "maybe")
        .args(["milestone", "list", "well-7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DERRICK_STRICT_STATUS"));
}

#[test]
fn test_serve_flags_override_invalid_environment() {
    let temp_dir = create_cli_test_environment();

    derrick_cmd(&temp_dir)
        .env("DERRICK_PORT", "not-a-port")
        .env("DERRICK_BIND", "nowhere")
        .env("RUST_LOG", "info")
        .args(["serve", "--bind", "127.0.0.1", "--port", "0"])
        .timeout(Duration::from_secs(3))
        .assert()
        .stderr(predicate::str::contains("Derrick API listening"))
        .stderr(predicate::str::contains("DERRICK_PORT").not())
        .stderr(predicate::str::contains("DERRICK_BIND").not());
}

#[test]
fn test_serve_rejects_invalid_port_environment() {
    let temp_dir = create_cli_test_environment();

    derrick_cmd(&temp_dir)
        .env("DERRICK_PORT", "not-a-port")
        .args(["serve", "--bind", "127.0.0.1"])
        .timeout(Duration::from_secs(10))
        .assert()
        .failure()
        .stderr(predicate::str::contains("DERRICK_PORT"));
}
