use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn optifit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("optifit").expect("Failed to find optifit binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_default_lists_seeded_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    optifit_cmd()
        .args(["--database-file", db_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Workout Plan"))
        .stdout(predicate::str::contains("Full Body"))
        .stdout(predicate::str::contains("Cardio & Core"))
        .stdout(predicate::str::contains("Upper Body"));
}

#[test]
fn test_cli_plan_list_shows_status_and_duration() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    optifit_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(Complete)"))
        .stdout(predicate::str::contains("(40 min)"))
        .stdout(predicate::str::contains("(45 min)"));
}

#[test]
fn test_cli_add_workout() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    optifit_cmd()
        .args([
            "--database-file",
            db_arg,
            "plan",
            "add",
            "Day 4",
            "Leg Day",
            "--duration",
            "30 min",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added workout 'Leg Day' (id: leg_day)"));

    // The addition is persisted across invocations
    optifit_cmd()
        .args(["--database-file", db_arg, "plan", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Leg Day"))
        .stdout(predicate::str::contains("(30 min)"));
}

#[test]
fn test_cli_add_workout_without_duration() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    optifit_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "plan",
            "add",
            "Day 4",
            "Stretching",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("id: stretching"));
}

#[test]
fn test_cli_add_workout_blank_name_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    optifit_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "plan",
            "add",
            "Day 4",
            "  ",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Workout not saved"));
}

#[test]
fn test_cli_session_record_and_list() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    optifit_cmd()
        .args([
            "--database-file",
            db_arg,
            "session",
            "record",
            "Full Body",
            "2712",
            "--rating",
            "4",
            "--feedback",
            "Felt strong",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded session with ID: 1"))
        .stdout(predicate::str::contains("00:45:12"));

    optifit_cmd()
        .args(["--database-file", db_arg, "session", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Workout Sessions"))
        .stdout(predicate::str::contains("Full Body"))
        .stdout(predicate::str::contains("4/5"))
        .stdout(predicate::str::contains("Felt strong"));
}

#[test]
fn test_cli_session_record_invalid_rating_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    optifit_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "session",
            "record",
            "Full Body",
            "600",
            "--rating",
            "6",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_session_list_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    optifit_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "session", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions recorded."));
}
