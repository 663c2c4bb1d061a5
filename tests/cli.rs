//! End-to-end CLI smoke tests.
//!
//! Each test runs the binary against a throwaway HOME so nothing touches
//! the real `~/.repkit`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn repkit(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("repkit").expect("binary builds");
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    repkit(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("workouts"));
}

#[test]
fn exercises_lists_library() {
    let home = TempDir::new().unwrap();
    repkit(&home)
        .arg("exercises")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plank"))
        .stdout(predicate::str::contains("Burpees"));
}

#[test]
fn workouts_all_lists_catalog() {
    let home = TempDir::new().unwrap();
    repkit(&home)
        .args(["workouts", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HIIT 20min"))
        .stdout(predicate::str::contains("Easy Start 10min"));
}

#[test]
fn workouts_json_is_machine_readable() {
    let home = TempDir::new().unwrap();
    let output = repkit(&home)
        .args(["workouts", "--all", "-o", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(parsed["count"], 15);
}

#[test]
fn history_starts_empty() {
    let home = TempDir::new().unwrap();
    repkit(&home)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts logged yet"));
}

#[test]
fn habits_seed_defaults() {
    let home = TempDir::new().unwrap();
    repkit(&home)
        .args(["habits", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning Checklist"))
        .stdout(predicate::str::contains("No Sugar"));
}

#[test]
fn water_counts_up() {
    let home = TempDir::new().unwrap();
    repkit(&home)
        .args(["water", "add", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 / 8 glasses"));
}

#[test]
fn social_shows_leaderboard() {
    let home = TempDir::new().unwrap();
    repkit(&home)
        .arg("social")
        .assert()
        .success()
        .stdout(predicate::str::contains("Omkar"))
        .stdout(predicate::str::contains("Weekly Challenge"));
}

#[test]
fn start_rejects_unknown_workout() {
    let home = TempDir::new().unwrap();
    repkit(&home)
        .args(["start", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn build_saves_a_custom_workout() {
    let home = TempDir::new().unwrap();
    repkit(&home)
        .args([
            "build",
            "--name",
            "Smoke Test",
            "--exercises",
            "plank,squats",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom-smoke-test"));

    // It shows up in the catalog afterwards.
    repkit(&home)
        .args(["workouts", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smoke Test"));
}

#[test]
fn build_rejects_unknown_exercise() {
    let home = TempDir::new().unwrap();
    repkit(&home)
        .args(["build", "--name", "Bad", "--exercises", "bench-press"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bench-press"));
}

#[test]
fn meal_errors_on_missing_image() {
    let home = TempDir::new().unwrap();
    repkit(&home)
        .args(["meal", "/nonexistent/photo.jpg"])
        .assert()
        .failure();
}

#[test]
fn completions_generate() {
    let home = TempDir::new().unwrap();
    repkit(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("repkit"));
}

#[test]
fn profile_requires_onboarding() {
    let home = TempDir::new().unwrap();
    repkit(&home)
        .arg("profile")
        .assert()
        .failure()
        .stderr(predicate::str::contains("onboard"));
}
