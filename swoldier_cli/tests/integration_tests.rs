//! Integration tests for the swoldier binary.
//!
//! These tests verify end-to-end behavior including:
//! - Catalog listing
//! - Workout generation and validation errors
//! - History logging, querying and CSV export
//! - Profile updates

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("swoldier"))
}

fn generate_json(args: &[&str]) -> Vec<Value> {
    let output = cli()
        .arg("generate")
        .args(args)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).expect("stdout should be JSON");
    value.as_array().expect("workout should be an array").clone()
}

fn complete_workout(data_dir: &Path, split: &str, group: &str, goal: &str) {
    cli()
        .arg("generate")
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--split", split, "--group", group, "--goal", goal])
        .arg("--complete")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout logged"));
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout generator"));
}

#[test]
fn test_default_command_lists_catalog() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("bro split"))
        .stdout(predicate::str::contains("push"))
        .stdout(predicate::str::contains("growth_hypertrophy"));
}

#[test]
fn test_catalog_single_split() {
    cli()
        .args(["catalog", "--split", "upper_lower"])
        .assert()
        .success()
        .stdout(predicate::str::contains("groups: lower, upper"))
        .stdout(predicate::str::contains("bro split").not());
}

#[test]
fn test_generate_json_structure() {
    let workout = generate_json(&[
        "--split",
        "individual",
        "--group",
        "chest",
        "--group",
        "back",
        "--goal",
        "growth_hypertrophy",
        "--count",
        "3",
        "--seed",
        "42",
    ]);

    assert_eq!(workout.len(), 6);
    assert!(workout[..3].iter().all(|e| e["source_group"] == "chest"));
    assert!(workout[3..].iter().all(|e| e["source_group"] == "back"));
    for exercise in &workout {
        assert_eq!(exercise["sets"], 4);
        assert_eq!(exercise["reps"]["min"], 8);
        assert_eq!(exercise["reps"]["max"], 12);
        assert_eq!(exercise["tempo"], "3 0 1");
    }
}

#[test]
fn test_generate_same_seed_is_reproducible() {
    let args = [
        "--split", "bro_split", "--group", "pull", "--goal", "strength_power", "--seed", "7",
    ];
    assert_eq!(generate_json(&args), generate_json(&args));
}

#[test]
fn test_generate_text_output() {
    cli()
        .args(["generate", "--split", "bodybuilder_split", "-g", "arms"])
        .args(["--goal", "cardiovascular_endurance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CARDIOVASCULAR ENDURANCE WORKOUT"))
        .stdout(predicate::str::contains("[arms]"))
        .stdout(predicate::str::contains("3 sets x 15-20 reps"));
}

#[test]
fn test_generate_requires_a_group() {
    cli()
        .args(["generate", "--split", "bro_split", "--goal", "strength_power"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Select at least one muscle group"));
}

#[test]
fn test_generate_rejects_unknown_goal() {
    cli()
        .args(["generate", "--split", "individual", "-g", "chest", "--goal", "unknown_goal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown goal: unknown_goal"));
}

#[test]
fn test_generate_rejects_invalid_split() {
    cli()
        .args(["generate", "--split", "bogus", "-g", "chest", "--goal", "strength_power"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid split type: bogus"));
}

#[test]
fn test_generate_rejects_unknown_group() {
    cli()
        .args(["generate", "--split", "bro_split", "-g", "chest", "--goal", "strength_power"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown group 'chest'"));
}

#[test]
fn test_generate_enforces_selection_arity() {
    cli()
        .args(["generate", "--split", "upper_lower", "-g", "upper", "-g", "lower"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one group"));

    cli()
        .args(["generate", "--split", "individual"])
        .args(["-g", "chest", "-g", "back", "-g", "abs", "-g", "quads"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 3"));
}

#[test]
fn test_generate_canonicalizes_group_names() {
    let workout = generate_json(&["--split", "bro_split", "-g", "Push", "--seed", "5"]);
    assert!(!workout.is_empty());
    assert!(workout.iter().all(|e| e["source_group"] == "push"));

    cli()
        .args(["generate", "--split", "individual", "-g", "chest", "-g", "CHEST"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("selected twice"));
}

#[test]
fn test_generate_without_complete_does_not_log() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli()
        .arg("generate")
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--split", "individual", "-g", "abs"])
        .assert()
        .success();

    assert!(!data_dir.join("history.jsonl").exists());
    assert!(!data_dir.join("profile.json").exists());
}

#[test]
fn test_complete_logs_history_and_profile() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    complete_workout(data_dir, "individual", "chest", "strength_power");

    let history = fs::read_to_string(data_dir.join("history.jsonl")).expect("history exists");
    assert_eq!(history.lines().count(), 1);
    let record: Value = serde_json::from_str(history.lines().next().unwrap()).unwrap();
    assert_eq!(record["split"], "individual");
    assert_eq!(record["goal"], "strength_power");
    assert_eq!(record["groups"][0], "chest");
    assert!(!record["exercises"].as_array().unwrap().is_empty());

    let profile: Value =
        serde_json::from_str(&fs::read_to_string(data_dir.join("profile.json")).unwrap())
            .unwrap();
    assert_eq!(profile["workouts_completed"], 1);
    assert_eq!(profile["streak"], 1);
}

#[test]
fn test_history_summary_and_filters() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    complete_workout(data_dir, "individual", "chest", "strength_power");
    complete_workout(data_dir, "bro_split", "legs", "growth_hypertrophy");
    complete_workout(data_dir, "individual", "chest", "growth_hypertrophy");

    cli()
        .arg("history")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total workouts: 3"))
        .stdout(predicate::str::contains("Time spent:     135 mins"))
        .stdout(predicate::str::contains("Favorite goal:  growth hypertrophy"));

    let output = cli()
        .arg("history")
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--search", "legs", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let records: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert_eq!(records[0]["split"], "bro_split");

    let output = cli()
        .arg("history")
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--goal", "growth_hypertrophy", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let records: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 2);
}

#[test]
fn test_empty_history() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("history")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No workouts found"));
}

#[test]
fn test_export_creates_csv() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    for _ in 0..2 {
        complete_workout(data_dir, "upper_lower", "upper", "strength_power");
    }

    cli()
        .arg("export")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("from 2 workouts"));

    let csv_content = fs::read_to_string(data_dir.join("history.csv")).expect("csv exists");
    assert!(csv_content.starts_with("record_id,date,split,goal,group,exercise"));
    // header + 4 exercises per workout
    assert_eq!(csv_content.lines().count(), 9);
}

#[test]
fn test_empty_export() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("export")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to export"));
}

#[test]
fn test_profile_update_persists() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path();

    cli()
        .arg("profile")
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--name", "Jordan", "--level", "Advanced"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jordan"));

    complete_workout(data_dir, "individual", "glutes", "cardiovascular_endurance");

    cli()
        .arg("profile")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Advanced"))
        .stdout(predicate::str::contains("Workouts completed: 1"));
}
