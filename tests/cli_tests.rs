//! Tests for the costwiz binary
//!
//! These tests verify:
//! - `show` output in text and JSON form, and strict toggle failures
//! - `steps` stopping where Next is disabled and printing the handoff
//! - `--catalog` accepted only by the commands that read it

use serde_json::json;
use std::process::{Command, Output};
use tempfile::TempDir;

fn costwiz(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_costwiz"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run costwiz binary")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// show
// =============================================================================

#[test]
fn test_show_defaults_to_empty_selection() {
    let output = costwiz(&["show"]);
    assert!(output.status.success());

    let text = stdout_of(&output);
    assert!(text.starts_with("0 options selected\n"));
    assert!(text.contains("[ ] Start/Stop Resources (start-stop-resources)"));
}

#[test]
fn test_show_json_after_deselect_keeps_remaining_items() {
    let output = costwiz(&[
        "show",
        "--json",
        "-t",
        "item:ec2@start-stop-resources",
        "-t",
        "item:rds@start-stop-resources",
        "-t",
        "item:light-sail@start-stop-resources",
        "-t",
        "item:amazon-neptune@start-stop-resources",
        "-t",
        "item:ec2@start-stop-resources",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        snapshot,
        json!({ "items": ["rds", "light-sail", "amazon-neptune"], "groups": [] })
    );
}

#[test]
fn test_show_ignores_unknown_toggle_by_default() {
    let output = costwiz(&["show", "-t", "item:nonexistent@start-stop-resources"]);
    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("0 options selected\n"));
}

#[test]
fn test_show_strict_fails_on_unknown_item() {
    let output = costwiz(&[
        "show",
        "--strict",
        "-t",
        "item:nonexistent@start-stop-resources",
    ]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("item 'nonexistent' not found"));
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn test_show_strict_fails_on_unknown_group() {
    let output = costwiz(&["show", "--strict", "-t", "group:nonexistent"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("group 'nonexistent' not found"));
}

// =============================================================================
// steps
// =============================================================================

#[test]
fn test_steps_without_selection_stops_at_select_actions() {
    let output = costwiz(&["steps", "-n", "3"]);
    assert!(output.status.success());

    let text = stdout_of(&output);
    assert!(text.contains("Step 2/4: Select Actions"));
    assert!(text.contains("Next disabled: Select at least one option before continuing"));
    assert!(!text.contains("Step 3/4"));
    assert!(!text.contains("Selected options"));
}

#[test]
fn test_steps_walks_to_last_step_and_hands_off_selection() {
    let output = costwiz(&["steps", "-t", "group:resource-cleanup", "-n", "5"]);
    assert!(output.status.success());

    let text = stdout_of(&output);
    assert!(text.contains("Step 3/4"));
    assert!(text.contains("Step 4/4"));
    assert!(text.contains("Next disabled: Already at the last step"));
    assert!(text.contains(
        "Selected options: terminate-ec2, delete-ebs-volume, delete-ebs-snapshot, \
         delete-rds, delete-rds-snapshot"
    ));
}

#[test]
fn test_steps_reads_catalog_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tree.json");
    let path_arg = path.to_str().unwrap();

    assert!(costwiz(&["init", path_arg]).status.success());

    let output = costwiz(&[
        "steps",
        "--catalog",
        path_arg,
        "-t",
        "item:rds@start-stop-resources",
        "-n",
        "1",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Selected options: rds"));
}

// =============================================================================
// --catalog placement
// =============================================================================

#[test]
fn test_catalog_flag_rejected_by_policy() {
    let output = costwiz(&["policy", "--catalog", "/nonexistent.json", "--actions"]);
    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn test_show_reports_missing_catalog() {
    let output = costwiz(&["show", "--catalog", "/nonexistent.json"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Failed to load tree definition"));
}
