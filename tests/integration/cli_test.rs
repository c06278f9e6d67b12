//! Integration tests for the command-line interface

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{fixtures_dir, temp_fixture};

/// Command with an isolated (absent) config file.
fn sceneplay(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sceneplay").unwrap();
    cmd.arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn inspect_prints_timeline() {
    let config_dir = TempDir::new().unwrap();
    let (_temp_dir, path) = temp_fixture("project.json");

    sceneplay(&config_dir)
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Project: Explain how gravity works"))
        .stdout(predicate::str::contains("Falling apple"))
        .stdout(predicate::str::contains("measured"))
        .stdout(predicate::str::contains("Total: 0:08 (1 of 3 scenes ready)"));
}

#[test]
fn inspect_applies_updates_and_reports_malformed_lines() {
    let config_dir = TempDir::new().unwrap();

    sceneplay(&config_dir)
        .arg("inspect")
        .arg(fixtures_dir().join("project.json"))
        .arg("--updates")
        .arg(fixtures_dir().join("updates.jsonl"))
        .arg("--at")
        .arg("9")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 0:30 (3 of 3 scenes ready)"))
        .stdout(predicate::str::contains("At 9.0s: scene 2 (+1.0s)"))
        .stderr(predicate::str::contains("Discarded 1 malformed update(s)"));
}

#[test]
fn inspect_missing_snapshot_fails() {
    let config_dir = TempDir::new().unwrap();

    sceneplay(&config_dir)
        .arg("inspect")
        .arg("/nonexistent/project.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read snapshot"));
}

#[test]
fn config_show_prints_defaults() {
    let config_dir = TempDir::new().unwrap();

    sceneplay(&config_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[player]"))
        .stdout(predicate::str::contains("fallback_duration = 10.0"))
        .stdout(predicate::str::contains("base_url = \"http://localhost:8000\""));
}

#[test]
fn config_path_reports_override() {
    let config_dir = TempDir::new().unwrap();

    sceneplay(&config_dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml (not created)"));
}

#[test]
fn invalid_config_is_rejected() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        "[player]\nend_nudge = 0.0\n",
    )
    .unwrap();

    sceneplay(&config_dir)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("player.end_nudge"));
}

#[test]
fn completions_generate_for_bash() {
    let config_dir = TempDir::new().unwrap();

    sceneplay(&config_dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sceneplay"));
}
