//! Integration tests for the orgscope CLI.
//!
//! GitHub requests are served from replay files, so no network is needed.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a replay file for the `google` organization into `dir`.
fn write_replay(dir: &TempDir) -> PathBuf {
    let replay = serde_json::json!({
        "https://api.github.com/orgs/google": {
            "login": "google",
            "name": "Google",
            "public_repos": 3,
            "repos_url": "https://api.github.com/orgs/google/repos"
        },
        "https://api.github.com/orgs/google/repos": [
            {"name": "episodes.dart", "license": {"key": "bsd-3-clause"}},
            {"name": "dagger", "license": {"key": "apache-2.0"}},
            {"name": "google.github.io", "license": null}
        ]
    });

    let path = dir.path().join("replay.json");
    fs::write(&path, serde_json::to_string(&replay).unwrap()).expect("Failed to write replay");
    path
}

fn orgscope(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("orgscope").expect("Failed to find orgscope binary");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    let temp = TempDir::new().unwrap();

    orgscope(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("repos"))
        .stdout(predicate::str::contains("random"));
}

#[test]
fn test_repos_lists_names_in_order() {
    let temp = TempDir::new().unwrap();
    let replay = write_replay(&temp);

    orgscope(&temp)
        .args(["--quiet", "repos", "google", "--replay"])
        .arg(&replay)
        .assert()
        .success()
        .stdout("episodes.dart\ndagger\ngoogle.github.io\n");
}

#[test]
fn test_repos_filters_by_license() {
    let temp = TempDir::new().unwrap();
    let replay = write_replay(&temp);

    orgscope(&temp)
        .args(["-q", "repos", "google", "--license", "apache-2.0", "--replay"])
        .arg(&replay)
        .assert()
        .success()
        .stdout("dagger\n");
}

#[test]
fn test_repos_json() {
    let temp = TempDir::new().unwrap();
    let replay = write_replay(&temp);

    let output = orgscope(&temp)
        .args(["repos", "google", "--json", "--replay"])
        .arg(&replay)
        .output()
        .unwrap();

    assert!(output.status.success());
    let repos: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        repos,
        serde_json::json!([
            {"name": "episodes.dart", "license": "bsd-3-clause"},
            {"name": "dagger", "license": "apache-2.0"},
            {"name": "google.github.io"}
        ])
    );
}

#[test]
fn test_org_summary_and_json() {
    let temp = TempDir::new().unwrap();
    let replay = write_replay(&temp);

    orgscope(&temp)
        .args(["org", "google", "--replay"])
        .arg(&replay)
        .assert()
        .success()
        .stdout(predicate::str::contains("Google"))
        .stdout(predicate::str::contains(
            "https://api.github.com/orgs/google/repos",
        ));

    let output = orgscope(&temp)
        .args(["org", "google", "--json", "--replay"])
        .arg(&replay)
        .output()
        .unwrap();
    let org: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(org["public_repos"], 3);
}

#[test]
fn test_unknown_org_fails() {
    let temp = TempDir::new().unwrap();
    let replay = write_replay(&temp);

    orgscope(&temp)
        .args(["repos", "nope", "--replay"])
        .arg(&replay)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no canned response"));
}

#[test]
fn test_invalid_replay_file_fails() {
    let temp = TempDir::new().unwrap();
    let replay = temp.path().join("replay.json");
    fs::write(&replay, "[1, 2, 3]").unwrap();

    orgscope(&temp)
        .args(["org", "google", "--replay"])
        .arg(&replay)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a JSON object"));
}

#[test]
fn test_random_collects_requested_count() {
    let temp = TempDir::new().unwrap();

    let output = orgscope(&temp)
        .args(["random", "--count", "5", "--delay-ms", "0", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let numbers: Vec<f64> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(numbers.len(), 5);
    assert!(numbers.iter().all(|n| (0.0..=10.0).contains(n)));
}

#[test]
fn test_random_uses_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("orgscope.toml"),
        "[collect]\ncount = 3\ndelay_ms = 0\nlow = 20.0\nhigh = 30.0\n",
    )
    .unwrap();

    let output = orgscope(&temp).args(["-q", "random"]).output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let numbers: Vec<f64> = stdout.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(numbers.len(), 3);
    assert!(numbers.iter().all(|n| (20.0..=30.0).contains(n)));
}

#[test]
fn test_infinite_range_in_config_fails_cleanly() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("orgscope.toml"),
        "[collect]\ndelay_ms = 0\nhigh = inf\n",
    )
    .unwrap();

    orgscope(&temp)
        .args(["random", "--count", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid range"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_runtime_reports_elapsed() {
    let temp = TempDir::new().unwrap();

    orgscope(&temp)
        .args(["runtime", "--parallel", "3", "--count", "2", "--delay-ms", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 collections of 2 numbers finished"))
        .stdout(predicate::str::is_match(r"\d+\.\d{3}s").unwrap());
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let temp = TempDir::new().unwrap();

    orgscope(&temp)
        .args(["-q", "-v", "random"])
        .assert()
        .failure();
}
