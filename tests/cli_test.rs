//! CLI surface tests
//!
//! Argument handling only; nothing here reaches the network.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_missing_directory_argument_fails() {
    Command::cargo_bin("imgsync")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("DIRECTORY"));
}

#[test]
fn test_help_describes_usage() {
    Command::cargo_bin("imgsync")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory containing images"));
}

#[test]
fn test_nonexistent_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("imgsync")
        .unwrap()
        .arg(dir.path())
        .args(["--config", "/nonexistent/imgsync.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}
