//! Integration tests for the non-interactive CLI surface

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

fn suggestfield() -> Command {
    Command::cargo_bin("suggestfield").unwrap()
}

#[test]
fn test_matches_prints_default_candidates_in_order() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");

    suggestfield()
        .arg("--config")
        .arg(&config)
        .args(["--matches", "Ma"])
        .assert()
        .success()
        .stdout("Mandarin\nMango\n");
}

#[test]
fn test_matches_is_case_sensitive() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");

    suggestfield()
        .arg("--config")
        .arg(&config)
        .args(["--matches", "ma"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_empty_matches_lists_nothing_by_default() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");

    suggestfield()
        .arg("--config")
        .arg(&config)
        .args(["--matches", ""])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_empty_matches_with_show_all_lists_all_candidates() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[suggestions]\nempty_input = \"show_all\"\n");

    let output = suggestfield()
        .arg("--config")
        .arg(&config)
        .args(["--matches", ""])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 17);
    assert_eq!(stdout.lines().next(), Some("Apple"));
}

#[test]
fn test_configured_candidates_and_show_all_policy() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        r#"
[suggestions]
candidates = ["Banana", "Apple", "Apricot"]
empty_input = "show_all"
"#,
    );

    suggestfield()
        .arg("--config")
        .arg(&config)
        .args(["--matches", "Ap"])
        .assert()
        .success()
        .stdout("Apple\nApricot\n");

    suggestfield()
        .arg("--config")
        .arg(&config)
        .args(["--matches", ""])
        .assert()
        .success()
        .stdout("Banana\nApple\nApricot\n");
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    suggestfield()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .args(["--matches", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read config file"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[panel]\nvisible_rows = 0\n");

    suggestfield()
        .arg("--config")
        .arg(&config)
        .args(["--matches", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("visible_rows"));
}

#[test]
fn test_help_lists_options() {
    suggestfield()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--matches"))
        .stdout(predicate::str::contains("--vertical-offset"));
}
