use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ISSUES: &str = r#"[
    {
        "number": 1,
        "title": "Crash on startup",
        "state": "open",
        "body": "It crashes.",
        "labels": [],
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-02T00:00:00Z"
    },
    {
        "number": 2,
        "title": "Old request",
        "state": "closed",
        "body": null,
        "labels": [],
        "created_at": "2023-05-01T00:00:00Z",
        "updated_at": "2023-06-01T00:00:00Z"
    }
]"#;

/// Runs the binary inside `dir` so no stray `.env` or `issues.json` leaks in.
fn triage(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_issue-triage"));
    cmd.current_dir(dir)
        .env_remove("ISSUES_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_file_exits_with_error_and_no_output() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    triage(dir.path())
        .arg("-i")
        .arg(&missing)
        .arg("open")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::starts_with("Error: Could not open issues file")
                .and(predicate::str::contains("nope.json"))
                .and(predicate::str::contains("Caused by: ")),
        );
}

#[test]
fn malformed_json_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("issues.json");
    fs::write(&path, r#"[{"number": 1"#).unwrap();

    triage(dir.path())
        .arg("-i")
        .arg(&path)
        .arg("list")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Could not load issues from"));
}

#[test]
fn reads_issues_json_in_working_directory_by_default() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("issues.json"), ISSUES).unwrap();

    triage(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Total issues found: 2\n"));
}

#[test]
fn env_var_used_without_input_flag() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("export.json");
    fs::write(&path, ISSUES).unwrap();

    triage(dir.path())
        .env("ISSUES_FILE", &path)
        .arg("open")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Total open issues found: 1\n")
                .and(predicate::str::contains(" 1. #  1 - CRITICAL - Crash on startup")),
        );
}

#[test]
fn input_flag_wins_over_env_var() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("export.json");
    fs::write(&path, ISSUES).unwrap();

    triage(dir.path())
        .env("ISSUES_FILE", dir.path().join("missing.json"))
        .arg("--input")
        .arg(&path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("\n2. Issue #2\n"));
}

#[test]
fn dotenv_file_supplies_input_path() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("export.json"), ISSUES).unwrap();
    fs::write(dir.path().join(".env"), "ISSUES_FILE=export.json\n").unwrap();

    triage(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Total issues found: 2\n"));
}
