//! timesaved バイナリの統合テスト

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const INVALID_SECONDS: &str = "Invalid time in seconds. It must be a non-negative integer.";

fn timesaved(db_path: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timesaved");
    cmd.arg("--db").arg(db_path);
    cmd
}

#[test]
fn test_no_args_prints_usage() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timesaved");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Usage: timesaved <mode>"))
        .stdout(predicate::str::contains("Read usage: timesaved read"));
}

#[test]
fn test_unknown_mode_prints_usage() {
    let temp_dir = TempDir::new().unwrap();
    timesaved(&temp_dir.path().join("TimeSaved.db"))
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage: timesaved <mode>"));
}

#[test]
fn test_read_without_records() {
    let temp_dir = TempDir::new().unwrap();
    timesaved(&temp_dir.path().join("TimeSaved.db"))
        .arg("read")
        .assert()
        .success()
        .stdout("No time saved records found.\n");
}

#[test]
fn test_invalid_seconds_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("TimeSaved.db");

    for bad in ["abc", "-5", "1.5"] {
        timesaved(&db_path)
            .args(["record", "Rust", bad])
            .assert()
            .success()
            .stdout(format!("{}\n", INVALID_SECONDS));
    }

    timesaved(&db_path)
        .arg("read")
        .assert()
        .success()
        .stdout("No time saved records found.\n");
}

#[test]
fn test_record_then_read() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("data").join("TimeSaved.db");

    timesaved(&db_path)
        .args(["record", "Rust", "120"])
        .assert()
        .success()
        .stdout("");
    assert!(db_path.exists());

    timesaved(&db_path)
        .arg("read")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Time saved by tool since "))
        .stdout(predicate::str::contains("Rust: 2 minutes\n"));
}

#[test]
fn test_totals_are_summed_per_tool() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("TimeSaved.db");

    for (tool, seconds) in [("A", "30"), ("A", "45"), ("B", "7200")] {
        timesaved(&db_path)
            .args(["record", tool, seconds])
            .assert()
            .success();
    }

    timesaved(&db_path)
        .args(["read", "--sort", "duration"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B: 2 hours\nA: 1 minutes\n"));
}

#[test]
fn test_mode_is_case_insensitive() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("TimeSaved.db");

    timesaved(&db_path)
        .args(["RECORD", "Copilot", "59"])
        .assert()
        .success();

    timesaved(&db_path)
        .arg("Read")
        .assert()
        .success()
        .stdout(predicate::str::contains("Copilot: 59 seconds"));
}

#[test]
fn test_wrong_arg_count_prints_usage() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("TimeSaved.db");

    timesaved(&db_path)
        .args(["record", "Rust"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage: timesaved <mode>"));
    assert!(!db_path.exists());
}

#[test]
fn test_logs_go_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    timesaved(&temp_dir.path().join("TimeSaved.db"))
        .env("RUST_LOG", "debug")
        .arg("read")
        .assert()
        .success()
        .stdout("No time saved records found.\n")
        .stderr(predicate::str::contains("TimeSaved"));
}

#[test]
fn test_read_ignores_extra_args() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("TimeSaved.db");

    timesaved(&db_path)
        .args(["record", "Rust", "120"])
        .assert()
        .success();

    timesaved(&db_path)
        .args(["read", "extra"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Time saved by tool since "))
        .stdout(predicate::str::contains("Rust: 2 minutes\n"));
}

#[test]
fn test_seconds_above_i32_max_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("TimeSaved.db");

    timesaved(&db_path)
        .args(["record", "Big", "3000000000"])
        .assert()
        .success()
        .stdout(format!("{}\n", INVALID_SECONDS));
    assert!(!db_path.exists());
}

#[test]
fn test_tool_named_like_help_flag_is_recorded() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("TimeSaved.db");

    timesaved(&db_path)
        .args(["record", "-h", "5"])
        .assert()
        .success()
        .stdout("");

    timesaved(&db_path)
        .arg("read")
        .assert()
        .success()
        .stdout(predicate::str::contains("-h: 5 seconds\n"));
}

#[test]
fn test_help_prints_usage() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("timesaved");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage: timesaved <mode>"));
}
