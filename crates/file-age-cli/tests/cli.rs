//! End-to-end checks of the is-older-than binary: exit codes, stdout
//! confirmation lines, and stderr diagnostics.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("is-older-than").expect("binary builds")
}

/// A file created moments ago, so every threshold yields "not older".
fn fresh_file(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("fresh.log");
    fs::write(&path, b"contents").expect("write temp file");
    path
}

// ── Argument errors ─────────────────────────────────────────────────────────

#[test]
fn missing_filepath_exits_1_with_usage() {
    cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_option_exits_1() {
    cmd()
        .args(["some-file.log", "--bogus"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn missing_option_value_exits_1() {
    cmd().args(["some-file.log", "--days"]).assert().code(1);
}

#[test]
fn help_exits_0_and_lists_options() {
    cmd()
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("--days"))
        .stdout(predicate::str::contains("--exact"))
        .stdout(predicate::str::contains("Exit codes"));
}

#[test]
fn version_exits_0() {
    cmd().arg("--version").assert().code(0);
}

// ── Combination and value errors (checked before any file access) ───────────

#[test]
fn days_combined_with_months_exits_4() {
    cmd()
        .args(["no-such-file.log", "--days", "3", "--months", "2"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("--days excludes"));
}

#[test]
fn weeks_combined_with_years_exits_4() {
    cmd()
        .args(["no-such-file.log", "--weeks", "2", "--years", "1"])
        .assert()
        .code(4);
}

#[test]
fn twelve_months_with_years_exits_4() {
    cmd()
        .args(["no-such-file.log", "--months", "12", "--years", "1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("capped at 11"));
}

#[test]
fn non_numeric_value_exits_5() {
    cmd()
        .args(["no-such-file.log", "--days", "abc"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn zero_value_exits_5() {
    cmd()
        .args(["no-such-file.log", "--days", "0"])
        .assert()
        .code(5);
}

#[test]
fn negative_value_exits_5() {
    cmd()
        .args(["no-such-file.log", "--weeks", "-4"])
        .assert()
        .code(5);
}

#[test]
fn absurdly_large_years_exits_5() {
    cmd()
        .args(["no-such-file.log", "--years", "10000"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("at most 1000"));
}

// ── File errors ─────────────────────────────────────────────────────────────

#[test]
fn nonexistent_file_exits_2() {
    let dir = tempfile::tempdir().expect("temp dir");
    cmd()
        .arg(dir.path().join("absent.log"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("file not found"));
}

// ── Verdicts ────────────────────────────────────────────────────────────────

#[test]
fn fresh_file_is_not_older_under_default_threshold() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = fresh_file(&dir);
    cmd()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("is NOT older than specified period"));
}

#[test]
fn fresh_file_is_not_older_with_exact_day_threshold() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = fresh_file(&dir);
    cmd()
        .args([path.to_str().expect("utf-8 path"), "--days", "1", "--exact"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("NOT older"));
}

#[test]
fn fresh_file_is_not_older_with_combined_months_years() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = fresh_file(&dir);
    cmd()
        .args([path.to_str().expect("utf-8 path"), "--months", "11", "--years", "1"])
        .assert()
        .code(1);
}

#[test]
fn json_report_carries_verdict_and_instants() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = fresh_file(&dir);
    let output = cmd()
        .args([path.to_str().expect("utf-8 path"), "--json"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout is well-formed JSON");
    assert_eq!(report["older"], serde_json::Value::Bool(false));
    assert!(report["file_time"].is_string());
    assert!(report["reference_time"].is_string());
    assert!(report["file"].as_str().expect("file field").ends_with("fresh.log"));
}
