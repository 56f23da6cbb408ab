//! Process-level tests against the demo binary: exit codes, fatal
//! diagnostics, and end-to-end log-file routing.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn accepts_first_within_the_limit() {
    Command::cargo_bin("optlog")
        .unwrap()
        .args(["-f", "3"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("optlog - Demonstrate a derived options parser")
                .and(predicate::str::contains("Command: -f 3"))
                .and(predicate::str::contains("First:   3"))
                .and(predicate::str::contains("This is a warning message"))
                .and(predicate::str::contains("This is a debug message").not()),
        );
}

#[test]
fn rejects_first_above_the_limit() {
    Command::cargo_bin("optlog")
        .unwrap()
        .args(["-f", "51"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("51").and(predicate::str::contains("50")))
        .stdout(predicate::str::contains("First:").not());
}

#[test]
fn unknown_flag_fails_with_usage() {
    Command::cargo_bin("optlog")
        .unwrap()
        .arg("--nope")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn malformed_value_fails_with_usage() {
    Command::cargo_bin("optlog")
        .unwrap()
        .args(["-f", "abc"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_run_prints_warnings_only() {
    Command::cargo_bin("optlog")
        .unwrap()
        .arg("-q")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("This is a warning message")
                .and(predicate::str::contains("Demonstrate").not())
                .and(predicate::str::contains("This is a debug message").not()),
        );
}

#[test]
fn verbose_run_includes_debug() {
    Command::cargo_bin("optlog")
        .unwrap()
        .arg("--verbose")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Command: --verbose")
                .and(predicate::str::contains("This is a debug message")),
        );
}

#[test]
fn log_file_matches_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.log");

    let assert = Command::cargo_bin("optlog")
        .unwrap()
        .args(["-v", "--log", path.to_str().unwrap()])
        .assert()
        .success();

    let stdout = assert.get_output().stdout.clone();
    let file = std::fs::read(&path).unwrap();
    assert_eq!(file, stdout);
}

#[test]
fn help_exits_zero_and_lists_logging_flags() {
    Command::cargo_bin("optlog")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Logging options:")
                .and(predicate::str::contains("--verbose"))
                .and(predicate::str::contains("--quiet"))
                .and(predicate::str::contains("--log")),
        );
}
