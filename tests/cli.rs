//! End-to-end tests for the evrcmp binary's exit-code interface.

use assert_cmd::Command;
use predicates::prelude::*;

fn evrcmp() -> Command {
    Command::cargo_bin("evrcmp").expect("binary builds")
}

#[test]
fn equal_evrs_exit_zero_and_stay_silent() {
    evrcmp()
        .args(["2:1.5-3", "2:1.5-3"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty());
}

#[test]
fn first_newer_exits_255() {
    evrcmp().args(["2.0", "1.0"]).assert().code(255);
}

#[test]
fn second_newer_exits_one() {
    evrcmp().args(["1.0", "2.0"]).assert().code(1);
}

#[test]
fn epoch_dominates_end_to_end() {
    evrcmp().args(["1:1.0-1", "0:99.0-1"]).assert().code(255);
}

#[test]
fn numeric_comparison_beats_lexical() {
    evrcmp().args(["1.10", "1.9"]).assert().code(255);
}

#[test]
fn tilde_marks_a_prerelease() {
    evrcmp().args(["1.0~rc1", "1.0"]).assert().code(1);
}

#[test]
fn missing_argument_prints_usage_on_stdout() {
    evrcmp()
        .arg("1.0")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn extra_argument_prints_usage_on_stdout() {
    evrcmp()
        .args(["1.0", "2.0", "3.0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn malformed_epoch_reports_parse_error() {
    evrcmp()
        .args(["x:1.0", "1.0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("non-numeric epoch"));
}

#[test]
fn empty_argument_reports_parse_error() {
    evrcmp()
        .args(["1.0", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("empty version string"));
}

#[test]
fn json_format_reports_the_ordering() {
    evrcmp()
        .args(["--format", "json", "2.0-1", "1.0-1"])
        .assert()
        .code(255)
        .stdout(predicate::str::contains("\"ordering\": \"newer\""));
}
