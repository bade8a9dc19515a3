// Surface tests for the pressure-quiz CLI: argument parsing, listings and the
// catalog self-check. Scoring flows live in cli_flows.rs.

use assert_cmd::Command;
use predicates::prelude::*;

fn quiz() -> Command {
    Command::cargo_bin("pressure-quiz").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    quiz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pressure-quiz"));
}

#[test]
fn cli_help_flag() {
    quiz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spring Festival pressure quiz"));
}

#[test]
fn score_requires_answers() {
    quiz()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    quiz()
        .args(["-q", "-v", "check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn check_reports_builtin_catalog_ok() {
    quiz()
        .arg("check")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("catalog ok (25 questions, 8 tiers)"));
}

#[test]
fn questions_json_lists_all_25() {
    let output = quiz()
        .args(["questions", "--format", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    let questions = value["questions"].as_array().expect("questions array");
    assert_eq!(questions.len(), 25);
    assert_eq!(questions[0]["dimension"], "EXTERNAL");
    assert_eq!(questions[9]["dimension"], "INTERNAL");
    assert_eq!(questions[24]["dimension"], "DEFENSE");
}

#[test]
fn tiers_markdown_lists_each_range() {
    quiz()
        .arg("tiers")
        .assert()
        .success()
        .stdout(predicate::str::contains("LV.1 春节隐身王者 (0-12)"))
        .stdout(predicate::str::contains("LV.8 春节逃离计划 (91-100)"));
}
