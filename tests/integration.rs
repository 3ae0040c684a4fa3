// Integration tests for the cwl-ranker CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the cwl-ranker binary.
fn ranker() -> Command {
    Command::cargo_bin("cwl-ranker").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    ranker()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cwl-ranker"));
}

#[test]
fn cli_help_flag() {
    ranker()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clan War League"));
}

#[test]
fn rank_requires_input() {
    ranker()
        .arg("rank")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn rank_rejects_zero_attacks_per_member() {
    ranker()
        .args(["rank", "league.json", "--attacks-per-member", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("attacks-per-member"));
}

#[test]
fn verbose_and_quiet_conflict() {
    ranker()
        .args(["-v", "-q", "multipliers"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn multipliers_prints_every_band() {
    ranker()
        .arg("multipliers")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.30 | Hero"))
        .stdout(predicate::str::contains("1.15 | Brave"))
        .stdout(predicate::str::contains("1.00 | Fair"))
        .stdout(predicate::str::contains("0.85 | Weak"))
        .stdout(predicate::str::contains("0.70 | Coward"));
}

#[test]
fn demo_ranks_sample_clan() {
    ranker()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("# CWL Leaderboard: TEST"))
        .stdout(predicate::str::contains("| 1 | Perfect Player (#PLAYER4)"));
}

#[test]
fn demo_json_marks_bonus_slots() {
    let output = ranker()
        .args(["demo", "--format", "json", "--bonus-slots", "2"])
        .output()
        .expect("demo should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    let members = value["members"].as_array().expect("members array");
    assert_eq!(members.len(), 5);
    let flagged = members
        .iter()
        .filter(|member| member["bonus"] == true)
        .count();
    assert_eq!(flagged, 2);
}
