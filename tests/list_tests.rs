//! Integration tests for last, stats, check and clear

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

mod common;
use common::moodlog_cmd;

fn add(dir: &Path, text: &str) {
    moodlog_cmd()
        .current_dir(dir)
        .arg("add")
        .arg(text)
        .assert()
        .success();
}

#[test]
fn test_no_command_prints_help() {
    moodlog_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_last_no_entries() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("last")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn test_last_defaults_to_three() {
    let temp = TempDir::new().unwrap();
    for text in ["entry one", "entry two", "entry three", "entry four"] {
        add(temp.path(), text);
    }

    let output = moodlog_cmd()
        .current_dir(temp.path())
        .arg("last")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("Last 3 entries"));
    assert!(!stdout.contains("entry one"));
    // Oldest of the slice first
    let two = stdout.find("entry two").unwrap();
    let four = stdout.find("entry four").unwrap();
    assert!(two < four);
    assert!(stdout.contains("1. ["));
    assert!(stdout.contains("3. ["));
}

#[test]
fn test_last_with_n() {
    let temp = TempDir::new().unwrap();
    for text in ["entry one", "entry two"] {
        add(temp.path(), text);
    }

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("last")
        .arg("--n")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Last 1 entries"))
        .stdout(predicate::str::contains("entry two"))
        .stdout(predicate::str::contains("entry one").not());

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("last")
        .arg("--n")
        .arg("10")
        .assert()
        .success()
        .stdout(predicate::str::contains("Last 2 entries"));
}

#[test]
fn test_last_rejects_zero() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("last")
        .arg("--n")
        .arg("0")
        .assert()
        .failure();
}

#[test]
fn test_last_malformed_journal() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(temp.path().join("data/journal.json"), "{ broken").unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("last")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn test_stats_breakdown() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "I'm crushing it at work today");
    add(temp.path(), "the workload is crushing me");

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood Statistics (last 2 entries)"))
        .stdout(predicate::str::contains("positive: 1 (50.0%)"))
        .stdout(predicate::str::contains("negative: 1 (50.0%)"))
        .stdout(predicate::str::contains("high: 1 (50.0%)"))
        .stdout(predicate::str::contains("high_stress: 1 (50.0%)"));
}

#[test]
fn test_stats_no_entries() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .arg("--n")
        .arg("5")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn test_check_does_not_save() {
    let temp = TempDir::new().unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("check")
        .arg("the workload is crushing me")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood: negative"))
        .stdout(predicate::str::contains("Energy: high_stress"))
        .stdout(predicate::str::contains("Decided by: verb_rule"))
        .stdout(predicate::str::contains("Emoji valence: 0.000"));

    assert!(!temp.path().join("data").exists());
}

#[test]
fn test_check_blank_text() {
    moodlog_cmd()
        .arg("check")
        .arg("  ")
        .assert()
        .success()
        .stdout(predicate::str::contains("Energy: low"))
        .stdout(predicate::str::contains("Decided by: empty_input"));
}

#[test]
fn test_clear() {
    let temp = TempDir::new().unwrap();
    add(temp.path(), "entry one");

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("All entries cleared."));

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("last")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}
