//! Integration tests for list command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{mindmend_cmd, read_entries_json};

fn log(temp: &TempDir, mood: &str) {
    mindmend_cmd()
        .current_dir(temp.path())
        .arg("log")
        .arg(mood)
        .assert()
        .success();
}

#[test]
fn test_list_no_entries() {
    let temp = TempDir::new().unwrap();

    mindmend_cmd().arg("init").arg(temp.path()).assert().success();

    mindmend_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_list_newest_first() {
    let temp = TempDir::new().unwrap();

    mindmend_cmd().arg("init").arg(temp.path()).assert().success();

    log(&temp, "happy");
    log(&temp, "sad");

    let output = mindmend_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("1  😢 Sad"));
    assert!(lines[1].contains("2  😊 Happy"));
}

#[test]
fn test_list_default_limit_from_config() {
    let temp = TempDir::new().unwrap();

    mindmend_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--display-limit")
        .arg("2")
        .assert()
        .success();

    log(&temp, "happy");
    log(&temp, "sad");
    log(&temp, "angry");

    let output = mindmend_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();

    // Only the 2 newest entries are shown
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("Angry"));
    assert!(stdout.contains("Sad"));
    assert!(!stdout.contains("Happy"));
}

#[test]
fn test_list_with_limit() {
    let temp = TempDir::new().unwrap();

    mindmend_cmd().arg("init").arg(temp.path()).assert().success();

    log(&temp, "happy");
    log(&temp, "sad");
    log(&temp, "angry");

    let output = mindmend_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--limit")
        .arg("1")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("Angry"));
}

#[test]
fn test_list_all_shows_everything() {
    let temp = TempDir::new().unwrap();

    mindmend_cmd().arg("init").arg(temp.path()).assert().success();

    for mood in ["happy", "sad", "angry", "tired", "anxious", "stressed", "neutral"] {
        log(&temp, mood);
    }

    // Default run caps at the configured display limit
    let capped = mindmend_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();
    assert_eq!(String::from_utf8(capped.stdout).unwrap().lines().count(), 5);

    // --all shows as many lines as the store holds
    let all = mindmend_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--all")
        .output()
        .unwrap();

    let stored = read_entries_json(temp.path()).unwrap();
    assert_eq!(
        String::from_utf8(all.stdout).unwrap().lines().count(),
        stored.as_array().unwrap().len()
    );
}

#[test]
fn test_list_shows_notes() {
    let temp = TempDir::new().unwrap();

    mindmend_cmd().arg("init").arg(temp.path()).assert().success();

    mindmend_cmd()
        .current_dir(temp.path())
        .arg("log")
        .arg("tired")
        .arg("-n")
        .arg("long day")
        .assert()
        .success();

    mindmend_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("😴 Tired"))
        .stdout(predicate::str::contains("Note: long day"));
}

#[test]
fn test_list_limit_conflicts_with_all() {
    let temp = TempDir::new().unwrap();

    mindmend_cmd().arg("init").arg(temp.path()).assert().success();

    mindmend_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("--limit")
        .arg("2")
        .arg("--all")
        .assert()
        .failure();
}

#[test]
fn test_list_corrupt_blob_reads_empty() {
    let temp = TempDir::new().unwrap();

    mindmend_cmd().arg("init").arg(temp.path()).assert().success();

    log(&temp, "happy");

    // Clobber the stored blob with something undecodable
    fs::write(
        temp.path().join(".mindmend/prefs.json"),
        "{\"mood_entries_json\": \"not-json\"}",
    )
    .unwrap();

    mindmend_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_list_not_in_journal_directory() {
    let temp = TempDir::new().unwrap();

    mindmend_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure();
}
