//! End-to-end tests of the CLI binaries

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_solve_prints_superstring() {
    Command::cargo_bin("superstring_solve")
        .unwrap()
        .args(["abc", "bcd", "cde"])
        .assert()
        .success()
        .stdout("abcde\n");
}

#[test]
fn test_solve_details_and_verify() {
    Command::cargo_bin("superstring_solve")
        .unwrap()
        .args(["--details", "--verify", "xyz", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("abcxyz\n"))
        .stdout(predicate::str::contains("Length: 6"))
        .stdout(predicate::str::contains("Merge order: [1, 0]"));
}

#[test]
fn test_solve_no_arguments_prints_empty_line() {
    Command::cargo_bin("superstring_solve")
        .unwrap()
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_solve_rejects_too_many_strings() {
    Command::cargo_bin("superstring_solve")
        .unwrap()
        .args(["--max-strings", "2", "a", "b", "c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resource exhaustion"));
}

#[test]
fn test_solve_max_strings_from_env() {
    Command::cargo_bin("superstring_solve")
        .unwrap()
        .env("SUPERSTRING_MAX_STRINGS", "1")
        .args(["a", "b"])
        .assert()
        .failure();
}

#[test]
fn test_batch_writes_results() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cases.jsonl");
    fs::write(&input, "[\"abc\", \"bcd\", \"cde\"]\n[\"a\", null]\n").unwrap();

    Command::cargo_bin("superstring_batch")
        .unwrap()
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Solved 1 of 2 instances"))
        .stdout(predicate::str::contains("Rejected: 1 invalid, 0 too large."));

    let results = fs::read_to_string(dir.path().join("cases.solved.jsonl")).unwrap();
    let lines: Vec<&str> = results.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("\"superstring\":\"abcde\""));
    assert!(lines[1].contains("\"error\""));
}

#[test]
fn test_batch_custom_output_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cases.jsonl");
    let output = dir.path().join("out").join("results.jsonl");
    fs::write(&input, "[\"aa\", \"aaa\"]\n").unwrap();

    Command::cargo_bin("superstring_batch")
        .unwrap()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let results = fs::read_to_string(&output).unwrap();
    assert!(results.contains("\"superstring\":\"aaa\""));
}

#[test]
fn test_batch_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("superstring_batch")
        .unwrap()
        .arg("--input")
        .arg(dir.path().join("absent.jsonl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load instances"));
}
