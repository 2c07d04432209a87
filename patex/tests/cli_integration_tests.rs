// patex/tests/cli_integration_tests.rs
//! Command-line integration tests for the `patex` binary.
//!
//! These tests run the compiled executable end to end: extraction from stdin
//! and files, the records-file round trip into `integrate`, `enumerate`
//! output, and argument validation. `tempfile` keeps every test isolated on
//! disk, and `assert_cmd`/`predicates` drive the process and the assertions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

const SAMPLE: &str = "abc_pattern1_defg(hij_pattern2_klmn)";

fn patex() -> Command {
    let mut cmd = Command::cargo_bin("patex").unwrap();
    cmd.env("RUST_LOG", "debug");
    cmd
}

#[test]
fn extract_from_stdin_writes_reduced_text_and_records() {
    let dir = tempdir().unwrap();
    let records_path = dir.path().join("records.json");

    patex()
        .args(["extract", "-p", "_pattern[0-9]_"])
        .arg(&records_path)
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("abcdefg(hijklmn)\n");

    let records = fs::read_to_string(&records_path).unwrap();
    assert!(records.contains("_pattern1_"));
    assert!(records.contains("_pattern2_"));
}

#[test]
fn extract_then_integrate_round_trips() {
    let dir = tempdir().unwrap();
    let records_path = dir.path().join("records.json");
    let reduced_path = dir.path().join("reduced.txt");

    patex()
        .args(["extract", "-p", "_pattern[0-9]_", "-o"])
        .arg(&reduced_path)
        .arg(&records_path)
        .write_stdin(SAMPLE)
        .assert()
        .success();

    // Wrap the reduced text in markup, as the tagging stage would.
    let reduced = fs::read_to_string(&reduced_path).unwrap();
    let marked = format!("<doc>{}</doc>", reduced.trim_end());
    let marked_path = dir.path().join("marked.xml");
    fs::write(&marked_path, &marked).unwrap();

    patex()
        .args(["integrate", "-i"])
        .arg(&marked_path)
        .arg(&records_path)
        .assert()
        .success()
        .stdout(format!("<doc>{SAMPLE}</doc>\n"));
}

#[test]
fn extract_reads_patterns_from_file() {
    let dir = tempdir().unwrap();
    let records_path = dir.path().join("records.json");

    let mut pattern_file = NamedTempFile::new().unwrap();
    writeln!(pattern_file, "_pattern[0-9]_").unwrap();
    writeln!(pattern_file, r"\([^)]*\)").unwrap();

    patex()
        .args(["extract", "-f"])
        .arg(pattern_file.path())
        .arg(&records_path)
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout("abcdefg\n");
}

#[test]
fn enumerate_lists_matched_texts() {
    let dir = tempdir().unwrap();
    let records_path = dir.path().join("records.json");

    patex()
        .args(["extract", "-p", "_pattern[0-9]_"])
        .arg(&records_path)
        .write_stdin(SAMPLE)
        .assert()
        .success();

    patex()
        .arg("enumerate")
        .arg(&records_path)
        .assert()
        .success()
        .stdout("_pattern1_\n_pattern2_\n");
}

#[test]
fn extract_without_pattern_source_fails() {
    let dir = tempdir().unwrap();
    let records_path = dir.path().join("records.json");

    patex()
        .arg("extract")
        .arg(&records_path)
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No pattern or pattern file given"));
}

#[test]
fn extract_with_malformed_pattern_fails() {
    let dir = tempdir().unwrap();
    let records_path = dir.path().join("records.json");

    patex()
        .args(["extract", "-p", "[unclosed"])
        .arg(&records_path)
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to compile"));
}

#[test]
fn integrate_with_mismatched_records_fails() {
    let dir = tempdir().unwrap();
    let records_path = dir.path().join("records.json");

    patex()
        .args(["extract", "-p", "_pattern[0-9]_"])
        .arg(&records_path)
        .write_stdin(SAMPLE)
        .assert()
        .success();

    // Feed a text that is far too short for the recorded spans.
    patex()
        .arg("integrate")
        .arg(&records_path)
        .write_stdin("ab")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Records do not match"));
}

#[test]
fn no_arguments_prints_help() {
    patex()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
