//! Integration tests for the `reflowcell` binary.

#![allow(deprecated)] // cargo_bin deprecation — replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn reflowcell() -> Command {
    Command::cargo_bin("reflowcell").expect("binary 'reflowcell' should be built")
}

#[test]
fn help_flag_shows_usage() {
    reflowcell()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: reflowcell"))
        .stdout(predicate::str::contains("--width"))
        .stdout(predicate::str::contains("--cell-width"));
}

#[test]
fn wraps_stdin_with_hanging_indent() {
    reflowcell()
        .args(["-w", "10"])
        .write_stdin("1. first word second word third word")
        .assert()
        .success()
        .stdout("1. first\n   word\n   second\n   word\n   third\n   word\n");
}

#[test]
fn dash_reads_stdin() {
    reflowcell()
        .args(["--width", "5", "-"])
        .write_stdin("ab cd ef")
        .assert()
        .success()
        .stdout("ab cd\nef\n");
}

#[test]
fn html_input_is_cleaned_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cell.HTML");
    fs::write(&input, "a<br/>\nb &amp; c").unwrap();

    reflowcell()
        .args(["-w", "20"])
        .arg(&input)
        .assert()
        .success()
        .stdout("a\nb & c\n");
}

#[test]
fn no_cleanup_wins_over_cleanup() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cell.html");
    fs::write(&input, "a<br/>\nb").unwrap();

    reflowcell()
        .args(["-w", "20", "--cleanup", "--no-cleanup"])
        .arg(&input)
        .assert()
        .success()
        .stdout("a<br/>\nb\n");
}

#[test]
fn cleanup_flag_applies_to_plain_files() {
    reflowcell()
        .args(["-w", "20", "--cleanup"])
        .write_stdin("x<br/>\ny")
        .assert()
        .success()
        .stdout("x\ny\n");
}

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "the quick brown fox jumps over").unwrap();

    reflowcell()
        .args(["-w", "10"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "the quick\nbrown fox\njumps over\n"
    );
}

#[test]
fn width_from_cell_and_font_size() {
    // 2in cell, 12pt font, no scaling → 20 chars
    reflowcell()
        .args(["--cell-width", "1828800", "--font-size", "152400", "--scaling", "1.0"])
        .write_stdin("aaaa bbbb cccc dddd eeee")
        .assert()
        .success()
        .stdout("aaaa bbbb cccc dddd\neeee\n");
}

#[test]
fn width_from_cell_in_points() {
    reflowcell()
        .args(["--units", "points", "--cell-width", "144", "--font-size", "12"])
        .args(["--scaling", "1"])
        .write_stdin("aaaa bbbb cccc dddd eeee")
        .assert()
        .success()
        .stdout("aaaa bbbb cccc dddd\neeee\n");
}

#[test]
fn zero_width_fails() {
    reflowcell()
        .args(["-w", "0"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max width must be at least 1"));
}

#[test]
fn zero_font_size_fails() {
    reflowcell()
        .args(["--cell-width", "914400", "--font-size", "0"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn width_conflicts_with_cell_width() {
    reflowcell()
        .args(["-w", "10", "--cell-width", "914400", "--font-size", "152400"])
        .write_stdin("text")
        .assert()
        .failure();
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    reflowcell()
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
