#![cfg(unix)]

mod common;

use common::{CHANGED_SOURCE, GitFixture};
use predicates::prelude::*;

const UNDEFINED_NAME: &str = "app.py:2:5: undefined name 'undefined_name'";
const E225: &str = "app.py:2:2: E225 missing whitespace around operator";

// ============================================================================
// Annotation Integration Tests
// ============================================================================

#[test]
fn clean_run_prints_git_diff_unchanged() {
    let fixture = GitFixture::with_committed_app();
    fixture.create_file("app.py", CHANGED_SOURCE);
    fixture.create_checkers("", "");

    let expected = fixture.git(&["diff", "--color=always", "--no-ext-diff", "HEAD", "--", "app.py"]);
    assert!(!expected.is_empty());

    diff_lint!(fixture)
        .arg("app.py")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn findings_are_placed_beside_changed_line() {
    let fixture = GitFixture::with_committed_app();
    fixture.create_file("app.py", CHANGED_SOURCE);
    fixture.create_checkers(&format!("{E225}\n"), &format!("{UNDEFINED_NAME}\n"));

    let output = diff_lint!(fixture).arg("app.py").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    let error_block = format!("\x1b[31m{UNDEFINED_NAME}\x1b[m");
    let warning_block = format!("\x1b[33m{E225}\x1b[m");

    let annotated = lines
        .iter()
        .position(|line| line.contains(&error_block))
        .expect("error annotation present");
    assert!(lines[annotated].contains("undefined_name"));
    assert!(lines[annotated].starts_with("\x1b[32m+"));

    assert!(lines[annotated + 1].ends_with(&warning_block));
    assert!(lines[annotated + 1].starts_with(&" ".repeat(80)));
    assert_eq!(lines[annotated + 2], " print(x)");
}

#[test]
fn findings_on_unchanged_context_lines_are_shown() {
    let fixture = GitFixture::with_committed_app();
    fixture.create_file("app.py", CHANGED_SOURCE);
    fixture.create_checkers("", "app.py:1:1: 'os' imported but unused\n");

    diff_lint!(fixture)
        .arg("app.py")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\x1b[31mapp.py:1:1: 'os' imported but unused\x1b[m",
        ))
        .stdout(predicate::str::contains(" import os"));
}

#[test]
fn findings_outside_hunks_are_dropped() {
    let fixture = GitFixture::with_committed_app();
    fixture.create_file("app.py", CHANGED_SOURCE);
    fixture.create_checkers("app.py:99:1: W391 blank line at end of file\n", "");

    diff_lint!(fixture)
        .arg("app.py")
        .assert()
        .success()
        .stdout(predicate::str::contains("W391").not());
}

#[test]
fn unchanged_file_prints_nothing() {
    let fixture = GitFixture::with_committed_app();
    fixture.create_checkers("app.py:1:1: W1 something\n", "");

    diff_lint!(fixture)
        .arg("app.py")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn ref_option_selects_base_commit() {
    let fixture = GitFixture::with_committed_app();
    fixture.create_file("app.py", CHANGED_SOURCE);
    fixture.commit_all("second");
    fixture.create_checkers("", &format!("{UNDEFINED_NAME}\n"));

    // Against HEAD nothing changed.
    diff_lint!(fixture)
        .arg("app.py")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    diff_lint!(fixture)
        .args(["app.py", "-r", "HEAD~1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(UNDEFINED_NAME));
}

#[test]
fn config_reference_is_used_without_flag() {
    let fixture = GitFixture::with_committed_app();
    fixture.create_file("app.py", CHANGED_SOURCE);
    fixture.commit_all("second");
    fixture.create_checkers("", "");
    let config = std::fs::read_to_string(fixture.path().join(".diff-lint.toml")).unwrap();
    fixture.create_file(
        ".diff-lint.toml",
        &format!("{config}\n[diff]\nreference = \"HEAD~1\"\n"),
    );

    diff_lint!(fixture)
        .arg("app.py")
        .assert()
        .success()
        .stdout(predicate::str::contains("undefined_name"));
}

// ============================================================================
// Failure Modes
// ============================================================================

#[test]
fn malformed_checker_output_exits_one() {
    let fixture = GitFixture::with_committed_app();
    fixture.create_file("app.py", CHANGED_SOURCE);
    fixture.create_checkers("garbage no colon pattern\n", "");

    diff_lint!(fixture)
        .arg("app.py")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("garbage no colon pattern"));
}

#[test]
fn unknown_reference_exits_two() {
    let fixture = GitFixture::with_committed_app();
    fixture.create_file("app.py", CHANGED_SOURCE);
    fixture.create_checkers("", "");

    diff_lint!(fixture)
        .args(["app.py", "--ref", "no-such-branch"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Git error"));
}

#[test]
fn missing_checker_program_exits_two() {
    let fixture = GitFixture::with_committed_app();
    fixture.create_file("app.py", CHANGED_SOURCE);
    fixture.create_file(
        ".diff-lint.toml",
        "[checkers.style]\ncommand = [\"diff-lint-no-such-checker\"]\n",
    );

    diff_lint!(fixture)
        .arg("app.py")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to run style checker"));
}

#[test]
fn checker_exit_status_is_ignored() {
    let fixture = GitFixture::with_committed_app();
    fixture.create_file("app.py", CHANGED_SOURCE);
    fixture.create_file(
        ".diff-lint.toml",
        &common::checker_config("exit 1", "echo 'app.py:2:1: F1 flagged'; exit 3"),
    );

    diff_lint!(fixture)
        .arg("app.py")
        .assert()
        .success()
        .stdout(predicate::str::contains("F1 flagged"));
}
