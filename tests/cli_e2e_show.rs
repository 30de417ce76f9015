//! End-to-end tests for the `show` command
//!
//! These tests invoke the actual CLI binary and validate its behavior
//! from a user's perspective.

mod common;
use common::prelude::*;

/// Test that --help flag shows help information
#[test]
fn test_show_help() {
    let mut cmd = cargo_bin_cmd!("dotplan");

    cmd.arg("show")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Print the operations a plan file would perform",
        ));
}

/// Test that a missing plan file produces an error
#[test]
fn test_show_missing_plan() {
    let mut cmd = cargo_bin_cmd!("dotplan");

    cmd.arg("show")
        .arg("/nonexistent/plan.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan file not found"));
}

/// Test that show prints the trace, including implicit directories
#[test]
fn test_show_prints_trace() {
    let fixture = TestFixture::new()
        .with_plan(plans::DOTFILES)
        .with_dotfiles_tree();

    let mut cmd = cargo_bin_cmd!("dotplan");

    cmd.current_dir(fixture.path())
        .arg("--color")
        .arg("never")
        .arg("show")
        .arg("plan.yaml")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "MKDIR \"link_dir\"\nLINK \"dir1/file1\" -> \"link_dir/link1\"",
        ))
        .stdout(predicate::str::contains(
            "MKDIR \"copy_dir\"\nCOPY \"dir1/file1\" -> \"copy_dir/file\"",
        ));

    // Nothing was applied
    fixture.child("rename").assert(predicate::path::exists());
    fixture.child("link_dir").assert(predicate::path::missing());
}

/// Test that unknown step kinds are rejected with a hint
#[test]
fn test_show_rejects_unknown_step() {
    let fixture = TestFixture::new().with_plan(plans::UNKNOWN_STEP);

    let mut cmd = cargo_bin_cmd!("dotplan");

    cmd.current_dir(fixture.path())
        .arg("show")
        .arg("plan.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("hint:"));
}

/// Test that an empty plan prints nothing
#[test]
fn test_show_empty_plan() {
    let fixture = TestFixture::new().with_plan(plans::EMPTY);

    let mut cmd = cargo_bin_cmd!("dotplan");

    cmd.current_dir(fixture.path())
        .arg("show")
        .arg("plan.yaml")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
