//! CLI surface tests over the real rigger binary

mod common;

use common::TestProject;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    TestProject::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("repos"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_output() {
    TestProject::new()
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rigger"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_install_requires_module_name() {
    TestProject::new().cmd().arg("install").assert().failure();
}

#[test]
fn test_install_rejects_non_numeric_index() {
    TestProject::new()
        .cmd()
        .args(["install", "lint", "--at", "2+2"])
        .assert()
        .failure();
}

#[test]
fn test_completions_bash() {
    TestProject::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rigger"));
}

#[test]
fn test_unknown_subcommand_fails() {
    TestProject::new().cmd().arg("frobnicate").assert().failure();
}
