//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn launchpad(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("launchpad").unwrap();
    cmd.arg("--data-dir").arg(data.path());
    cmd
}

#[test]
fn invalid_project_name_is_user_error() {
    let data = TempDir::new().unwrap();
    launchpad(&data)
        .args(["create", "a/b", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn unknown_template_is_not_found_with_suggestion() {
    let data = TempDir::new().unwrap();
    launchpad(&data)
        .args(["create", "Alpha", "--template", "nonexistent", "--yes"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Template not found"))
        .stderr(predicate::str::contains("launchpad templates"));
}

#[test]
fn add_missing_folder_suggests_create() {
    let data = TempDir::new().unwrap();
    launchpad(&data)
        .args(["add", "/no/such/folder/anywhere"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("launchpad create"));
}

#[test]
fn remove_with_malformed_id_is_user_error() {
    let data = TempDir::new().unwrap();
    launchpad(&data)
        .args(["remove", "not-a-uuid", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid record id"));
}

#[test]
fn remove_with_unknown_id_is_not_found() {
    let data = TempDir::new().unwrap();
    launchpad(&data)
        .args(["remove", "67e55044-10b1-426f-9247-bb680e5fe0c8", "--yes"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn unknown_config_key_is_configuration_error() {
    let data = TempDir::new().unwrap();
    launchpad(&data)
        .args(["config", "set", "bogus.key", "1"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown settings key"))
        .stderr(predicate::str::contains("template.name"));
}

#[test]
fn config_set_unknown_template_fails_early() {
    let data = TempDir::new().unwrap();
    launchpad(&data)
        .args(["config", "set", "template.name", "nonexistent"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Template not found"));
}

#[test]
fn non_boolean_toggle_value_is_user_error() {
    let data = TempDir::new().unwrap();
    launchpad(&data)
        .args(["config", "set", "folderStructure.build.enabled", "maybe"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("expected true/false"));
}

#[test]
fn launch_of_stale_path_reports_the_path() {
    let data = TempDir::new().unwrap();
    launchpad(&data)
        .args(["launch", "/no/such/project.aep"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("/no/such/project.aep"));
}

#[test]
fn errors_carry_suggestions_block() {
    let data = TempDir::new().unwrap();
    launchpad(&data)
        .args(["add", "/no/such/folder/anywhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Suggestions:"));
}
