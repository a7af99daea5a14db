//! Integration tests for the launchpad binary.
//!
//! Every test gets its own temp data directory via `--data-dir`, so the
//! real platform data dir is never touched and tests can run in parallel.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn launchpad(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("launchpad").unwrap();
    cmd.arg("--data-dir").arg(data.path());
    cmd
}

#[test]
fn help_flag() {
    Command::cargo_bin("launchpad")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick folder launcher"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("scan"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("launchpad")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn templates_lists_builtins() {
    let data = TempDir::new().unwrap();
    launchpad(&data)
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("developer"))
        .stdout(predicate::str::contains("vfx-artist"))
        .stdout(predicate::str::contains("default"));
}

#[test]
fn create_scaffolds_and_registers() {
    let data = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    launchpad(&data)
        .args(["create", "Alpha", "--template", "developer", "--yes", "--at"])
        .arg(workspace.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));

    let project = workspace.path().join("Alpha");
    for dir in ["src", "docs", "tests", "assets", "build"] {
        assert!(project.join(dir).is_dir(), "missing directory {dir}");
    }
    let readme = project.join("README.md");
    assert!(readme.is_file());
    assert_eq!(std::fs::read_to_string(&readme).unwrap(), "");

    // Registered, and surfaced first in the list.
    launchpad(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("[developer]"));
}

#[test]
fn create_twice_is_idempotent() {
    let data = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    for _ in 0..2 {
        launchpad(&data)
            .args(["create", "Alpha", "--template", "developer", "--yes", "--at"])
            .arg(workspace.path())
            .assert()
            .success();
    }

    // Second run left the tree alone and reported the skips.
    let listing: Vec<_> = std::fs::read_dir(workspace.path().join("Alpha"))
        .unwrap()
        .collect();
    assert_eq!(listing.len(), 6);

    // And the registry still holds exactly one record for the path.
    launchpad(&data)
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha").count(1));
}

#[test]
fn create_dry_run_writes_nothing() {
    let data = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    launchpad(&data)
        .args(["create", "Alpha", "--dry-run", "--at"])
        .arg(workspace.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!workspace.path().join("Alpha").exists());
}

#[test]
fn add_registers_existing_folder_and_updates_on_readd() {
    let data = TempDir::new().unwrap();
    let folder = TempDir::new().unwrap();

    launchpad(&data)
        .arg("add")
        .arg(folder.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Added folder"));

    launchpad(&data)
        .arg("add")
        .arg(folder.path())
        .args(["--name", "Archive 2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated folder"));

    // One record, carrying the refreshed label.
    launchpad(&data)
        .args(["list", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive 2025").count(1));
}

#[test]
fn scan_finds_recognized_project_files() {
    let data = TempDir::new().unwrap();
    let folder = TempDir::new().unwrap();
    std::fs::write(folder.path().join("intro.aep"), "").unwrap();
    std::fs::write(folder.path().join("cut.prproj"), "").unwrap();
    std::fs::write(folder.path().join("notes.txt"), "").unwrap();

    launchpad(&data).arg("add").arg(folder.path()).assert().success();

    launchpad(&data)
        .args(["scan", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("intro.aep"))
        .stdout(predicate::str::contains("cut.prproj"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn scan_skips_vanished_folders() {
    let data = TempDir::new().unwrap();
    let keeper = TempDir::new().unwrap();
    std::fs::write(keeper.path().join("ok.aep"), "").unwrap();

    let doomed = TempDir::new().unwrap();
    let doomed_path = doomed.path().to_path_buf();
    launchpad(&data).arg("add").arg(&doomed_path).assert().success();
    launchpad(&data).arg("add").arg(keeper.path()).assert().success();
    drop(doomed); // folder vanishes after registration

    launchpad(&data)
        .args(["scan", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok.aep"));
}

#[test]
fn scan_custom_extension() {
    let data = TempDir::new().unwrap();
    let folder = TempDir::new().unwrap();
    std::fs::write(folder.path().join("grade.drp"), "").unwrap();
    std::fs::write(folder.path().join("intro.aep"), "").unwrap();

    launchpad(&data).arg("add").arg(folder.path()).assert().success();

    launchpad(&data)
        .args(["scan", "--ext", "drp", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("grade.drp"))
        .stdout(predicate::str::contains("intro.aep").not());
}

#[test]
fn config_set_and_get_round_trip() {
    let data = TempDir::new().unwrap();

    launchpad(&data)
        .args(["config", "set", "template.name", "video-editor"])
        .assert()
        .success();

    launchpad(&data)
        .args(["config", "get", "template.name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("video-editor"));

    // The active marker follows the selection.
    launchpad(&data)
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("* \u{1f39e}").or(predicate::str::contains("video-editor")));
}

#[test]
fn disabled_entry_is_not_scaffolded() {
    let data = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    launchpad(&data)
        .args(["config", "set", "folderStructure.build.enabled", "false"])
        .assert()
        .success();

    launchpad(&data)
        .args(["create", "Alpha", "--template", "developer", "--yes", "--at"])
        .arg(workspace.path())
        .assert()
        .success();

    let project = workspace.path().join("Alpha");
    assert!(project.join("src").is_dir());
    assert!(!project.join("build").exists());
}

#[test]
fn quiet_flag_suppresses_stdout() {
    let data = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    launchpad(&data)
        .args(["-q", "create", "Alpha", "--yes", "--at"])
        .arg(workspace.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn shell_completions_generate() {
    Command::cargo_bin("launchpad")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("launchpad"));
}

#[test]
fn data_files_use_legacy_json_shape() {
    let data = TempDir::new().unwrap();
    let folder = TempDir::new().unwrap();

    launchpad(&data).arg("add").arg(folder.path()).assert().success();

    let folders_raw = std::fs::read_to_string(data.path().join("folders.json")).unwrap();
    assert!(folders_raw.contains("\"folders\""));

    let settings_raw = std::fs::read_to_string(data.path().join("settings.json")).unwrap();
    assert!(settings_raw.contains("\"folderStructure\""));
    assert!(settings_raw.contains("\"templates\""));
    assert!(settings_raw.contains("\"placeholderName\""));
}
