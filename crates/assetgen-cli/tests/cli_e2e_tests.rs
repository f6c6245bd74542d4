//! CLI end-to-end tests that invoke the compiled `assetgen` binary.
//!
//! These tests use `env!("CARGO_BIN_EXE_assetgen")` to locate the binary and
//! run it against temporary projects.

use assert_cmd::Command;
use assetgen_test_utils::{MINIMAL_PUBSPEC, TestProject};
use predicates::prelude::*;

/// Command for the compiled `assetgen` binary, run from `project`.
fn assetgen(project: &TestProject) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_assetgen"));
    cmd.current_dir(project.root());
    cmd
}

fn project_with_images() -> TestProject {
    let project = TestProject::with_pubspec();
    project.add_file("resources/images/logo.png", "png");
    project.add_file("resources/fonts/Roboto-Regular.ttf", "ttf");
    project
}

#[test]
fn test_help_lists_commands() {
    let project = TestProject::new();
    assetgen(&project)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("scan"));
}

#[test]
fn test_no_subcommand_runs_sync() {
    let project = project_with_images();

    assetgen(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("Syncing resources in resources/"));

    project.assert_file_contains("pubspec.yaml", "resources/images/");
    project.assert_file_contains("pubspec.yaml", "family: Roboto");
    project.assert_file_contains("lib/generated/assets.dart", "LOGO_PNG");
}

#[test]
fn test_second_sync_reports_up_to_date() {
    let project = project_with_images();
    assetgen(&project).arg("sync").assert().success();

    assetgen(&project)
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Everything is up to date."));
}

#[test]
fn test_dry_run_prints_diff() {
    let project = project_with_images();

    assetgen(&project)
        .args(["sync", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+++ b/pubspec.yaml"))
        .stdout(predicate::str::contains("[dry-run] Would update pubspec.yaml"));

    assert_eq!(project.read("pubspec.yaml"), MINIMAL_PUBSPEC);
    project.assert_file_not_exists("lib/generated/assets.dart");
}

#[test]
fn test_sync_json_report() {
    let project = project_with_images();

    let output = assetgen(&project)
        .args(["sync", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["counts"]["added"], 2);
    assert_eq!(report["counts"]["fonts_added"], 1);
    assert_eq!(report["families"][0], "Roboto");
    assert_eq!(report["dry_run"], false);
}

#[test]
fn test_check_exit_code_tracks_staleness() {
    let project = project_with_images();

    assetgen(&project)
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("STALE"))
        .stderr(predicate::str::contains("2 files out of date"));

    assetgen(&project).arg("sync").assert().success();

    assetgen(&project)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resources are in sync."));
}

#[test]
fn test_project_flag_overrides_cwd() {
    let project = project_with_images();
    let elsewhere = TestProject::new();

    assetgen(&elsewhere)
        .arg("-C")
        .arg(project.root())
        .arg("sync")
        .assert()
        .success();

    project.assert_file_exists("lib/generated/assets.dart");
    elsewhere.assert_file_not_exists("lib/generated/assets.dart");
}

#[test]
fn test_missing_pubspec_fails() {
    let project = TestProject::new();

    assetgen(&project)
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("Manifest not found"));
}

#[test]
fn test_collision_fails_without_writing() {
    let project = TestProject::with_pubspec();
    project.add_file("resources/audio/click.wav", "wav");
    project.add_file("resources/sfx/click.wav", "wav");

    assetgen(&project)
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CLICK_WAV"));

    assert_eq!(project.read("pubspec.yaml"), MINIMAL_PUBSPEC);
    project.assert_file_not_exists("lib/generated/assets.dart");
}

#[test]
fn test_config_file_is_honoured() {
    let project = TestProject::with_pubspec();
    project.add_file("assets/images/logo.png", "png");
    project.add_file(
        "assetgen.toml",
        "resource_dir = \"assets\"\noutput = \"lib/r.dart\"\nclass_name = \"R\"\n",
    );

    assetgen(&project).arg("sync").assert().success();

    project.assert_file_contains("pubspec.yaml", "assets/images/");
    project.assert_file_contains("lib/r.dart", "class R {");
}

#[test]
fn test_invalid_config_fails() {
    let project = TestProject::with_pubspec();
    project.add_file("assetgen.toml", "unknown_key = true\n");

    assetgen(&project)
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("assetgen.toml"));
}

#[test]
fn test_scan_json_lists_families() {
    let project = project_with_images();

    let output = assetgen(&project).args(["scan", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["exists"], true);
    assert_eq!(value["families"][0]["name"], "Roboto");
    assert_eq!(value["directories"][0]["path"], "resources/fonts/");
}

#[test]
fn test_verbose_logs_to_stderr() {
    let project = project_with_images();

    assetgen(&project)
        .args(["sync", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}
