//! Integration tests for `mob install`
//!
//! Covers install dispatch: install targets run their install command,
//! project targets never install themselves, and dependency order carries
//! over from the expanded tree.

mod common;

use common::{text, TestProject};
use predicates::prelude::*;

#[test]
fn test_project_installs_come_from_its_installs_list() {
    // Scenario D: X is a project with Installs = x_pkg; only x_pkg's
    // install command runs.
    let project = TestProject::new();
    project.default_device();
    project.mobfile(
        "x.mobproject",
        "[Main]\nInstalls = x_pkg\nBuildCommand = touch built_x\n",
    );
    project.mobfile(
        "x_pkg.mobinstall",
        "[Main]\nInstallCommand = touch installed_x_pkg\n",
    );

    let output = project.mob(&["install", "dev", "x"]);

    assert!(output.status.success(), "{}", text(&output.stderr));
    assert!(project.file_exists("installed_x_pkg"));
    assert!(!project.file_exists("built_x"));
}

#[test]
fn test_direct_install_target() {
    let project = TestProject::new();
    project.default_device();
    project.mobfile(
        "pkg.mobinstall",
        "[Main]\nInstallCommand = touch installed_pkg\n",
    );

    let output = project.mob(&["install", "dev", "pkg"]);

    assert!(output.status.success(), "{}", text(&output.stderr));
    assert!(project.file_exists("installed_pkg"));
}

#[test]
fn test_install_runs_dependency_installs_first() {
    let project = TestProject::new();
    project.default_device();
    project.mobfile("app.mobproject", "[Main]\nDepends = lib\nInstalls = app_pkg\n");
    project.mobfile("lib.mobproject", "[Main]\nInstalls = lib_pkg\n");
    project.mobfile(
        "app_pkg.mobinstall",
        "[Main]\nInstallCommand = echo app_pkg >> order.log\n",
    );
    project.mobfile(
        "lib_pkg.mobinstall",
        "[Main]\nInstallCommand = echo lib_pkg >> order.log\n",
    );

    let output = project.mob(&["install", "dev", "app"]);

    assert!(output.status.success(), "{}", text(&output.stderr));
    assert_eq!(project.read_file("order.log"), "lib_pkg\napp_pkg\n");
}

#[test]
fn test_project_without_installs_is_a_noop() {
    let project = TestProject::new();
    project.default_device();
    project.mobfile("x.mobproject", "[Main]\nBuildCommand = touch built_x\n");

    let output = project.mob(&["install", "dev", "x"]);

    assert!(output.status.success(), "{}", text(&output.stderr));
    assert!(!project.file_exists("built_x"));
}

#[test]
fn test_install_without_command_is_a_noop() {
    let project = TestProject::new();
    project.default_device();
    project.mobfile("pkg.mobinstall", "[Main]\nName = pkg\n");

    let output = project.mob(&["install", "dev", "pkg"]);

    assert!(output.status.success(), "{}", text(&output.stderr));
}

#[test]
fn test_no_deps_skips_project_installs() {
    let project = TestProject::new();
    project.default_device();
    project.mobfile("x.mobproject", "[Main]\nInstalls = x_pkg\n");
    project.mobfile(
        "x_pkg.mobinstall",
        "[Main]\nInstallCommand = touch installed_x_pkg\n",
    );

    let output = project.mob(&["install", "dev", "x", "--no-deps"]);

    assert!(output.status.success(), "{}", text(&output.stderr));
    assert!(!project.file_exists("installed_x_pkg"));
}

#[test]
fn test_unknown_install_target_fails() {
    let project = TestProject::new();
    project.default_device();

    let output = project.mob(&["install", "dev", "ghost"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(predicate::str::contains("Unknown install").eval(&text(&output.stderr)));
}

#[test]
fn test_failing_install_command_aborts_run() {
    let project = TestProject::new();
    project.default_device();
    project.mobfile("bad.mobinstall", "[Main]\nInstallCommand = exit 5\n");
    project.mobfile(
        "good.mobinstall",
        "[Main]\nInstallCommand = touch installed_good\n",
    );

    let output = project.mob(&["install", "dev", "bad", "good"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(predicate::str::contains("exit code 5").eval(&text(&output.stderr)));
    assert!(!project.file_exists("installed_good"));
}
