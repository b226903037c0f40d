use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run slotsync with given args.
fn slotsync() -> Command {
    cargo_bin_cmd!("slotsync")
}

#[test]
fn help_lists_the_commands() {
    slotsync()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("push"))
        .stdout(predicate::str::contains("forget"));
}

#[test]
fn forget_without_a_stored_target_is_a_no_op() {
    let dir = assert_fs::TempDir::new().unwrap();
    let prefs = dir.child("last_target.json");

    slotsync()
        .current_dir(dir.path())
        .args(["forget", "--prefs"])
        .arg(prefs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No stored target"));
}

#[test]
fn forget_removes_a_stored_target() {
    let dir = assert_fs::TempDir::new().unwrap();
    let prefs = dir.child("last_target.json");
    prefs
        .write_str(
            r#"{"target":{"app":"foo","resource_group":"bar","environment":"production"},"last_used":"2026-08-01T12:00:00Z"}"#,
        )
        .unwrap();

    slotsync()
        .current_dir(dir.path())
        .args(["forget", "--prefs"])
        .arg(prefs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("forgotten"));

    assert!(!prefs.path().exists());
}

#[test]
fn push_with_a_missing_explicit_config_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    slotsync()
        .current_dir(dir.path())
        .args(["push", "--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
