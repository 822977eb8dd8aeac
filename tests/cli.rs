//! CLI integration tests using assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn brave_profiles_cmd(user_data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("brave-profiles").expect("Failed to find binary");
    cmd.arg("--user-data-dir").arg(user_data_dir.path());
    cmd
}

#[test]
fn test_help_command() {
    Command::cargo_bin("brave-profiles")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Provision numbered Brave browser profiles"));
}

#[test]
fn test_bare_invocation_creates_five_profiles() {
    let temp = TempDir::new().unwrap();

    brave_profiles_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 5 new profile(s)"));

    for n in 1..=5 {
        assert!(temp.path().join(format!("Profile {}", n)).join("Preferences").is_file());
    }
    assert!(temp.path().join("Local State").is_file());
}

#[test]
fn test_nothing_to_do_lists_existing() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("Profile 1")).unwrap();
    fs::create_dir(temp.path().join("Profile 4")).unwrap();

    brave_profiles_cmd(&temp)
        .args(["ensure", "--count", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Existing profiles: [1, 4]"));
}

#[test]
fn test_dry_run() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("Profile 2")).unwrap();

    brave_profiles_cmd(&temp)
        .args(["ensure", "--count", "3", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would create 2 profile(s)"))
        .stdout(predicate::str::contains("Profile 1"))
        .stdout(predicate::str::contains("Profile 3"));

    assert!(!temp.path().join("Profile 1").exists());
}

#[test]
fn test_failure_is_reported_without_exit_code() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Profile 1"), "").unwrap();

    brave_profiles_cmd(&temp)
        .assert()
        .success()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("profile already exists"));
}

#[test]
fn test_corrupt_local_state_warns() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Local State"), "{ broken").unwrap();

    brave_profiles_cmd(&temp)
        .args(["ensure", "--count", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 1 new profile(s)"))
        .stderr(predicate::str::contains("Profile 1 not registered:"));
}

#[test]
fn test_list_and_register() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("Profile 3")).unwrap();

    brave_profiles_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 not in Local State"));

    brave_profiles_cmd(&temp)
        .args(["register", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered:"));

    brave_profiles_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 profiles found"))
        .stdout(predicate::str::contains("not in Local State").not());
}
