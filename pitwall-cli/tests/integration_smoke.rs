//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn pitwall() -> Command {
    let mut cmd = Command::cargo_bin("pitwall").unwrap();
    cmd.env_remove("DATABASE_URL").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    pitwall()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("migrate"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn test_run_help() {
    pitwall()
        .arg("run")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-serve"))
        .stdout(predicate::str::contains("--skip-startup"));
}

#[test]
fn test_migrate_help() {
    pitwall()
        .arg("migrate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--status"));
}

#[test]
fn test_unknown_subcommand_fails() {
    pitwall().arg("podium").assert().failure();
}

#[test]
fn test_unreachable_database_aborts_startup() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("pitwall.toml"),
        "[database]\nurl = \"postgres://nobody@127.0.0.1:1/none\"\nacquire_timeout_secs = 1\n",
    )
    .unwrap();

    // HOME points at the temp dir so ~/.pitwall/.env and config.toml cannot leak in
    pitwall()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .arg("seed")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to create database pool"));
}
