//! End-to-end tests driving the `bbl` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bbl() -> Command {
    let mut cmd = Command::cargo_bin("bbl").unwrap();
    cmd.env_remove("BBL_DEBUG");
    cmd
}

fn stderr_of(cmd: &mut Command) -> String {
    String::from_utf8(cmd.output().unwrap().stderr).unwrap()
}

#[test]
fn test_no_arguments_prints_help() {
    bbl()
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Usage:\n  bbl [GLOBAL OPTIONS] COMMAND [OPTIONS]",
        ))
        .stdout(predicate::str::contains("--state-dir"));
}

#[test]
fn test_version_flag_and_command() {
    let expected = format!("bbl {} (", env!("CARGO_PKG_VERSION"));

    for args in [&["--version"][..], &["-v", "help"][..], &["version"][..]] {
        bbl()
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::starts_with(expected.clone()));
    }
}

#[test]
fn test_help_flag_shows_command_usage() {
    bbl()
        .args(["--help", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[version command options]"));
}

#[test]
fn test_help_flag_with_unknown_command() {
    bbl()
        .args(["-h", "bogus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bbl [GLOBAL OPTIONS] COMMAND [OPTIONS]"));
}

#[test]
fn test_unrecognized_command_fails_with_usage() {
    let assert = bbl()
        .args(["bogus", "--flag"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("bbl: Unrecognized command 'bogus'"));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert_eq!(stderr.matches("Usage:").count(), 1);
}

#[test]
fn test_duplicate_state_dir_fails_with_usage() {
    let output = bbl()
        .args(["--state-dir", "a", "-state-dir=b", "version"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(stderr.contains(
        "bbl: Invalid usage: cannot specify global 'state-dir' flag more than once."
    ));
    assert_eq!(stderr.matches("Usage:").count(), 1);
}

#[test]
fn test_unknown_global_flag_fails() {
    bbl()
        .args(["--bogus", "version"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_unknown_single_dash_flag_is_reported_as_typed() {
    bbl()
        .args(["-bogus", "version"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bbl: unexpected argument '-bogus' found"));
}

#[test]
fn test_debug_logs_explicit_state_dir() {
    bbl()
        .args(["--debug", "--state-dir", "/tmp/bbl-state", "version"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Resolved invocation"))
        .stderr(predicate::str::contains("/tmp/bbl-state"));
}

#[test]
fn test_state_dir_defaults_to_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    let canonical = temp_dir.path().canonicalize().unwrap();

    let stderr = stderr_of(bbl().current_dir(temp_dir.path()).args(["-d", "version"]));

    assert!(
        stderr.contains(&*canonical.to_string_lossy())
            || stderr.contains(&*temp_dir.path().to_string_lossy()),
        "working directory missing from: {stderr}"
    );
}

#[test]
fn test_debug_env_and_override() {
    bbl()
        .env("BBL_DEBUG", "true")
        .arg("version")
        .assert()
        .success()
        .stderr(predicate::str::contains("Resolved invocation"));

    bbl()
        .env("BBL_DEBUG", "true")
        .args(["--debug=false", "version"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Resolved invocation").not());
}
