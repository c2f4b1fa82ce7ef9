//! Integration tests for error handling and exit codes.
//!
//! - Exit code 0: Success
//! - Exit code 1: Semantic failure (required field missing)
//! - Exit code 3: No settings file found
//! - Exit code 4: Invalid arguments
//! - Exit code 7: Settings file could not be parsed

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_missing_settings_file_exit_code() {
    let env = TestEnv::new();

    env.command()
        .arg("show")
        .arg(env.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("samp.json or samp.yaml"));
}

#[test]
fn test_malformed_json_exit_code() {
    let env = TestEnv::new();
    env.write_json(r#"{"port": "#);

    env.command()
        .arg("show")
        .arg(env.path())
        .assert()
        .code(7)
        .stderr(predicate::str::contains("samp.json"));
}

#[test]
fn test_malformed_yaml_exit_code() {
    let env = TestEnv::new();
    env.write_yaml("invalid: yaml: syntax:");

    env.command()
        .arg("show")
        .arg(env.path())
        .assert()
        .code(7)
        .stderr(predicate::str::contains("samp.yaml"));
}

#[test]
fn test_not_a_directory_exit_code() {
    let env = TestEnv::new();

    env.command()
        .arg("show")
        .arg(env.path().join("missing"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let env = TestEnv::new();

    env.command().arg("launch").assert().failure();
}
