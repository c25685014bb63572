//! Integration tests for behavior shared by every command.
//!
//! Responsibilities:
//! - `--help-env` short-circuiting argument validation and configuration.
//! - Configuration failures and connection errors mapping to exit codes.
//! - Shell completions working without configuration.

mod common;

use common::ji_cmd;
use predicates::prelude::*;

#[test]
fn test_help_env_prints_variables_and_exits() {
    ji_cmd()
        .arg("--help-env")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("JENKINS_URL")
                .and(predicate::str::contains("JENKINS_USER"))
                .and(predicate::str::contains("JENKINS_TOKEN")),
        );
}

#[test]
fn test_help_env_wins_over_missing_arguments() {
    // `get` requires a name; --help-env still exits cleanly.
    ji_cmd()
        .args(["get", "--help-env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Environment Variable Help"));
}

#[test]
fn test_missing_url_is_a_general_error() {
    ji_cmd()
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JENKINS_URL"));
}

#[test]
fn test_missing_token_is_a_general_error() {
    ji_cmd()
        .env("JENKINS_URL", "http://127.0.0.1:9")
        .env_remove("JENKINS_TOKEN")
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JENKINS_TOKEN"));
}

#[test]
fn test_invalid_url_is_a_general_error() {
    ji_cmd()
        .env("JENKINS_URL", "ftp://jenkins.example.com")
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported scheme"));
}

#[test]
fn test_unreachable_server_is_a_connection_error() {
    // Port 9 (discard) is closed on test machines.
    ji_cmd()
        .env("JENKINS_URL", "http://127.0.0.1:9")
        .arg("list")
        .assert()
        .code(3);
}

#[test]
fn test_missing_dotenv_is_warned_about() {
    let dir = tempfile::TempDir::new().unwrap();
    ji_cmd()
        .current_dir(dir.path())
        .env_remove("DOTENV_DISABLED")
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "No .env found.  Try --help-env for more info.",
        ));
}

#[test]
fn test_dotenv_supplies_configuration() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        "JENKINS_URL=http://127.0.0.1:9\n",
    )
    .unwrap();

    // Config is complete, so the failure is the connection, not the config.
    ji_cmd()
        .current_dir(dir.path())
        .env_remove("DOTENV_DISABLED")
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No .env found").not());
}

#[test]
fn test_completions_need_no_configuration() {
    for shell in ["bash", "zsh", "fish", "powershell", "elvish"] {
        ji_cmd()
            .env_remove("JENKINS_USER")
            .env_remove("JENKINS_TOKEN")
            .args(["completions", shell])
            .assert()
            .success()
            .stdout(predicate::str::is_empty().not());
    }
}

#[test]
fn test_unknown_command_is_rejected() {
    ji_cmd().arg("delete").assert().failure();
}
