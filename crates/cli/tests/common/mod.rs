//! Shared test utilities for `ji` integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the Jenkins endpoints most tests need on a wiremock server.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Credentials are `admin` / `api-token`; retries are disabled.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// `Authorization` value for the test credentials.
pub const BASIC_AUTH: &str = "Basic YWRtaW46YXBpLXRva2Vu";

/// Returns a hermetic `ji` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - User and token are set to dummy values to satisfy config validation.
/// - Retries are off and colors are disabled so output is stable.
pub fn ji_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("ji");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("JENKINS_USER", "admin")
        .env("JENKINS_TOKEN", "api-token")
        .env("JENKINS_MAX_RETRIES", "0")
        .env("NO_COLOR", "1");

    // Clear potential host leakage
    cmd.env_remove("JENKINS_URL")
        .env_remove("JENKINS_SKIP_VERIFY")
        .env_remove("JENKINS_TIMEOUT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `ji` command pointed at a mock server.
pub fn ji_cmd_with_server(server: &MockServer) -> Command {
    let mut cmd = ji_cmd();
    cmd.env("JENKINS_URL", server.uri());
    cmd
}

/// A job entry as Jenkins reports it in a listing.
pub fn job_json(server: &MockServer, full_name: &str, class: &str, disabled: Option<bool>) -> Value {
    let name = full_name.rsplit('/').next().unwrap_or(full_name);
    let job_path: String = full_name
        .split('/')
        .map(|segment| format!("/job/{}", segment))
        .collect();
    let mut job = json!({
        "_class": class,
        "name": name,
        "fullName": full_name,
        "displayName": name,
        "url": format!("{}{}/", server.uri(), job_path),
    });
    if let Some(disabled) = disabled {
        job["disabled"] = json!(disabled);
    }
    job
}

/// A freestyle job entry.
pub fn freestyle(server: &MockServer, full_name: &str, disabled: bool) -> Value {
    job_json(server, full_name, "hudson.model.FreeStyleProject", Some(disabled))
}

/// A folder entry.
pub fn folder(server: &MockServer, full_name: &str) -> Value {
    job_json(server, full_name, "com.cloudbees.hudson.plugins.folder.Folder", None)
}

/// Mount a listing for the root (`folder_path` = "") or a folder (`/job/team`).
pub async fn mount_listing(server: &MockServer, folder_path: &str, jobs: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(format!("{}/api/json", folder_path)))
        .and(header("Authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "jobs": jobs })))
        .mount(server)
        .await;
}

/// Mount a job's `config.xml`.
pub async fn mount_config(server: &MockServer, job_path: &str, xml: &str) {
    Mock::given(method("GET"))
        .and(path(format!("{}/config.xml", job_path)))
        .and(header("Authorization", BASIC_AUTH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/xml")
                .set_body_string(xml),
        )
        .mount(server)
        .await;
}

/// Mount the single-job lookup used by `get` and `put`.
pub async fn mount_job(server: &MockServer, job_path: &str, job: Value) {
    Mock::given(method("GET"))
        .and(path(format!("{}/api/json", job_path)))
        .respond_with(ResponseTemplate::new(200).set_body_json(job))
        .mount(server)
        .await;
}

/// Mount a 404 for a job lookup.
pub async fn mount_missing_job(server: &MockServer, job_path: &str) {
    Mock::given(method("GET"))
        .and(path(format!("{}/api/json", job_path)))
        .respond_with(ResponseTemplate::new(404))
        .mount(server)
        .await;
}

/// A small freestyle `config.xml`.
pub fn config_xml(command: &str) -> String {
    format!(
        "<?xml version='1.1' encoding='UTF-8'?>\n<project>\n  <disabled>false</disabled>\n  <builders>\n    <hudson.tasks.Shell>\n      <command>{}</command>\n    </hudson.tasks.Shell>\n  </builders>\n</project>\n",
        command
    )
}
