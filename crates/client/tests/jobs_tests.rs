//! Job endpoint tests.
//!
//! This module tests the Jenkins job endpoints against a mock server:
//! - Listing the root and nested folders
//! - Looking up a job, including the 404 case
//! - Reading, replacing and creating configuration XML
//!
//! # Invariants
//! - Every request carries HTTP Basic credentials
//! - Job names are percent-encoded per path segment
//!
//! # What this does NOT handle
//! - Retry behavior (see retry_tests.rs)
//! - The folder walk (see inventory_tests.rs)

mod common;

use common::*;
use wiremock::matchers::{body_string, header, method, path, query_param};

#[tokio::test]
async fn test_list_root() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/json"))
        .and(query_param(
            "tree",
            "jobs[name,fullName,displayName,url,disabled,_class]",
        ))
        .and(header("authorization", basic_auth_header()))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("jobs/list_root.json")))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let jobs = endpoints::list_children(&client, &mock_server.uri(), &test_credentials(), None, 0)
        .await
        .unwrap();

    let names: Vec<&str> = jobs.iter().map(|j| j.full_name.as_str()).collect();
    assert_eq!(names, vec!["web-ci", "web-cd", "team"]);
    assert!(jobs[1].is_disabled());
    assert!(jobs[2].is_folder());
}

#[tokio::test]
async fn test_list_folder() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/job/team/api/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("jobs/list_folder.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let jobs = endpoints::list_children(
        &client,
        &mock_server.uri(),
        &test_credentials(),
        Some("team"),
        0,
    )
    .await
    .unwrap();

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].full_name, "team/deploy");
}

#[tokio::test]
async fn test_list_fills_missing_names_and_urls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/job/legacy/api/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("jobs/list_legacy.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let jobs = endpoints::list_children(
        &client,
        &mock_server.uri(),
        &test_credentials(),
        Some("legacy"),
        0,
    )
    .await
    .unwrap();

    assert_eq!(jobs[0].full_name, "legacy/old job");
    assert_eq!(
        jobs[0].url,
        format!("{}/job/legacy/job/old%20job/", mock_server.uri())
    );
    assert_eq!(jobs[0].display_name(), None);
}

#[tokio::test]
async fn test_list_invalid_json_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::list_children(&client, &mock_server.uri(), &test_credentials(), None, 0)
        .await
        .unwrap_err();

    assert!(matches!(err, ji_client::ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_get_job() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/job/web-ci/api/json"))
        .and(query_param(
            "tree",
            "name,fullName,displayName,url,disabled,_class",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("jobs/get_job.json")))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let job = endpoints::get_job(&client, &mock_server.uri(), &test_credentials(), "web-ci", 0)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(job.display_name(), Some("Web CI"));
    assert!(job.supports_disabled());
}

#[tokio::test]
async fn test_get_job_not_found_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/job/missing/api/json"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>Not Found</html>"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let job = endpoints::get_job(&client, &mock_server.uri(), &test_credentials(), "missing", 0)
        .await
        .unwrap();

    assert!(job.is_none());
}

#[tokio::test]
async fn test_get_job_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/job/web-ci/api/json"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::get_job(&client, &mock_server.uri(), &test_credentials(), "web-ci", 0)
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_get_config_nested_and_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/job/team/job/web%20ci/config.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<project><disabled>false</disabled></project>"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let xml = endpoints::get_config(
        &client,
        &mock_server.uri(),
        &test_credentials(),
        "team/web ci",
        0,
    )
    .await
    .unwrap();

    assert_eq!(xml, "<project><disabled>false</disabled></project>");
}

#[tokio::test]
async fn test_get_config_forbidden_reports_x_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/job/secret/config.xml"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("X-Error", "admin is missing the Job/ExtendedRead permission"),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::get_config(&client, &mock_server.uri(), &test_credentials(), "secret", 0)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert!(err.to_string().contains("ExtendedRead"));
}

#[tokio::test]
async fn test_update_config_posts_xml() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/job/web-ci/config.xml"))
        .and(header("content-type", "application/xml"))
        .and(body_string("<project/>"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    endpoints::update_config(
        &client,
        &mock_server.uri(),
        &test_credentials(),
        "web-ci",
        "<project/>",
        0,
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_create_job_in_folder() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/job/team/createItem"))
        .and(query_param("name", "new job"))
        .and(header("content-type", "application/xml"))
        .and(header("authorization", basic_auth_header()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    endpoints::create_job(
        &client,
        &mock_server.uri(),
        &test_credentials(),
        "team/new job",
        "<project/>",
        0,
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_create_existing_job_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/createItem"))
        .respond_with(
            ResponseTemplate::new(400).insert_header("X-Error", "A job already exists with the name 'web-ci'"),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::create_job(
        &client,
        &mock_server.uri(),
        &test_credentials(),
        "web-ci",
        "<project/>",
        0,
    )
    .await
    .unwrap_err();

    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_empty_job_name_is_rejected_before_request() {
    let client = Client::new();
    let err = endpoints::get_config(&client, "http://unused.invalid", &test_credentials(), "", 0)
        .await
        .unwrap_err();

    assert!(matches!(err, ji_client::ClientError::InvalidRequest(_)));
}
