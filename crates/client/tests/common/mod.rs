//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Jenkins client. All integration tests should use
//! these utilities to ensure consistency.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

// Re-export test utilities from ji-client
#[allow(unused_imports)]
pub use ji_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use ji_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use ji_client::Credentials;
use secrecy::SecretString;

/// Credentials matching the `Authorization` header of [`basic_auth_header`].
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new(
        "admin".to_string(),
        SecretString::new("api-token".to_string().into()),
    )
}

/// `Authorization` value for `admin:api-token`.
#[allow(dead_code)]
pub fn basic_auth_header() -> &'static str {
    "Basic YWRtaW46YXBpLXRva2Vu"
}
