//! Main Jenkins REST API client.
//!
//! This module provides the primary [`JenkinsClient`] for interacting with the
//! Jenkins remote API. Every request carries HTTP Basic credentials (user and
//! API token).
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - The operations themselves (see the [`crate::JenkinsApi`] implementation)
//!
//! # Invariants
//! - `base_url` never ends with a slash

pub mod builder;

use crate::auth::Credentials;

/// Jenkins REST API client.
///
/// # Creating a Client
///
/// Use [`JenkinsClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use ji_client::JenkinsClient;
/// use secrecy::SecretString;
///
/// let client = JenkinsClient::builder()
///     .base_url("https://jenkins.example.com".to_string())
///     .credentials("admin".to_string(), SecretString::new("api-token".to_string().into()))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct JenkinsClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) max_retries: usize,
}

impl JenkinsClient {
    /// Create a new client builder.
    pub fn builder() -> builder::JenkinsClientBuilder {
        builder::JenkinsClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Name of the user the client authenticates as.
    pub fn username(&self) -> &str {
        self.credentials.username()
    }
}
