//! CLI command implementations.
//!
//! Handlers are generic over [`ji_client::JenkinsApi`] and return a report of
//! what they did, so they run unchanged against the HTTP client or an
//! in-memory fake.

pub mod completions;
pub mod get;
pub mod grep;
pub mod list;
pub mod put;

use anyhow::{Context, Result};
use ji_client::JenkinsClient;
use ji_config::Config;

/// Build the HTTP client for a loaded configuration.
pub fn build_client_from_config(config: &Config) -> Result<JenkinsClient> {
    JenkinsClient::builder()
        .from_config(config)
        .build()
        .context("Failed to create Jenkins client")
}
