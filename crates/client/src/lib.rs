//! Jenkins REST API client.
//!
//! This crate provides a typed client for the Jenkins remote API: listing the
//! job tree, looking up jobs, and reading, replacing and creating job
//! configuration XML. Requests authenticate with a user and API token.
//!
//! Command logic is written against the [`JenkinsApi`] trait so it can run
//! against [`testing::FakeJenkins`] without a server.

mod api;
mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
mod inventory;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use api::JenkinsApi;
pub use auth::Credentials;
pub use client::JenkinsClient;
pub use client::builder::JenkinsClientBuilder;
pub use error::{ClientError, Result};
pub use inventory::{Inventory, InventoryItem, JobFailure};
pub use models::{JobRef, JobsResponse};
