//! The remote operations command handlers depend on.
//!
//! [`JenkinsApi`] is the seam between command logic and the network:
//! [`JenkinsClient`] implements it over HTTP and
//! [`crate::testing::FakeJenkins`] implements it in memory.

use crate::client::JenkinsClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::JobRef;

/// Operations on the remote job inventory.
#[allow(async_fn_in_trait)]
pub trait JenkinsApi {
    /// Base URL of the server, without a trailing slash.
    fn base_url(&self) -> &str;

    /// Direct children of a folder, or of the root when `folder` is `None`,
    /// in server order.
    async fn list_children(&self, folder: Option<&str>) -> Result<Vec<JobRef>>;

    /// Look up a job by full name; `None` when it does not exist.
    async fn get_job(&self, name: &str) -> Result<Option<JobRef>>;

    /// Configuration XML of a job.
    async fn get_config(&self, full_name: &str) -> Result<String>;

    /// Replace the configuration XML of an existing job.
    async fn update_config(&self, full_name: &str, xml: &str) -> Result<()>;

    /// Create a job (inside its parent folder for `folder/name`).
    async fn create_job(&self, name: &str, xml: &str) -> Result<()>;
}

impl JenkinsApi for JenkinsClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_children(&self, folder: Option<&str>) -> Result<Vec<JobRef>> {
        endpoints::list_children(
            &self.http,
            &self.base_url,
            &self.credentials,
            folder,
            self.max_retries,
        )
        .await
    }

    async fn get_job(&self, name: &str) -> Result<Option<JobRef>> {
        endpoints::get_job(
            &self.http,
            &self.base_url,
            &self.credentials,
            name,
            self.max_retries,
        )
        .await
    }

    async fn get_config(&self, full_name: &str) -> Result<String> {
        endpoints::get_config(
            &self.http,
            &self.base_url,
            &self.credentials,
            full_name,
            self.max_retries,
        )
        .await
    }

    async fn update_config(&self, full_name: &str, xml: &str) -> Result<()> {
        endpoints::update_config(
            &self.http,
            &self.base_url,
            &self.credentials,
            full_name,
            xml,
            self.max_retries,
        )
        .await
    }

    async fn create_job(&self, name: &str, xml: &str) -> Result<()> {
        endpoints::create_job(
            &self.http,
            &self.base_url,
            &self.credentials,
            name,
            xml,
            self.max_retries,
        )
        .await
    }
}
