//! Job endpoints: listing, lookup, configuration read/write and creation.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::send_request_with_retry;
use crate::endpoints::url_encoding::{folder_path, job_path, split_parent};
use crate::error::{ClientError, Result};
use crate::models::{JOB_TREE_FIELDS, JobRef, JobsResponse};

const XML_CONTENT_TYPE: &str = "application/xml";

/// List the direct children of a folder, or of the root when `folder` is `None`.
///
/// Items missing `fullName` or `url` (older servers) get them derived from
/// the folder they were listed in.
pub async fn list_children(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    folder: Option<&str>,
    max_retries: usize,
) -> Result<Vec<JobRef>> {
    let parent_path = folder_path(folder)?;
    let url = format!("{}{}/api/json", base_url, parent_path);

    let builder = credentials
        .apply(client.get(&url))
        .query(&[("tree", format!("jobs[{}]", JOB_TREE_FIELDS))]);
    let response = send_request_with_retry(builder, max_retries).await?;

    let listing: JobsResponse = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse job listing at {}: {}", url, e))
    })?;

    let parent = folder.map(|f| f.trim_matches('/')).filter(|f| !f.is_empty());
    let mut jobs = listing.jobs;
    for job in &mut jobs {
        if job.full_name.is_empty() {
            job.full_name = match parent {
                Some(parent) => format!("{}/{}", parent, job.name),
                None => job.name.clone(),
            };
        }
        if job.url.is_empty() {
            job.url = format!("{}{}/", base_url, job_path(&job.full_name)?);
        }
    }

    debug!(folder = ?folder, count = jobs.len(), "Listed jobs");
    Ok(jobs)
}

/// Look up a job by its full name. A 404 means the job does not exist.
pub async fn get_job(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    name: &str,
    max_retries: usize,
) -> Result<Option<JobRef>> {
    let url = format!("{}{}/api/json", base_url, job_path(name)?);

    let builder = credentials
        .apply(client.get(&url))
        .query(&[("tree", JOB_TREE_FIELDS)]);
    let response = match send_request_with_retry(builder, max_retries).await {
        Ok(response) => response,
        Err(e) if e.is_not_found() => return Ok(None),
        Err(e) => return Err(e),
    };

    let job: JobRef = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse job at {}: {}", url, e))
    })?;
    Ok(Some(job))
}

/// Fetch the configuration XML of a job.
pub async fn get_config(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    full_name: &str,
    max_retries: usize,
) -> Result<String> {
    let url = format!("{}{}/config.xml", base_url, job_path(full_name)?);

    let builder = credentials.apply(client.get(&url));
    let response = send_request_with_retry(builder, max_retries).await?;

    Ok(response.text().await?)
}

/// Replace the configuration XML of an existing job.
pub async fn update_config(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    full_name: &str,
    xml: &str,
    max_retries: usize,
) -> Result<()> {
    let url = format!("{}{}/config.xml", base_url, job_path(full_name)?);

    let builder = credentials
        .apply(client.post(&url))
        .header(CONTENT_TYPE, XML_CONTENT_TYPE)
        .body(xml.to_string());
    send_request_with_retry(builder, max_retries).await?;

    debug!(job = %full_name, "Updated job configuration");
    Ok(())
}

/// Create a job from configuration XML.
///
/// `team/web-ci` creates `web-ci` inside the existing folder `team`.
pub async fn create_job(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    name: &str,
    xml: &str,
    max_retries: usize,
) -> Result<()> {
    let (parent, leaf) = split_parent(name);
    if leaf.is_empty() {
        return Err(ClientError::InvalidRequest(
            "job name must not be empty".to_string(),
        ));
    }
    let url = format!("{}{}/createItem", base_url, folder_path(parent.as_deref())?);

    let builder = credentials
        .apply(client.post(&url))
        .query(&[("name", leaf.as_str())])
        .header(CONTENT_TYPE, XML_CONTENT_TYPE)
        .body(xml.to_string());
    send_request_with_retry(builder, max_retries).await?;

    debug!(job = %name, "Created job");
    Ok(())
}
