//! `ji put`: upload configuration XML, creating the job if needed.
//!
//! Responsibilities:
//! - Validate the XML before any remote call.
//! - Create missing jobs; replace existing ones only with `--force`.
//!
//! Does NOT handle:
//! - Creating folders; `folder/name` requires the folder to exist.
//!
//! Invariants:
//! - Nothing is sent to the server unless the XML is well-formed.
//! - An existing job is never reconfigured without `--force`.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use ji_client::JenkinsApi;
use tracing::{error, info};

use crate::cancellation::{CancellationToken, cancellable};
use crate::error::JobError;
use crate::jobs::read_xml;
use crate::jobs::xml::STDIN_SENTINEL;

/// Options for one `put` run.
#[derive(Debug, Clone)]
pub struct PutOptions {
    /// File path, or `-` for standard input.
    pub source: String,
    /// Job name; defaults to the file stem.
    pub name: Option<String>,
    pub force: bool,
}

/// What a `put` run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutOutcome {
    Created(String),
    Updated(String),
    /// The job existed and `--force` was not set.
    Skipped(String),
}

/// Resolve the target job name from `--name` or the file stem.
fn job_name(options: &PutOptions) -> Result<String, JobError> {
    if let Some(name) = options.name.as_deref().map(str::trim)
        && !name.is_empty()
    {
        return Ok(name.to_string());
    }
    if options.source == STDIN_SENTINEL {
        return Err(JobError::InvalidName(
            "--name is required when reading from standard input".to_string(),
        ));
    }
    Path::new(&options.source)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            JobError::InvalidName(format!(
                "cannot derive a job name from '{}'",
                options.source
            ))
        })
}

pub async fn run<A, R>(
    api: &A,
    options: &PutOptions,
    stdin: R,
    cancel: &CancellationToken,
) -> Result<PutOutcome>
where
    A: JenkinsApi,
    R: Read,
{
    let name = job_name(options)?;
    let xml = read_xml(&options.source, stdin).await?;

    let existing = cancellable(cancel, api.get_job(&name))
        .await?
        .with_context(|| format!("Failed to look up job {}", name))?;

    match existing {
        None => {
            cancellable(cancel, api.create_job(&name, &xml))
                .await?
                .with_context(|| format!("Failed to create job {}", name))?;
            info!("Created job {}", name);
            Ok(PutOutcome::Created(name))
        }
        Some(_) if !options.force => {
            error!("Not overwriting job without force: {}", name);
            Ok(PutOutcome::Skipped(name))
        }
        Some(job) => {
            let full_name = if job.full_name.is_empty() {
                name
            } else {
                job.full_name
            };
            cancellable(cancel, api.update_config(&full_name, &xml))
                .await?
                .with_context(|| format!("Failed to update job {}", full_name))?;
            info!("Updated job {}", full_name);
            Ok(PutOutcome::Updated(full_name))
        }
    }
}
