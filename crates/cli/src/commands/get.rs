//! `ji get`: save one job's configuration.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use ji_client::JenkinsApi;

use crate::cancellation::{CancellationToken, cancellable};
use crate::error::JobError;
use crate::jobs::{WriteOptions, WriteOutcome, write_config};

/// Options for one `get` run.
#[derive(Debug, Clone)]
pub struct GetOptions<'a> {
    /// Exact full name of the job.
    pub name: String,
    /// Output file name, or `-` for stdout.
    pub filename: Option<String>,
    pub force: bool,
    pub dir: &'a Path,
}

/// Look up the job and write its configuration.
///
/// A missing job is a [`JobError::NotFound`]; nothing is written.
pub async fn run<A, W>(
    api: &A,
    options: &GetOptions<'_>,
    out: &mut W,
    cancel: &CancellationToken,
) -> Result<WriteOutcome>
where
    A: JenkinsApi,
    W: Write,
{
    let job = cancellable(cancel, api.get_job(&options.name))
        .await??
        .ok_or_else(|| JobError::NotFound(options.name.clone()))?;

    let write_options = WriteOptions {
        filename: options.filename.as_deref(),
        force: options.force,
        dir: options.dir,
    };
    cancellable(cancel, write_config(api, &job, &write_options, out)).await?
}
