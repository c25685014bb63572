//! Persisting job configuration to files or standard output.
//!
//! Responsibilities:
//! - Resolve the output name: explicit file name, display name, then URL.
//! - Refuse to overwrite existing files unless forced.
//! - Write raw configuration XML to the resolved file or to stdout.
//!
//! Does NOT handle:
//! - Fetch errors; they propagate to the caller.
//!
//! Invariants:
//! - At most one write per call; a refused write touches nothing.
//! - The `-` target writes to stdout only and skips the existence check.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ji_client::{JenkinsApi, JobRef};
use tracing::{info, warn};

use super::filename::create_valid_filename;

/// Target name meaning standard output.
pub const STDOUT_SENTINEL: &str = "-";

/// Where and how a configuration is written.
#[derive(Debug, Clone, Copy)]
pub struct WriteOptions<'a> {
    /// Explicit output name; `-` for stdout. Empty is treated as unset.
    pub filename: Option<&'a str>,
    /// Overwrite existing files.
    pub force: bool,
    /// Directory file names are resolved against.
    pub dir: &'a Path,
}

/// What a write did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Stdout,
    Saved(PathBuf),
    /// The file existed and `force` was not set.
    Skipped(PathBuf),
}

enum Target {
    Stdout,
    File { name: String, path: PathBuf },
    Existing { name: String, path: PathBuf },
}

fn resolve_target(job: &JobRef, options: &WriteOptions<'_>) -> Target {
    let name = match options.filename.filter(|f| !f.is_empty()) {
        Some(filename) => filename.to_string(),
        None => match job.display_name() {
            Some(display_name) => display_name.to_string(),
            None => {
                warn!("Cannot use name for filename. Using url.");
                job.url.clone()
            }
        },
    };

    if name == STDOUT_SENTINEL {
        return Target::Stdout;
    }

    let name = create_valid_filename(&name);
    let path = options.dir.join(&name);
    if path.exists() && !options.force {
        Target::Existing { name, path }
    } else {
        Target::File { name, path }
    }
}

/// Fetch a job's configuration and write it.
pub async fn write_config<A, W>(
    api: &A,
    job: &JobRef,
    options: &WriteOptions<'_>,
    out: &mut W,
) -> Result<WriteOutcome>
where
    A: JenkinsApi,
    W: Write,
{
    let target = resolve_target(job, options);
    if let Target::Existing { name, path } = target {
        warn!("Not overwriting {}", name);
        return Ok(WriteOutcome::Skipped(path));
    }

    let xml = api
        .get_config(&job.full_name)
        .await
        .with_context(|| format!("Failed to fetch configuration for {}", job.url))?;
    emit(target, job, &xml, out).await
}

/// Write configuration that was already fetched.
pub async fn write_fetched<W: Write>(
    job: &JobRef,
    xml: &str,
    options: &WriteOptions<'_>,
    out: &mut W,
) -> Result<WriteOutcome> {
    emit(resolve_target(job, options), job, xml, out).await
}

async fn emit<W: Write>(target: Target, job: &JobRef, xml: &str, out: &mut W) -> Result<WriteOutcome> {
    match target {
        Target::Stdout => {
            out.write_all(xml.as_bytes())
                .context("Failed to write configuration to standard output")?;
            out.flush()?;
            Ok(WriteOutcome::Stdout)
        }
        Target::Existing { name, path } => {
            warn!("Not overwriting {}", name);
            Ok(WriteOutcome::Skipped(path))
        }
        Target::File { name, path } => {
            info!("Saving {} to {}", job.url, name);
            tokio::fs::write(&path, xml)
                .await
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            Ok(WriteOutcome::Saved(path))
        }
    }
}
