//! `ji grep`: search every job's configuration XML for a literal string.
//!
//! Responsibilities:
//! - Walk the job tree and fetch each included job's configuration.
//! - Report hits: the URL with `--list`, otherwise each matching line on stdout.
//! - Save matching configuration with `--write`.
//!
//! Does NOT handle:
//! - Name matching (see `list`).
//!
//! Invariants:
//! - The pattern is built once and applied to every job.
//! - A failure on one job (fetch or write) is logged with its URL and the walk
//!   continues.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ji_client::{Inventory, JenkinsApi, JobRef};
use tracing::{debug, error, info};

use crate::cancellation::{CancellationToken, cancellable};
use crate::jobs::highlight::{format_hit_line, highlight_matches, matching_lines};
use crate::jobs::writer::write_fetched;
use crate::jobs::{SearchPattern, WriteOptions, WriteOutcome, is_excluded, matches};

/// Options for one `grep` run.
#[derive(Debug, Clone)]
pub struct GrepOptions<'a> {
    pub pattern: SearchPattern,
    /// Only log the URL of each hit.
    pub list_only: bool,
    pub show_disabled: bool,
    /// Save matching configuration to `<display name>.xml`.
    pub write: bool,
    /// Overwrite existing files when writing.
    pub force: bool,
    /// Highlight matches in printed lines.
    pub color: bool,
    /// Directory written files go to.
    pub dir: &'a Path,
}

/// What a `grep` run reported.
#[derive(Debug, Default)]
pub struct GrepReport {
    /// URLs of matching jobs, in order.
    pub hits: Vec<String>,
    /// Files written with `--write`.
    pub written: Vec<PathBuf>,
    /// URLs of items that failed.
    pub failures: Vec<String>,
}

pub async fn run<A, W>(
    api: &A,
    options: &GrepOptions<'_>,
    out: &mut W,
    cancel: &CancellationToken,
) -> Result<GrepReport>
where
    A: JenkinsApi,
    W: Write,
{
    let mut inventory = cancellable(cancel, Inventory::open(api))
        .await?
        .with_context(|| format!("Failed to list jobs at {}", api.base_url()))?;
    let mut report = GrepReport::default();

    while let Some(item) = cancellable(cancel, inventory.next_item()).await? {
        let job = match item {
            Ok(job) => job,
            Err(failure) => {
                error!("Error accessing {}: {}", failure.url, failure.source);
                report.failures.push(failure.url);
                continue;
            }
        };

        if is_excluded(&job, options.show_disabled) {
            debug!("Not checking {}: disabled", job.url);
            continue;
        }

        let xml = match cancellable(cancel, api.get_config(&job.full_name)).await? {
            Ok(xml) => xml,
            Err(e) => {
                error!("Error accessing configuration for {}: {}", job.url, e);
                report.failures.push(job.url);
                continue;
            }
        };
        if !matches(&options.pattern, &xml) {
            continue;
        }

        if let Err(e) = show_hit(&job, &xml, options, out, &mut report).await {
            error!("Error reporting {}: {:#}", job.url, e);
            report.failures.push(job.url.clone());
        }
        report.hits.push(job.url);
    }

    Ok(report)
}

async fn show_hit<W: Write>(
    job: &JobRef,
    xml: &str,
    options: &GrepOptions<'_>,
    out: &mut W,
    report: &mut GrepReport,
) -> Result<()> {
    if options.list_only {
        info!("{}", job.url);
    } else {
        for line in matching_lines(xml, &options.pattern) {
            let line = highlight_matches(line, &options.pattern, options.color);
            writeln!(out, "{}", format_hit_line(job, &line))?;
        }
    }

    if options.write {
        let write_options = WriteOptions {
            filename: None,
            force: options.force,
            dir: options.dir,
        };
        if let WriteOutcome::Saved(path) = write_fetched(job, xml, &write_options, out).await? {
            report.written.push(path);
        }
    }
    Ok(())
}
