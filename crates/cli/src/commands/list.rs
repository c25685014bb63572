//! `ji list`: print the full name of every job in the inventory.
//!
//! Responsibilities:
//! - Walk the whole job tree, folders included.
//! - Skip disabled jobs unless requested, and names not matching `--match`.
//!
//! Does NOT handle:
//! - Job configuration (see `grep`).
//!
//! Invariants:
//! - A failure on one item is logged with its URL and the walk continues.
//! - Output order is the server's order, so repeated runs are identical.

use anyhow::{Context, Result};
use ji_client::{Inventory, JenkinsApi};
use tracing::{debug, error, info};

use crate::cancellation::{CancellationToken, cancellable};
use crate::jobs::{SearchPattern, is_excluded, matches};

/// Options for one `list` run.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Name filter built from `--match`.
    pub pattern: Option<SearchPattern>,
    pub show_disabled: bool,
}

/// What a `list` run reported.
#[derive(Debug, Default)]
pub struct ListReport {
    /// Full names logged, in order.
    pub listed: Vec<String>,
    /// URLs of items that failed.
    pub failures: Vec<String>,
}

pub async fn run<A: JenkinsApi>(
    api: &A,
    options: &ListOptions,
    cancel: &CancellationToken,
) -> Result<ListReport> {
    let mut inventory = cancellable(cancel, Inventory::open(api))
        .await?
        .with_context(|| format!("Failed to list jobs at {}", api.base_url()))?;
    let mut report = ListReport::default();

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
        if let Some(pattern) = &options.pattern
            && !matches(pattern, &job.full_name)
        {
            continue;
        }

        info!("{}", job.full_name);
        report.listed.push(job.full_name);
    }

    Ok(report)
}
