//! Depth-first walk over every job on the server.
//!
//! Responsibilities:
//! - Yield each item (jobs and folders) in server order, folders before their
//!   contents.
//! - Isolate folder listing failures: a nested folder that cannot be listed
//!   becomes one [`JobFailure`] and the walk continues with its siblings.
//!
//! Does NOT handle:
//! - Filtering (disabled jobs, name patterns); callers decide what to skip.
//!
//! Invariants:
//! - Failing to list the root is fatal and surfaces from [`Inventory::open`].
//! - Each folder is listed at most once per walk.

use thiserror::Error;
use tracing::debug;

use crate::api::JenkinsApi;
use crate::error::ClientError;
use crate::models::JobRef;

/// A failure confined to one item of a walk.
#[derive(Debug, Error)]
#[error("{url}: {source}")]
pub struct JobFailure {
    /// URL of the job or folder the failure belongs to.
    pub url: String,
    #[source]
    pub source: ClientError,
}

impl JobFailure {
    pub fn new(url: impl Into<String>, source: ClientError) -> Self {
        Self {
            url: url.into(),
            source,
        }
    }
}

/// One step of a walk: the next item, or the failure that replaced it.
pub type InventoryItem = Result<JobRef, JobFailure>;

/// Sequential walk over the remote job tree.
pub struct Inventory<'a, A: JenkinsApi> {
    api: &'a A,
    /// Items still to yield; the next item is at the end.
    pending: Vec<JobRef>,
    /// Folder yielded last, listed on the following step.
    expand: Option<JobRef>,
}

impl<'a, A: JenkinsApi> Inventory<'a, A> {
    /// Start a walk by listing the root.
    pub async fn open(api: &'a A) -> Result<Self, ClientError> {
        let mut root = api.list_children(None).await?;
        root.reverse();
        Ok(Self {
            api,
            pending: root,
            expand: None,
        })
    }

    /// Advance the walk; `None` once every item has been visited.
    pub async fn next_item(&mut self) -> Option<InventoryItem> {
        if let Some(folder) = self.expand.take() {
            match self.api.list_children(Some(&folder.full_name)).await {
                Ok(mut children) => {
                    debug!(folder = %folder.full_name, count = children.len(), "Expanding folder");
                    children.reverse();
                    self.pending.extend(children);
                }
                Err(source) => return Some(Err(JobFailure::new(folder.url, source))),
            }
        }

        let job = self.pending.pop()?;
        if job.is_folder() {
            self.expand = Some(job.clone());
        }
        Some(Ok(job))
    }
}
