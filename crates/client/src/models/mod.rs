//! Data models for Jenkins API responses.

mod jobs;

pub use jobs::{JOB_TREE_FIELDS, JobRef, JobsResponse};
