//! REST API endpoint implementations.
//!
//! Each function issues one request against the Jenkins remote API and maps
//! the response into crate models. Authentication and retries are applied
//! here; callers only supply the HTTP client, base URL and job names.

pub mod jobs;
mod request;
pub mod url_encoding;

pub use jobs::{create_job, get_config, get_job, list_children, update_config};
pub use request::send_request_with_retry;
pub use url_encoding::{encode_path_segment, job_path};
