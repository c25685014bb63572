//! Job models for the Jenkins JSON API.
//!
//! # What this module handles:
//! - The job handle returned by listings and lookups
//! - Folder detection from the item's `_class`
//!
//! # What this module does NOT handle:
//! - Configuration XML (fetched as raw text, see [`crate::endpoints::jobs`])
//! - HTTP transport (see [`crate::endpoints`])

use serde::{Deserialize, Serialize};

/// `tree` selector naming the job fields every request asks for.
pub const JOB_TREE_FIELDS: &str = "name,fullName,displayName,url,disabled,_class";

/// Item classes that contain other jobs.
const CONTAINER_CLASS_MARKERS: &[&str] = &[
    "Folder",
    "OrganizationFolder",
    "WorkflowMultiBranchProject",
];

/// A handle to one remote job or folder.
///
/// `disabled` is absent for item types that cannot be disabled (folders,
/// some plugin job types). Absence is treated as "not disabled".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRef {
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(rename = "_class", default)]
    pub class: Option<String>,
    #[serde(default)]
    pub disabled: Option<bool>,
}

impl JobRef {
    /// Whether the server reported a disabled flag for this item.
    pub fn supports_disabled(&self) -> bool {
        self.disabled.is_some()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }

    /// Whether this item holds nested jobs that an inventory walk expands.
    pub fn is_folder(&self) -> bool {
        self.class.as_deref().is_some_and(|class| {
            let simple = class.rsplit(['.', '$']).next().unwrap_or(class);
            CONTAINER_CLASS_MARKERS
                .iter()
                .any(|marker| simple.ends_with(marker))
        })
    }

    /// Display name, if present and non-blank.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

/// Response of a folder (or root) listing with `tree=jobs[...]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobsResponse {
    #[serde(default)]
    pub jobs: Vec<JobRef>,
}
