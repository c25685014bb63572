//! In-memory Jenkins server.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use crate::api::JenkinsApi;
use crate::endpoints::url_encoding::{job_path, split_parent};
use crate::error::{ClientError, Result};
use crate::models::JobRef;

/// Base URL reported by [`FakeJenkins`].
pub const FAKE_BASE_URL: &str = "http://jenkins.test";

const FREESTYLE_CLASS: &str = "hudson.model.FreeStyleProject";
const FOLDER_CLASS: &str = "com.cloudbees.hudson.plugins.folder.Folder";

#[derive(Debug, Clone)]
struct FakeJob {
    job: JobRef,
    config: String,
    config_error: Option<u16>,
}

#[derive(Debug, Default)]
struct State {
    /// Insertion order is the server order.
    jobs: Vec<FakeJob>,
    created: Vec<String>,
    updated: Vec<String>,
}

/// A [`JenkinsApi`] backed by an ordered in-memory job list.
///
/// Jobs are registered by full name (`folder/name`); a job's parent folder
/// should be registered before it. Creates and updates are applied to the
/// in-memory state and recorded for inspection.
#[derive(Debug, Default)]
pub struct FakeJenkins {
    state: Mutex<State>,
    listing_errors: HashSet<String>,
    root_listing_error: bool,
}

fn job_url(full_name: &str) -> String {
    match job_path(full_name) {
        Ok(path) => format!("{}{}/", FAKE_BASE_URL, path),
        Err(_) => format!("{}/job/{}/", FAKE_BASE_URL, full_name),
    }
}

fn job_ref(full_name: &str, class: &str, disabled: Option<bool>) -> JobRef {
    let (_, leaf) = split_parent(full_name);
    JobRef {
        name: leaf.clone(),
        full_name: full_name.trim_matches('/').to_string(),
        display_name: Some(leaf),
        url: job_url(full_name),
        class: Some(class.to_string()),
        disabled,
    }
}

impl FakeJenkins {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(self, job: JobRef, config: &str) -> Self {
        self.lock().jobs.push(FakeJob {
            job,
            config: config.to_string(),
            config_error: None,
        });
        self
    }

    fn edit(self, full_name: &str, f: impl FnOnce(&mut FakeJob)) -> Self {
        if let Some(entry) = self
            .lock()
            .jobs
            .iter_mut()
            .find(|j| j.job.full_name == full_name)
        {
            f(entry);
        }
        self
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Add an enabled job.
    pub fn with_job(self, full_name: &str, config: &str) -> Self {
        let job = job_ref(full_name, FREESTYLE_CLASS, Some(false));
        self.push(job, config)
    }

    /// Add a disabled job.
    pub fn with_disabled_job(self, full_name: &str, config: &str) -> Self {
        let job = job_ref(full_name, FREESTYLE_CLASS, Some(true));
        self.push(job, config)
    }

    /// Add a job whose type reports no disabled flag.
    pub fn with_untyped_job(self, full_name: &str, config: &str) -> Self {
        let job = job_ref(full_name, FREESTYLE_CLASS, None);
        self.push(job, config)
    }

    /// Add a folder.
    pub fn with_folder(self, full_name: &str) -> Self {
        let job = job_ref(full_name, FOLDER_CLASS, None);
        self.push(job, "<com.cloudbees.hudson.plugins.folder.Folder/>")
    }

    /// Override the display name of a registered job (`None` removes it).
    pub fn with_display_name(self, full_name: &str, display_name: Option<&str>) -> Self {
        let display_name = display_name.map(str::to_string);
        self.edit(full_name, |entry| entry.job.display_name = display_name)
    }

    /// Make fetching the configuration of a registered job fail with `status`.
    pub fn with_config_error(self, full_name: &str, status: u16) -> Self {
        self.edit(full_name, |entry| entry.config_error = Some(status))
    }

    /// Make listing the children of a folder fail.
    pub fn with_listing_error(mut self, folder: &str) -> Self {
        self.listing_errors.insert(folder.to_string());
        self
    }

    /// Make listing the root fail.
    pub fn with_root_listing_error(mut self) -> Self {
        self.root_listing_error = true;
        self
    }

    /// Current configuration of a job.
    pub fn config_of(&self, full_name: &str) -> Option<String> {
        self.lock()
            .jobs
            .iter()
            .find(|j| j.job.full_name == full_name)
            .map(|j| j.config.clone())
    }

    /// Names passed to successful `create_job` calls, in call order.
    pub fn created(&self) -> Vec<String> {
        self.lock().created.clone()
    }

    /// Names passed to successful `update_config` calls, in call order.
    pub fn updated(&self) -> Vec<String> {
        self.lock().updated.clone()
    }

    fn not_found(full_name: &str) -> ClientError {
        ClientError::NotFound(format!("job '{}'", full_name))
    }
}

impl JenkinsApi for FakeJenkins {
    fn base_url(&self) -> &str {
        FAKE_BASE_URL
    }

    async fn list_children(&self, folder: Option<&str>) -> Result<Vec<JobRef>> {
        let folder = folder.map(|f| f.trim_matches('/')).filter(|f| !f.is_empty());
        let failing = match folder {
            Some(name) => self.listing_errors.contains(name),
            None => self.root_listing_error,
        };
        if failing {
            return Err(ClientError::ApiError {
                status: 500,
                url: format!(
                    "{}api/json",
                    folder.map(job_url).unwrap_or_else(|| format!("{}/", FAKE_BASE_URL))
                ),
                message: "Server Error".to_string(),
            });
        }

        Ok(self
            .lock()
            .jobs
            .iter()
            .filter(|j| split_parent(&j.job.full_name).0.as_deref() == folder)
            .map(|j| j.job.clone())
            .collect())
    }

    async fn get_job(&self, name: &str) -> Result<Option<JobRef>> {
        let name = name.trim_matches('/');
        Ok(self
            .lock()
            .jobs
            .iter()
            .find(|j| j.job.full_name == name)
            .map(|j| j.job.clone()))
    }

    async fn get_config(&self, full_name: &str) -> Result<String> {
        let state = self.lock();
        let entry = state
            .jobs
            .iter()
            .find(|j| j.job.full_name == full_name)
            .ok_or_else(|| Self::not_found(full_name))?;
        match entry.config_error {
            Some(status) => Err(ClientError::ApiError {
                status,
                url: format!("{}config.xml", entry.job.url),
                message: "Injected failure".to_string(),
            }),
            None => Ok(entry.config.clone()),
        }
    }

    async fn update_config(&self, full_name: &str, xml: &str) -> Result<()> {
        let mut state = self.lock();
        let entry = state
            .jobs
            .iter_mut()
            .find(|j| j.job.full_name == full_name)
            .ok_or_else(|| Self::not_found(full_name))?;
        entry.config = xml.to_string();
        state.updated.push(full_name.to_string());
        Ok(())
    }

    async fn create_job(&self, name: &str, xml: &str) -> Result<()> {
        let (parent, leaf) = split_parent(name);
        if leaf.is_empty() {
            return Err(ClientError::InvalidRequest(
                "job name must not be empty".to_string(),
            ));
        }
        let full_name = match &parent {
            Some(parent) => format!("{}/{}", parent, leaf),
            None => leaf,
        };

        let mut state = self.lock();
        if let Some(parent) = &parent
            && !state.jobs.iter().any(|j| &j.job.full_name == parent)
        {
            return Err(Self::not_found(parent));
        }
        if state.jobs.iter().any(|j| j.job.full_name == full_name) {
            return Err(ClientError::ApiError {
                status: 400,
                url: format!("{}/createItem", FAKE_BASE_URL),
                message: format!("A job already exists with the name '{}'", full_name),
            });
        }

        state.jobs.push(FakeJob {
            job: job_ref(&full_name, FREESTYLE_CLASS, Some(false)),
            config: xml.to_string(),
            config_error: None,
        });
        state.created.push(full_name);
        Ok(())
    }
}
