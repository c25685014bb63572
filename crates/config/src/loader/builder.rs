//! Builder for assembling a [`Config`] from the environment and explicit overrides.
//!
//! Invariants:
//! - `build()` fails with a named variable when a required value is missing.
//! - The base URL must parse as an absolute http(s) URL.

use secrecy::SecretString;
use std::path::Path;
use std::time::Duration;

use super::dotenv::{self, DotenvStatus};
use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_MAX_RETRIES, ENV_JENKINS_TOKEN, ENV_JENKINS_URL, ENV_JENKINS_USER,
};
use crate::types::{AuthConfig, Config, ConnectionConfig};

/// Configuration loader that builds config from `.env` and environment variables.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    username: Option<String>,
    token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
    dotenv_status: DotenvStatus,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `.env` from the current directory if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", no file is read.
    /// The outcome is available from [`ConfigLoader::dotenv_status`].
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        self.load_dotenv_from(Path::new("."))
    }

    /// Load `.env` (and check `.env.example`) from a specific directory.
    pub fn load_dotenv_from(mut self, dir: &Path) -> Result<Self, ConfigError> {
        self.dotenv_status = dotenv::load_from_dir(dir)?;
        Ok(self)
    }

    /// What happened when `.env` loading was attempted.
    pub fn dotenv_status(&self) -> &DotenvStatus {
        &self.dotenv_status
    }

    /// Read configuration from `JENKINS_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the API token.
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(SecretString::new(token.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_token(&mut self, token: Option<SecretString>) {
        self.token = token;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self.base_url.ok_or(ConfigError::MissingBaseUrl)?;
        validate_base_url(&base_url)?;

        let username = self
            .username
            .ok_or_else(|| ConfigError::MissingEnvVar(ENV_JENKINS_USER.to_string()))?;
        let token = self
            .token
            .ok_or_else(|| ConfigError::MissingEnvVar(ENV_JENKINS_TOKEN.to_string()))?;

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout: self.timeout,
                max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            },
            auth: AuthConfig { username, token },
        })
    }
}

fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(base_url).map_err(|e| ConfigError::InvalidValue {
        var: ENV_JENKINS_URL.to_string(),
        message: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidValue {
            var: ENV_JENKINS_URL.to_string(),
            message: format!("unsupported scheme '{}', expected http or https", other),
        }),
    }
}
