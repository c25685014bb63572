//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse the `JENKINS_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_JENKINS_MAX_RETRIES, ENV_JENKINS_SKIP_VERIFY, ENV_JENKINS_TIMEOUT, ENV_JENKINS_TOKEN,
    ENV_JENKINS_URL, ENV_JENKINS_USER, MAX_MAX_RETRIES, MAX_TIMEOUT_SECS,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_JENKINS_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = env_var_or_none(ENV_JENKINS_USER) {
        loader.set_username(Some(username));
    }
    if let Some(token) = env_var_or_none(ENV_JENKINS_TOKEN) {
        loader.set_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = env_var_or_none(ENV_JENKINS_SKIP_VERIFY) {
        loader.set_skip_verify(Some(skip.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: ENV_JENKINS_SKIP_VERIFY.to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    if let Some(timeout) = env_var_or_none(ENV_JENKINS_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_JENKINS_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidValue {
                var: ENV_JENKINS_TIMEOUT.to_string(),
                message: format!("must be between 1 and {} (got {})", MAX_TIMEOUT_SECS, secs),
            });
        }
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = env_var_or_none(ENV_JENKINS_MAX_RETRIES) {
        let value: usize = retries.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_JENKINS_MAX_RETRIES.to_string(),
            message: "must be a non-negative integer".to_string(),
        })?;
        if value > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidValue {
                var: ENV_JENKINS_MAX_RETRIES.to_string(),
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
            });
        }
        loader.set_max_retries(Some(value));
    }
    Ok(())
}
