//! `.env` loading and the `.env.example` contract.
//!
//! Responsibilities:
//! - Load `.env` from a directory into the process environment.
//! - Verify that every key listed in `.env.example` ended up set and non-empty.
//!
//! Does NOT handle:
//! - Reading typed values out of the environment (see env.rs).
//!
//! Invariants:
//! - Variables already present in the process environment are never overridden.
//! - A missing `.env` is not an error; it is reported as `DotenvStatus::Missing`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::env::env_var_or_none;
use super::error::ConfigError;
use crate::constants::{DOTENV_EXAMPLE_FILE, DOTENV_FILE, ENV_DOTENV_DISABLED};

/// Outcome of attempting to load the `.env` file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DotenvStatus {
    /// `load_dotenv()` has not been called.
    #[default]
    NotAttempted,
    /// The file was found and loaded.
    Loaded(PathBuf),
    /// No `.env` in the working directory; only the process environment is used.
    Missing,
    /// Loading was skipped because `DOTENV_DISABLED` is set.
    Disabled,
}

/// Check if dotenv loading is disabled via environment variable.
pub(crate) fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
        Some("1") | Some("true")
    )
}

/// Load `<dir>/.env` and then check `<dir>/.env.example`.
pub(crate) fn load_from_dir(dir: &Path) -> Result<DotenvStatus, ConfigError> {
    if dotenv_disabled() {
        debug!("Skipping {}: {} is set", DOTENV_FILE, ENV_DOTENV_DISABLED);
        return Ok(DotenvStatus::Disabled);
    }

    let env_path = dir.join(DOTENV_FILE);
    let status = match dotenvy::from_path(&env_path) {
        Ok(()) => {
            debug!("Loaded environment from {}", env_path.display());
            DotenvStatus::Loaded(env_path)
        }
        Err(dotenvy::Error::Io(io_err)) if io_err.kind() == ErrorKind::NotFound => {
            DotenvStatus::Missing
        }
        Err(e) => return Err(ConfigError::from_dotenv(DOTENV_FILE, e)),
    };

    check_example(&dir.join(DOTENV_EXAMPLE_FILE))?;
    Ok(status)
}

/// Every key declared in the example file must be set and non-empty.
fn check_example(example_path: &Path) -> Result<(), ConfigError> {
    let iter = match dotenvy::from_path_iter(example_path) {
        Ok(iter) => iter,
        Err(dotenvy::Error::Io(io_err)) if io_err.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(ConfigError::from_dotenv(DOTENV_EXAMPLE_FILE, e)),
    };

    let mut missing = Vec::new();
    for item in iter {
        let (key, _) = item.map_err(|e| ConfigError::from_dotenv(DOTENV_EXAMPLE_FILE, e))?;
        if env_var_or_none(&key).is_none() {
            missing.push(key);
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingEnvVars(missing))
    }
}
