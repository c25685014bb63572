//! Error types for configuration loading.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, positions).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}. Try --help-env for more info.")]
    MissingEnvVar(String),

    #[error(
        "Missing environment variables listed in .env.example: {}",
        .0.join(", ")
    )]
    MissingEnvVars(Vec<String>),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Jenkins URL is required. Set JENKINS_URL or try --help-env for more info.")]
    MissingBaseUrl,

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse {file} file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse {
        file: &'static str,
        error_index: usize,
    },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read {file} file: {kind}")]
    DotenvIo {
        file: &'static str,
        kind: ErrorKind,
    },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load {file} file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown { file: &'static str },
}

impl ConfigError {
    /// Convert a dotenvy error into a secret-free configuration error.
    pub(crate) fn from_dotenv(file: &'static str, err: dotenvy::Error) -> Self {
        match err {
            dotenvy::Error::LineParse(_, idx) => ConfigError::DotenvParse {
                file,
                error_index: idx,
            },
            dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
                file,
                kind: io_err.kind(),
            },
            _ => ConfigError::DotenvUnknown { file },
        }
    }
}
