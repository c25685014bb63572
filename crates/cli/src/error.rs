//! CLI exit codes and command-level errors.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants and command errors to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs; an interrupt exits with success).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.
//! - Refused overwrites are not errors and never reach this module.

use ji_client::ClientError;
use thiserror::Error;

/// Errors raised by command handlers rather than the client.
#[derive(Debug, Error)]
pub enum JobError {
    /// `get` named a job the server does not have.
    #[error("No job found: {0}")]
    NotFound(String),

    /// Upload content is not well-formed XML.
    #[error("Provided XML could not be validated: {0}")]
    InvalidXml(String),

    /// A job name could not be determined or is unusable.
    #[error("Invalid job name: {0}")]
    InvalidName(String),
}

/// Structured exit codes for `ji`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed (including refused overwrites and interrupts).
    Success = 0,

    /// General error - unhandled or generic failure, including configuration errors.
    GeneralError = 1,

    /// Authentication failure - rejected user or API token (HTTP 401).
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,

    /// Resource not found - `get` on a job that does not exist.
    NotFound = 4,

    /// Validation error - malformed XML or unusable job name for `put`.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - insufficient privileges (HTTP 403).
    PermissionDenied = 6,

    /// Rate limited - HTTP 429 Too Many Requests.
    RateLimited = 7,

    /// Service unavailable - HTTP 502/503/504, Jenkins restarting or quieting down.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Returns true if this exit code indicates a retryable condition.
    #[allow(dead_code)]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            ExitCode::ConnectionError | ExitCode::RateLimited | ExitCode::ServiceUnavailable
        )
    }

    fn from_status(status: u16) -> Self {
        match status {
            400 => ExitCode::ValidationError,
            401 => ExitCode::AuthenticationFailed,
            403 => ExitCode::PermissionDenied,
            404 => ExitCode::NotFound,
            429 => ExitCode::RateLimited,
            502..=504 => ExitCode::ServiceUnavailable,
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,

            ClientError::ConnectionRefused(_) => ExitCode::ConnectionError,
            ClientError::Timeout(_) => ExitCode::ConnectionError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            ClientError::NotFound(_) => ExitCode::NotFound,

            ClientError::InvalidRequest(_) => ExitCode::ValidationError,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,

            ClientError::ApiError { status, .. } => Self::from_status(*status),
            ClientError::MaxRetriesExceeded { status, .. } => Self::from_status(*status),

            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }
        }
    }
}

impl From<&JobError> for ExitCode {
    fn from(err: &JobError) -> Self {
        match err {
            JobError::NotFound(_) => ExitCode::NotFound,
            JobError::InvalidXml(_) | JobError::InvalidName(_) => ExitCode::ValidationError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(job_err) = cause.downcast_ref::<JobError>() {
                return ExitCode::from(job_err);
            }
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
        }

        ExitCode::GeneralError
    }
}
