//! Error types for the Jenkins client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Jenkins client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed (HTTP 401).
    #[error("Authentication failed at {0}: check JENKINS_USER and JENKINS_TOKEN")]
    AuthFailed(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Jenkins.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid response format from Jenkins.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Connection refused or host unreachable.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// Maximum retries exceeded; carries the last retryable status.
    #[error("Maximum retries exceeded ({attempts} attempts, last status {status})")]
    MaxRetriesExceeded { attempts: usize, status: u16 },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid request parameters (e.g. an empty job name).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Not found.
    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl ClientError {
    /// Check if an HTTP status code is retryable.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests (rate limiting)
    /// - 502: Bad Gateway (transient server error)
    /// - 503: Service Unavailable (Jenkins restarting or quieting down)
    /// - 504: Gateway Timeout (transient server error)
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::AuthFailed(_) => Some(401),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            Self::MaxRetriesExceeded { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error means the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_)) || self.status() == Some(404)
    }

    /// Classify a transport failure from reqwest.
    pub fn from_send_error(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_default();
        if err.is_timeout() {
            Self::Timeout(url)
        } else if err.is_connect() {
            Self::ConnectionRefused(url)
        } else {
            Self::HttpError(err)
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_))
    }
}
