//! Centralized constants for the Jenkins inventory workspace.
//!
//! This module contains default values and environment variable names used
//! across crates to avoid duplication.

// =============================================================================
// Environment
// =============================================================================

/// Jenkins instance URL (e.g., https://jenkins.example.com).
pub const ENV_JENKINS_URL: &str = "JENKINS_URL";

/// Jenkins username the API token belongs to.
pub const ENV_JENKINS_USER: &str = "JENKINS_USER";

/// Jenkins API token.
pub const ENV_JENKINS_TOKEN: &str = "JENKINS_TOKEN";

/// Skip TLS certificate verification (true/false).
pub const ENV_JENKINS_SKIP_VERIFY: &str = "JENKINS_SKIP_VERIFY";

/// Optional per-request timeout in seconds.
pub const ENV_JENKINS_TIMEOUT: &str = "JENKINS_TIMEOUT";

/// Maximum retries for throttled or temporarily unavailable responses.
pub const ENV_JENKINS_MAX_RETRIES: &str = "JENKINS_MAX_RETRIES";

/// Set to `1` or `true` to skip `.env` loading (used by hermetic tests).
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

/// File loaded into the process environment at startup.
pub const DOTENV_FILE: &str = ".env";

/// File listing the variables that must be present once `.env` is loaded.
pub const DOTENV_EXAMPLE_FILE: &str = ".env.example";

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default maximum number of retries for failed requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for `JENKINS_MAX_RETRIES`.
pub const MAX_MAX_RETRIES: usize = 10;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;
