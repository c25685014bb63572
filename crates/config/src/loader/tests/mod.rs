//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` and `temp_env` to prevent environment variable pollution.
//! - Temporary directories are cleaned up automatically via `tempfile`.


/// Every variable the loader reads, unset. Pass to `temp_env::with_vars` and
/// append overrides so each test starts from a clean environment.
pub fn cleared_jenkins_env() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("JENKINS_URL", None),
        ("JENKINS_USER", None),
        ("JENKINS_TOKEN", None),
        ("JENKINS_SKIP_VERIFY", None),
        ("JENKINS_TIMEOUT", None),
        ("JENKINS_MAX_RETRIES", None),
        ("DOTENV_DISABLED", None),
    ]
}
