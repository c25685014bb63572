//! Configuration types for the Jenkins connection.

use secrecy::SecretString;
use std::time::Duration;

/// Connection configuration for the Jenkins server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Jenkins server (e.g., https://jenkins.example.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    /// Maximum number of retries for throttled requests
    pub max_retries: usize,
}

/// Static credentials: a user name and its API token.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub token: SecretString,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config with the default connection settings.
    pub fn new(base_url: String, username: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
                timeout: None,
                max_retries: crate::constants::DEFAULT_MAX_RETRIES,
            },
            auth: AuthConfig { username, token },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_new_uses_defaults() {
        let config = Config::new(
            "https://jenkins.example.com".to_string(),
            "admin".to_string(),
            SecretString::new("token".to_string().into()),
        );

        assert_eq!(config.connection.base_url, "https://jenkins.example.com");
        assert!(!config.connection.skip_verify);
        assert!(config.connection.timeout.is_none());
        assert_eq!(config.connection.max_retries, 3);
        assert_eq!(config.auth.username, "admin");
        assert_eq!(config.auth.token.expose_secret(), "token");
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let config = Config::new(
            "https://jenkins.example.com".to_string(),
            "admin".to_string(),
            SecretString::new("super-secret-token".to_string().into()),
        );

        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret-token"));
    }
}
