//! Static credentials for HTTP Basic authentication.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// A Jenkins user and its API token.
///
/// Jenkins accepts API tokens as the Basic auth password, which also exempts
/// the request from CSRF crumb checks.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    token: SecretString,
}

impl Credentials {
    pub fn new(username: String, token: SecretString) -> Self {
        Self { username, token }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Attach the Basic `Authorization` header to a request.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.basic_auth(&self.username, Some(self.token.expose_secret()))
    }
}
