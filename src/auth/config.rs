//! Registry credential

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;

/// Username and password presented to a registry
#[derive(Clone, PartialEq, Eq)]
pub struct AuthConfig {
    username: String,
    password: String,
}

impl AuthConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// `Authorization` header value for HTTP basic authentication
    pub fn basic_auth(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }

    /// Printable form with the password masked
    pub fn redacted(&self) -> String {
        let user = if self.username.is_empty() {
            "<anonymous>"
        } else {
            &self.username
        };
        if self.password.is_empty() {
            user.to_string()
        } else {
            format!("{}:********", user)
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}
