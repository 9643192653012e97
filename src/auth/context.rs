//! Per-endpoint authentication context handed to the transport

use crate::auth::config::AuthConfig;
use serde::{Serialize, Serializer};
use std::path::PathBuf;

/// Authentication state for one side of a copy.
///
/// The binder writes at most one credential into `docker_auth_config`. The
/// auth file path is passed through untouched for the transport to read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SystemContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_file_path: Option<PathBuf>,
    #[serde(rename = "credentials", serialize_with = "serialize_redacted")]
    pub docker_auth_config: Option<AuthConfig>,
}

#[derive(Serialize)]
struct RedactedAuth<'a> {
    username: &'a str,
    has_password: bool,
}

fn serialize_redacted<S>(auth: &Option<AuthConfig>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match auth {
        Some(auth) => RedactedAuth {
            username: auth.username(),
            has_password: !auth.password().is_empty(),
        }
        .serialize(serializer),
        None => serializer.serialize_none(),
    }
}

impl SystemContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auth_file(mut self, path: Option<PathBuf>) -> Self {
        self.auth_file_path = path;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.docker_auth_config.is_some()
    }

    pub fn credentials(&self) -> Option<&AuthConfig> {
        self.docker_auth_config.as_ref()
    }
}
