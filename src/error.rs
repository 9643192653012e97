//! Error types for credential resolution and reference parsing

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Miss reported by a credential lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Nothing is configured for the registry host
    #[error("registry not found")]
    RegistryNotFound,
    /// The registry is configured but the requested user is not
    #[error("user not found")]
    UserNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A credential entry did not split into registry, username and password
    #[error("invalid credentials format: entry #{index} is not registry:username:password")]
    MalformedCredential { index: usize },

    #[error("invalid image reference {reference}: {reason}")]
    InvalidReference { reference: String, reason: String },

    #[error("{message}: {source}")]
    CredentialResolutionFailed {
        message: String,
        #[source]
        source: LookupError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RegistryError {
    pub fn invalid_reference(reference: impl Into<String>, reason: impl ToString) -> Self {
        RegistryError::InvalidReference {
            reference: reference.into(),
            reason: reason.to_string(),
        }
    }

    /// The store miss behind this error, if any.
    pub fn lookup_cause(&self) -> Option<LookupError> {
        match self {
            RegistryError::CredentialResolutionFailed { source, .. } => Some(*source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Serialization(err.to_string())
    }
}
