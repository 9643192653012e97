//! In-memory credential store keyed by registry host and username

use crate::auth::config::AuthConfig;
use crate::error::{LookupError, RegistryError, Result};
use std::collections::HashMap;

/// Source of registry credentials consulted by the binder
pub trait CredentialLookup {
    /// Find the credential for `username` on `registry`.
    ///
    /// An empty `username` asks for the registry's default user.
    fn lookup(&self, registry: &str, username: &str)
    -> std::result::Result<AuthConfig, LookupError>;
}

/// Users registered for one registry, remembering registration order
#[derive(Debug, Clone, Default)]
struct RegistryUsers {
    credentials: HashMap<String, AuthConfig>,
    order: Vec<String>,
}

impl RegistryUsers {
    fn insert(&mut self, username: &str, auth: AuthConfig) {
        if self.credentials.insert(username.to_string(), auth).is_none() {
            self.order.push(username.to_string());
        }
    }

    fn first(&self) -> Option<&AuthConfig> {
        self.order
            .first()
            .and_then(|username| self.credentials.get(username))
    }
}

/// Store for authentication credentials to docker registries.
///
/// Built once at startup and read-only afterwards, so a shared `&AuthStore`
/// can be queried from several threads without locking.
#[derive(Debug, Clone, Default)]
pub struct AuthStore {
    users: HashMap<String, RegistryUsers>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `registry:username:password` entries.
    ///
    /// Only the first two colons separate fields, so passwords may contain
    /// colons. A malformed entry rejects the whole list.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new();
        for (index, entry) in entries.into_iter().enumerate() {
            let mut parts = entry.as_ref().splitn(3, ':');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(registry), Some(username), Some(password)) => {
                    store.add(registry, username, password)
                }
                _ => return Err(RegistryError::MalformedCredential { index }),
            }
        }
        Ok(store)
    }

    /// Build a store from a whitespace-separated credential list.
    pub fn from_credential_list(raw: &str) -> Result<Self> {
        Self::from_entries(raw.split_whitespace())
    }

    /// Add a user:pass pair for a registry, replacing any previous one.
    pub fn add(&mut self, registry: &str, username: &str, password: &str) {
        self.users
            .entry(registry.to_string())
            .or_default()
            .insert(username, AuthConfig::new(username, password));
    }

    /// Credential for `username` on `registry`.
    ///
    /// An empty `username` returns the registry's default user, which is the
    /// first username registered for it. A named user never falls back to
    /// the default one.
    pub fn get(
        &self,
        registry: &str,
        username: &str,
    ) -> std::result::Result<&AuthConfig, LookupError> {
        let users = self
            .users
            .get(registry)
            .ok_or(LookupError::RegistryNotFound)?;

        let found = if username.is_empty() {
            users.first()
        } else {
            users.credentials.get(username)
        };
        found.ok_or(LookupError::UserNotFound)
    }

    /// Number of registries with at least one credential
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Registry hosts, sorted
    pub fn registries(&self) -> Vec<&str> {
        let mut hosts: Vec<&str> = self.users.keys().map(String::as_str).collect();
        hosts.sort_unstable();
        hosts
    }
}

impl CredentialLookup for AuthStore {
    fn lookup(
        &self,
        registry: &str,
        username: &str,
    ) -> std::result::Result<AuthConfig, LookupError> {
        self.get(registry, username).cloned()
    }
}

/// Parse a list of `registry:user:pass` entries into an [`AuthStore`].
pub fn parse_credentials<I, S>(credentials: I) -> Result<AuthStore>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    AuthStore::from_entries(credentials)
}
