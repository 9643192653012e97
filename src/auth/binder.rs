//! Attach registry credentials to a transfer endpoint

use crate::auth::config::AuthConfig;
use crate::auth::context::SystemContext;
use crate::auth::store::CredentialLookup;
use crate::error::{RegistryError, Result};
use crate::logging::Logger;
use crate::reference::{embedded_userinfo, registry_host};
use url::Url;

/// Resolves which credential an endpoint presents, either from the locator
/// itself or from the credential store.
pub struct AuthBinder<'a, S: CredentialLookup + ?Sized> {
    store: &'a S,
    logger: &'a Logger,
}

impl<'a, S: CredentialLookup + ?Sized> AuthBinder<'a, S> {
    pub fn new(store: &'a S, logger: &'a Logger) -> Self {
        Self { store, logger }
    }

    /// Populate `context` with the credential for the registry in `info`.
    ///
    /// A user and password embedded in the URL are used as-is. A user alone
    /// must resolve through the store, whatever `must_auth` says. Without an
    /// embedded user the registry's default user is used when one is stored;
    /// otherwise the context stays anonymous unless `must_auth` is set.
    pub fn bind(&self, context: &mut SystemContext, info: &Url, must_auth: bool) -> Result<()> {
        let host = registry_host(info);

        if let Some((username, password)) = embedded_userinfo(info)? {
            let auth = match password {
                Some(password) => {
                    self.logger.detail(&format!(
                        "Using credentials embedded in the locator for {}",
                        host
                    ));
                    AuthConfig::new(username, password)
                }
                None => {
                    let auth = self.store.lookup(&host, &username).map_err(|source| {
                        RegistryError::CredentialResolutionFailed {
                            message: format!(
                                "could not get password for user {} ({})",
                                username, host
                            ),
                            source,
                        }
                    })?;
                    self.logger.detail(&format!(
                        "Resolved password for user {} on {} from credential store",
                        username, host
                    ));
                    auth
                }
            };
            context.docker_auth_config = Some(auth);
            return Ok(());
        }

        match self.store.lookup(&host, "") {
            Ok(auth) => {
                self.logger.detail(&format!(
                    "Using default user {} for {}",
                    auth.redacted(),
                    host
                ));
                context.docker_auth_config = Some(auth);
                Ok(())
            }
            Err(source) if !must_auth => {
                self.logger.detail(&format!(
                    "No credentials for {} ({}), continuing anonymously",
                    host, source
                ));
                Ok(())
            }
            Err(source) => Err(RegistryError::CredentialResolutionFailed {
                message: format!("could not get default user for registry {}", host),
                source,
            }),
        }
    }
}

/// Add the auth credentials to the context either from the URL or from the store.
pub fn add_auth_to_context<S: CredentialLookup + ?Sized>(
    context: &mut SystemContext,
    store: &S,
    info: &Url,
    must_auth: bool,
) -> Result<()> {
    let logger = Logger::new_quiet();
    AuthBinder::new(store, &logger).bind(context, info, must_auth)
}
