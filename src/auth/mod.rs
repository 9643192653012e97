//! Registry authentication
//!
//! Credentials are loaded once into an [`AuthStore`], and the [`AuthBinder`] decides
//! which of them (if any) each transfer endpoint presents to its registry.

pub mod binder;
pub mod config;
pub mod context;
pub mod store;

pub use binder::{AuthBinder, add_auth_to_context};
pub use config::AuthConfig;
pub use context::SystemContext;
pub use store::{AuthStore, CredentialLookup, parse_credentials};
