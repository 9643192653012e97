//! Image Mirror Library
//!
//! Resolves image locators into registry transport references and attaches the
//! registry credentials each side of a copy should present.
//!
//! ```
//! use image_mirror::auth::{AuthStore, SystemContext, add_auth_to_context};
//! use image_mirror::reference::parse_docker_url;
//!
//! let store = AuthStore::from_credential_list("mirror.example.com:ci:secret").unwrap();
//! let (reference, url) = parse_docker_url("mirror.example.com/team/app:v1").unwrap();
//!
//! let mut context = SystemContext::new();
//! add_auth_to_context(&mut context, &store, &url, true).unwrap();
//!
//! assert_eq!(reference.to_string(), "mirror.example.com/team/app:v1");
//! assert_eq!(context.credentials().map(|a| a.username()), Some("ci"));
//! ```

pub mod auth;
pub mod cli;
pub mod error;
pub mod logging;
pub mod reference;
pub mod transport;

pub use auth::{AuthConfig, AuthStore, SystemContext};
pub use error::{LookupError, RegistryError, Result};
pub use logging::Logger;
pub use reference::{ParsedLocator, ReferenceParser};
pub use transport::DockerReference;
