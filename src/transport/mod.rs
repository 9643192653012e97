//! Seam to the image transport that performs the actual copy
//!
//! Everything here describes a copy; nothing here performs network I/O. A transport
//! receives a fully resolved [`CopyRequest`] and is responsible for retries,
//! timeouts and the transfer itself.

pub mod docker;
pub mod plan;

pub use docker::{DockerReference, ReferenceGrammarError};
pub use plan::{OutputFormat, PlanTransport};

use crate::auth::SystemContext;
use crate::error::Result;
use serde::{Serialize, Serializer};
use std::time::Duration;

/// Retry settings handed to the transport
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetryOptions {
    pub max_retry: usize,
    #[serde(rename = "delay_secs", serialize_with = "serialize_secs")]
    pub delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyOptions {
    pub preserve_digests: bool,
    #[serde(rename = "timeout_secs", serialize_with = "serialize_optional_secs")]
    pub timeout: Option<Duration>,
    pub retry: Option<RetryOptions>,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            preserve_digests: true,
            timeout: None,
            retry: None,
        }
    }
}

/// One side of a copy: where the image lives and how to authenticate there
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub reference: DockerReference,
    pub context: SystemContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyRequest {
    pub source: Endpoint,
    pub destination: Endpoint,
    pub options: CopyOptions,
}

/// Performs a resolved copy between two registries
pub trait ImageTransport {
    fn copy(&self, request: &CopyRequest) -> Result<()>;
}

fn serialize_secs<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_secs())
}

fn serialize_optional_secs<S: Serializer>(
    duration: &Option<Duration>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match duration {
        Some(duration) => serializer.serialize_some(&duration.as_secs()),
        None => serializer.serialize_none(),
    }
}
