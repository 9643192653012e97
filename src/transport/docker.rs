//! Docker registry references
//!
//! Names are split and validated by [`oci_client::Reference`]. This wrapper
//! adds the `//` transport form and defaults the tag to `latest` when
//! neither a tag nor a digest is given.

use oci_client::Reference;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Transport name, also used as the URL scheme of locators
pub const TRANSPORT_NAME: &str = "docker";

const DEFAULT_TAG: &str = "latest";

type GrammarError = oci_client::ParseError;

#[derive(Debug, Error)]
pub enum ReferenceGrammarError {
    #[error("reference must start with \"//\"")]
    MissingSlashes,
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

/// Normalized reference to a repository on a registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DockerReference {
    registry: String,
    repository: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    digest: Option<String>,
}

impl DockerReference {
    /// Parse a reference in transport form, `//domain/path[:tag]`.
    pub fn parse_transport(reference: &str) -> Result<Self, ReferenceGrammarError> {
        let name = reference
            .strip_prefix("//")
            .ok_or(ReferenceGrammarError::MissingSlashes)?;
        Self::parse(name)
    }

    /// Parse a normalized or short name such as `nginx` or `quay.io/org/app:v1`.
    pub fn parse(name: &str) -> Result<Self, ReferenceGrammarError> {
        let reference: Reference = name.parse()?;
        Ok(Self::from(&reference))
    }

    pub fn registry(&self) -> &str {
        &self.registry
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    /// `registry/repository` without tag or digest
    pub fn name(&self) -> String {
        format!("{}/{}", self.registry, self.repository)
    }

    /// Reference as the transport spells it, `//registry/repository:tag`
    pub fn string_within_transport(&self) -> String {
        format!("//{}", self)
    }

    /// Fully qualified form including the transport prefix
    pub fn transport_string(&self) -> String {
        format!("{}:{}", TRANSPORT_NAME, self.string_within_transport())
    }
}

impl From<&Reference> for DockerReference {
    fn from(reference: &Reference) -> Self {
        let digest = reference.digest().map(str::to_string);
        let tag = match (reference.tag(), &digest) {
            (None, None) => Some(DEFAULT_TAG.to_string()),
            (tag, _) => tag.map(str::to_string),
        };
        Self {
            registry: reference.registry().to_string(),
            repository: reference.repository().to_string(),
            tag,
            digest,
        }
    }
}

impl fmt::Display for DockerReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.registry, self.repository)?;
        if let Some(tag) = &self.tag {
            write!(f, ":{}", tag)?;
        }
        if let Some(digest) = &self.digest {
            write!(f, "@{}", digest)?;
        }
        Ok(())
    }
}

impl FromStr for DockerReference {
    type Err = ReferenceGrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: &str = "sha256:abcdef1234567890abcdef1234567890abcdef1234567890abcdef1234567890";

    #[test]
    fn test_parse_transport_form() {
        let r = DockerReference::parse_transport("//myregistry.io/app:v1").unwrap();
        assert_eq!(r.registry(), "myregistry.io");
        assert_eq!(r.repository(), "app");
        assert_eq!(r.tag(), Some("v1"));
        assert_eq!(r.digest(), None);
    }

    #[test]
    fn test_transport_form_requires_slashes() {
        assert!(matches!(
            DockerReference::parse_transport("myregistry.io/app"),
            Err(ReferenceGrammarError::MissingSlashes)
        ));
    }

    #[test]
    fn test_default_tag() {
        let r = DockerReference::parse("registry.hub.docker.com/library/nginx").unwrap();
        assert_eq!(r.tag(), Some("latest"));
        assert_eq!(r.to_string(), "registry.hub.docker.com/library/nginx:latest");
    }

    #[test]
    fn test_docker_hub_normalization() {
        let r = DockerReference::parse("nginx").unwrap();
        assert_eq!(r.name(), "docker.io/library/nginx");

        let r = DockerReference::parse("localhost/app:dev").unwrap();
        assert_eq!(r.registry(), "localhost");
        assert_eq!(r.repository(), "app");
    }

    #[test]
    fn test_registry_with_port() {
        let r = DockerReference::parse("localhost:5000/team/app:1.2.3").unwrap();
        assert_eq!(r.registry(), "localhost:5000");
        assert_eq!(r.repository(), "team/app");
        assert_eq!(r.tag(), Some("1.2.3"));
    }

    #[test]
    fn test_numeric_tag_is_kept_verbatim() {
        let r = DockerReference::parse("registry.hub.docker.com/nginx:007").unwrap();
        assert_eq!(r.tag(), Some("007"));
    }

    #[test]
    fn test_digest_reference() {
        let r = DockerReference::parse(&format!("quay.io/org/app@{}", DIGEST)).unwrap();
        assert_eq!(r.tag(), None);
        assert_eq!(r.digest(), Some(DIGEST));
        assert_eq!(r.transport_string(), format!("docker://quay.io/org/app@{}", DIGEST));
    }

    #[test]
    fn test_invalid_names() {
        for name in [
            "",
            "quay.io/Org/app",
            "quay.io/org//app",
            "quay.io/-app",
            "quay.io/",
            "quay.io/app:-bad",
            "quay.io/app:",
            "quay.io/app@sha256:abc",
        ] {
            assert!(
                matches!(
                    DockerReference::parse(name),
                    Err(ReferenceGrammarError::Grammar(_))
                ),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_port_in_path_is_rejected() {
        assert!(DockerReference::parse("registry.hub.docker.com/localhost:5000/x").is_err());
    }

    #[test]
    fn test_long_tag_rejected() {
        let long = format!("quay.io/app:{}", "a".repeat(129));
        assert!(DockerReference::parse(&long).is_err());
    }
}
