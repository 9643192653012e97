//! Transport that reports the resolved copy instead of performing it

use crate::auth::SystemContext;
use crate::error::{RegistryError, Result};
use crate::logging::Logger;
use crate::transport::{CopyRequest, Endpoint, ImageTransport};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(RegistryError::Config(format!(
                "Output format must be one of: text, json (got {})",
                other
            ))),
        }
    }
}

/// Prints the copy plan on stdout. Credentials are shown redacted.
pub struct PlanTransport<'a> {
    logger: &'a Logger,
    format: OutputFormat,
}

impl<'a> PlanTransport<'a> {
    pub fn new(logger: &'a Logger, format: OutputFormat) -> Self {
        Self { logger, format }
    }

    pub fn render(&self, request: &CopyRequest) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(render_text(request)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(request)?),
        }
    }
}

impl ImageTransport for PlanTransport<'_> {
    fn copy(&self, request: &CopyRequest) -> Result<()> {
        self.logger.step(&format!(
            "Planned copy {} -> {}",
            request.source.reference, request.destination.reference
        ));
        println!("{}", self.render(request)?);
        Ok(())
    }
}

fn render_text(request: &CopyRequest) -> String {
    let options = &request.options;
    let timeout = options
        .timeout
        .map(|t| format!("{}s", t.as_secs()))
        .unwrap_or_else(|| "none".to_string());
    let retry = options
        .retry
        .as_ref()
        .map(|r| format!("{} attempts, {}s delay", r.max_retry, r.delay.as_secs()))
        .unwrap_or_else(|| "none".to_string());

    let mut lines = Vec::new();
    push_endpoint(&mut lines, "source", &request.source);
    push_endpoint(&mut lines, "destination", &request.destination);
    lines.push(format!("preserve digests: {}", options.preserve_digests));
    lines.push(format!("timeout: {}", timeout));
    lines.push(format!("retry: {}", retry));
    lines.join("\n")
}

fn push_endpoint(lines: &mut Vec<String>, label: &str, endpoint: &Endpoint) {
    lines.push(format!("{}: {}", label, endpoint.reference.transport_string()));
    lines.push(format!("{} auth: {}", label, describe_auth(&endpoint.context)));
    if let Some(path) = &endpoint.context.auth_file_path {
        lines.push(format!("{} auth file: {}", label, path.display()));
    }
}

fn describe_auth(context: &SystemContext) -> String {
    context
        .credentials()
        .map(|auth| auth.redacted())
        .unwrap_or_else(|| "anonymous".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthConfig;
    use crate::transport::{CopyOptions, DockerReference, RetryOptions};
    use std::time::Duration;

    fn request() -> CopyRequest {
        CopyRequest {
            source: Endpoint {
                reference: DockerReference::parse("registry.hub.docker.com/library/nginx").unwrap(),
                context: SystemContext::new(),
            },
            destination: Endpoint {
                reference: DockerReference::parse("mirror.example.com/library/nginx:1.25").unwrap(),
                context: SystemContext {
                    auth_file_path: None,
                    docker_auth_config: Some(AuthConfig::new("deploy", "s3cret")),
                },
            },
            options: CopyOptions {
                timeout: Some(Duration::from_secs(30)),
                retry: Some(RetryOptions {
                    max_retry: 3,
                    delay: Duration::from_secs(2),
                }),
                ..CopyOptions::default()
            },
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(RegistryError::Config(_))
        ));
    }

    #[test]
    fn test_render_text() {
        let logger = Logger::new_quiet();
        let text = PlanTransport::new(&logger, OutputFormat::Text)
            .render(&request())
            .unwrap();

        assert!(text.contains("source: docker://registry.hub.docker.com/library/nginx:latest"));
        assert!(text.contains("source auth: anonymous"));
        assert!(text.contains("destination auth: deploy:********"));
        assert!(text.contains("timeout: 30s"));
        assert!(text.contains("retry: 3 attempts, 2s delay"));
        assert!(!text.contains("s3cret"));
    }

    #[test]
    fn test_render_json() {
        let logger = Logger::new_quiet();
        let json = PlanTransport::new(&logger, OutputFormat::Json)
            .render(&request())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["source"]["reference"]["registry"], "registry.hub.docker.com");
        assert_eq!(value["source"]["reference"]["tag"], "latest");
        assert!(value["source"]["context"]["credentials"].is_null());
        assert_eq!(value["destination"]["context"]["credentials"]["username"], "deploy");
        assert_eq!(value["options"]["preserve_digests"], true);
        assert_eq!(value["options"]["timeout_secs"], 30);
        assert_eq!(value["options"]["retry"]["delay_secs"], 2);
        assert!(!json.contains("s3cret"));
    }
}
