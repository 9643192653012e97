//! Configuration management module

use crate::cli::args::Args;
use crate::error::{RegistryError, Result};
use crate::transport::{CopyOptions, OutputFormat, RetryOptions};
use std::path::PathBuf;
use std::time::Duration;

/// Validated settings for one mirror run
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    pub source: String,
    pub target: String,
    pub auth_file: Option<PathBuf>,
    /// Raw `registry:username:password` entries
    pub credentials: Vec<String>,
    pub timeout: u64,
    pub retry_max: usize,
    pub retry_delay: u64,
    pub output: OutputFormat,
    pub verbose: bool,
    pub quiet: bool,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            source: String::new(),
            target: String::new(),
            auth_file: None,
            credentials: Vec::new(),
            timeout: 0,
            retry_max: 0,
            retry_delay: 1,
            output: OutputFormat::Text,
            verbose: false,
            quiet: false,
        }
    }
}

impl MirrorConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let source = args
            .source
            .clone()
            .ok_or_else(|| RegistryError::Config("Source image is required".to_string()))?;
        let target = args
            .target
            .clone()
            .ok_or_else(|| RegistryError::Config("Target image is required".to_string()))?;

        let config = Self {
            source,
            target,
            auth_file: args
                .auth_file
                .as_deref()
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            credentials: args
                .credentials
                .as_deref()
                .map(|raw| raw.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
            timeout: args.timeout,
            retry_max: args.retry_max,
            retry_delay: args.retry_delay,
            output: args.output.parse()?,
            verbose: args.verbose,
            quiet: args.quiet,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            return Err(RegistryError::Config(
                "Source image cannot be empty".to_string(),
            ));
        }
        if self.target.trim().is_empty() {
            return Err(RegistryError::Config(
                "Target image cannot be empty".to_string(),
            ));
        }
        if self.verbose && self.quiet {
            return Err(RegistryError::Config(
                "verbose and quiet cannot be combined".to_string(),
            ));
        }
        Ok(())
    }

    /// Transfer options for the transport; zero values mean "not set"
    pub fn copy_options(&self) -> CopyOptions {
        CopyOptions {
            preserve_digests: true,
            timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
            retry: (self.retry_max > 0).then(|| RetryOptions {
                max_retry: self.retry_max,
                delay: Duration::from_secs(self.retry_delay),
            }),
        }
    }
}
