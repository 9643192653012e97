//! Command-line argument parsing

use clap::Parser;

pub const ENV_SOURCE: &str = "IMAGE_MIRROR_SOURCE";
pub const ENV_TARGET: &str = "IMAGE_MIRROR_TARGET";
pub const ENV_AUTH_FILE: &str = "IMAGE_MIRROR_AUTH_FILE";
pub const ENV_CREDENTIALS: &str = "IMAGE_MIRROR_CREDENTIALS";
pub const ENV_TIMEOUT: &str = "IMAGE_MIRROR_TIMEOUT";
pub const ENV_RETRY_MAX: &str = "IMAGE_MIRROR_RETRY_MAX";
pub const ENV_RETRY_DELAY: &str = "IMAGE_MIRROR_RETRY_DELAY";
pub const ENV_VERBOSE: &str = "IMAGE_MIRROR_VERBOSE";

const DEFAULT_RETRY_DELAY: u64 = 1;

#[derive(Parser, Debug, Clone)]
#[command(name = "image-mirror")]
#[command(about = "Resolve image references and registry credentials for copying an image between registries")]
#[command(version, author)]
pub struct Args {
    /// Source image
    #[arg(
        long = "source",
        short = 'i',
        help = "Source image path, including tag (if tag is omitted, 'latest' tag will be used)"
    )]
    pub source: Option<String>,

    /// Target image
    #[arg(
        long = "target",
        short = 'o',
        help = "Target image path, including tag (if tag is omitted, 'latest' tag will be used)"
    )]
    pub target: Option<String>,

    #[arg(
        long = "auth-file",
        short = 'f',
        help = "Auth file path passed through to the transport"
    )]
    pub auth_file: Option<String>,

    /// Registry credentials
    #[arg(
        long = "credentials",
        short = 'k',
        help = "Credentials in the form of 'domain.tld:username:password', separated by spaces"
    )]
    pub credentials: Option<String>,

    #[arg(
        long = "timeout",
        default_value = "0",
        help = "Maximum time in seconds for the operation, if 0 no timeout is set"
    )]
    pub timeout: u64,

    #[arg(
        long = "retry-max",
        default_value = "0",
        help = "In case of error, retry the operation this many times, if 0 no retry is set"
    )]
    pub retry_max: usize,

    #[arg(
        long = "retry-delay",
        default_value = "1",
        help = "When retrying, wait this many seconds between each attempt"
    )]
    pub retry_delay: u64,

    /// Output format for the resolved plan
    #[arg(
        long = "output",
        default_value = "text",
        help = "Output format: text, json"
    )]
    pub output: String,

    /// Verbose output
    #[arg(long = "verbose", short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    /// Quiet mode
    #[arg(long = "quiet", short = 'q', help = "Only print the resolved plan and errors")]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Fill unset options from the process environment
    pub fn from_env(self) -> Self {
        self.merge_env(|key| std::env::var(key).ok())
    }

    /// Fill unset options from `lookup`.
    ///
    /// Numeric options are only replaced while they still hold their defaults.
    pub fn merge_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.source.is_none() {
            self.source = lookup(ENV_SOURCE);
        }
        if self.target.is_none() {
            self.target = lookup(ENV_TARGET);
        }
        if self.auth_file.is_none() {
            self.auth_file = lookup(ENV_AUTH_FILE);
        }
        if self.credentials.is_none() {
            self.credentials = lookup(ENV_CREDENTIALS);
        }

        if self.timeout == 0 {
            if let Some(t) = lookup(ENV_TIMEOUT).and_then(|v| v.parse().ok()) {
                self.timeout = t;
            }
        }
        if self.retry_max == 0 {
            if let Some(r) = lookup(ENV_RETRY_MAX).and_then(|v| v.parse().ok()) {
                self.retry_max = r;
            }
        }
        if self.retry_delay == DEFAULT_RETRY_DELAY {
            if let Some(d) = lookup(ENV_RETRY_DELAY).and_then(|v| v.parse().ok()) {
                self.retry_delay = d;
            }
        }
        if let Some(v) = lookup(ENV_VERBOSE) {
            self.verbose = self.verbose || v.eq_ignore_ascii_case("true") || v == "1";
        }

        self
    }
}
