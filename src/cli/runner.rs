//! Runner that resolves both endpoints and hands them to a transport

use crate::auth::{AuthBinder, AuthStore, SystemContext};
use crate::cli::args::Args;
use crate::cli::config::MirrorConfig;
use crate::error::Result;
use crate::logging::Logger;
use crate::reference::{ParsedLocator, ReferenceParser};
use crate::transport::{CopyRequest, Endpoint, ImageTransport, PlanTransport};

pub struct Runner {
    config: MirrorConfig,
    logger: Logger,
}

impl Runner {
    pub fn new(args: Args) -> Result<Self> {
        let config = MirrorConfig::from_args(&args)?;
        let logger = if config.quiet {
            Logger::new_quiet()
        } else {
            Logger::new(config.verbose)
        };
        Ok(Self { config, logger })
    }

    pub fn with_config(config: MirrorConfig, logger: Logger) -> Self {
        Self { config, logger }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Resolve references and credentials and report the plan
    pub fn run(&self) -> Result<()> {
        self.logger.section("Image Mirror");
        let request = self.resolve()?;
        PlanTransport::new(&self.logger, self.config.output).copy(&request)?;
        self.logger.success(&format!(
            "Resolved in {}",
            self.logger.format_duration(self.logger.elapsed())
        ));
        Ok(())
    }

    /// Build the credential store, parse both locators and bind their credentials.
    pub fn resolve(&self) -> Result<CopyRequest> {
        self.logger.subsection("Loading credentials");
        let store = AuthStore::from_entries(&self.config.credentials)?;
        self.logger.info(&format!(
            "Loaded {} credential entries for {} registries",
            self.config.credentials.len(),
            store.len()
        ));
        for registry in store.registries() {
            self.logger.detail(&format!("Credentials configured for {}", registry));
        }

        self.logger.subsection("Resolving images");
        let parser = ReferenceParser::new();
        let source = self.parse_locator(&parser, "source", &self.config.source)?;
        let destination = self.parse_locator(&parser, "target", &self.config.target)?;

        self.logger.subsection("Binding credentials");
        let binder = AuthBinder::new(&store, &self.logger);
        // pulls may be anonymous, pushes must authenticate
        let source = self.bind_endpoint(&binder, "source", source, false)?;
        let destination = self.bind_endpoint(&binder, "target", destination, true)?;

        Ok(CopyRequest {
            source,
            destination,
            options: self.config.copy_options(),
        })
    }

    fn parse_locator(
        &self,
        parser: &ReferenceParser,
        label: &str,
        locator: &str,
    ) -> Result<ParsedLocator> {
        let parsed = parser.parse(locator).inspect_err(|e| {
            self.logger
                .error(&format!("could not parse {} image url: {}", label, e))
        })?;
        self.logger.step(&format!(
            "{} image: {}",
            label,
            parsed.reference.transport_string()
        ));
        Ok(parsed)
    }

    fn bind_endpoint(
        &self,
        binder: &AuthBinder<'_, AuthStore>,
        label: &str,
        parsed: ParsedLocator,
        must_auth: bool,
    ) -> Result<Endpoint> {
        let mut context = SystemContext::new().with_auth_file(self.config.auth_file.clone());
        binder
            .bind(&mut context, &parsed.url, must_auth)
            .inspect_err(|e| {
                self.logger
                    .error(&format!("could not set auth info for {}: {}", label, e))
            })?;

        let auth = context
            .credentials()
            .map(|auth| auth.redacted())
            .unwrap_or_else(|| "anonymous".to_string());
        self.logger.info(&format!("{} registry {} as {}", label, parsed.host(), auth));

        Ok(Endpoint {
            reference: parsed.reference,
            context,
        })
    }
}
