//! Command line interface module
//!
//! Argument parsing, environment overrides and the runner that wires the credential
//! store, reference parser and auth binder together.

pub mod args;
pub mod config;
pub mod runner;

pub use args::Args;
pub use config::MirrorConfig;
pub use runner::Runner;
