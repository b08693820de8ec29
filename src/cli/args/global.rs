//! Global CLI options shared across all commands
//!
//! Consolidates the global flags into a single struct so handlers take one
//! parameter instead of six.

use std::time::Duration;

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format override (table, json)
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.tinysrc/config.yaml)
    pub config: Option<String>,

    /// API key override (bypasses config file)
    pub api_key: Option<String>,

    /// API base URL override for development/testing
    pub api_host: Option<String>,

    /// Per-command deadline
    pub timeout: Option<Duration>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_key: cli.api_key.clone(),
            api_host: cli.api_host.clone(),
            timeout: cli.timeout.map(Duration::from_secs),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API key override as `Option<&str>`.
    pub fn api_key_ref(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Get API host override as `Option<&str>`.
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}
