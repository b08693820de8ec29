//! Command execution context
//!
//! Loads config, resolves the API key, and builds a client bound to a
//! cancellation context that Ctrl-C and `--timeout` can terminate.

use clap::ValueEnum;

use tinysrc::config::Config;
use tinysrc::error::{ConfigError, Error, Result};
use tinysrc::{RequestContext, TinySrcClient};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration (default when no file exists and a key was given)
    pub config: Config,
    /// API client bound to a context that Ctrl-C and `--timeout` cancel
    pub client: TinySrcClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// The API key comes from `--api-key`/`TINYSRC_API_KEY` if set, otherwise
    /// from the config file. A missing config file is only an error when no
    /// key was passed on the command line.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = match Config::load_at(opts.config_ref()) {
            Ok(config) => config,
            Err(Error::Config(ConfigError::NotFound)) if opts.api_key.is_some() => {
                Config::default()
            }
            Err(e) => return Err(e),
        };

        let api_key = match opts.api_key_ref() {
            Some(key) => key.to_string(),
            None => config.validate_auth()?.to_string(),
        };

        let request_context = match opts.timeout {
            Some(timeout) => RequestContext::background().with_timeout(timeout),
            None => RequestContext::background(),
        };

        let mut client = TinySrcClient::new(request_context.clone(), api_key, None)?;
        if let Some(host) = opts.api_host_ref().or(config.api_host.as_deref()) {
            log::debug!("Using custom API host {}", host);
            client = client.with_base_url(host)?;
        }

        spawn_interrupt_handler(&request_context);

        let format = opts.format.unwrap_or_else(|| preferred_format(&config));

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Page size for list commands when `--limit` is not given.
    pub fn page_size(&self) -> u32 {
        self.config.preferences.page_size
    }
}

/// Output format from the config file, falling back to table.
fn preferred_format(config: &Config) -> OutputFormat {
    config
        .preferences
        .format
        .as_deref()
        .and_then(|name| match OutputFormat::from_str(name, true) {
            Ok(format) => Some(format),
            Err(_) => {
                log::warn!("Ignoring unknown format preference '{}'", name);
                None
            }
        })
        .unwrap_or_default()
}

/// Cancel `context` on Ctrl-C so the in-flight request stops.
fn spawn_interrupt_handler(context: &RequestContext) {
    let context = context.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::debug!("Interrupt received, cancelling request");
            context.cancel();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn opts(config: Option<String>, api_key: Option<&str>) -> GlobalOptions {
        GlobalOptions {
            format: Some(OutputFormat::Json),
            config,
            api_key: api_key.map(str::to_string),
            api_host: None,
            timeout: None,
        }
    }

    #[tokio::test]
    async fn test_flag_key_without_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.yaml").to_string_lossy().to_string();

        let ctx = CommandContext::new(&opts(Some(path), Some("key-123"))).unwrap();

        assert_eq!(ctx.config, Config::default());
        assert_eq!(ctx.format, OutputFormat::Json);
    }

    #[tokio::test]
    async fn test_missing_config_and_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.yaml").to_string_lossy().to_string();

        let result = CommandContext::new(&opts(Some(path), None));
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::NotFound))
        ));
    }

    #[tokio::test]
    async fn test_config_api_host_applies() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        Config {
            api_key: Some("key-123".to_string()),
            api_host: Some("http://127.0.0.1:9999/api/v1".to_string()),
            ..Default::default()
        }
        .save_to(&path)
        .unwrap();

        let ctx = CommandContext::new(&opts(Some(path.to_string_lossy().to_string()), None))
            .unwrap();

        assert_eq!(
            ctx.client.base_url().as_str(),
            "http://127.0.0.1:9999/api/v1"
        );
    }

    #[tokio::test]
    async fn test_timeout_sets_deadline() {
        let mut options = opts(None, Some("key-123"));
        options.config = Some(
            tempdir()
                .unwrap()
                .path()
                .join("none.yaml")
                .to_string_lossy()
                .to_string(),
        );
        options.timeout = Some(std::time::Duration::from_secs(5));

        let ctx = CommandContext::new(&options).unwrap();
        assert!(ctx.client.context().deadline().is_some());
    }

    #[test]
    fn test_preferred_format() {
        let mut config = Config::default();
        assert_eq!(preferred_format(&config), OutputFormat::Table);

        config.preferences.format = Some("JSON".to_string());
        assert_eq!(preferred_format(&config), OutputFormat::Json);

        config.preferences.format = Some("xml".to_string());
        assert_eq!(preferred_format(&config), OutputFormat::Table);
    }
}
