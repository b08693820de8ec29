//! Status command implementation

use colored::Colorize;

use tinysrc::client::{API_URL, VERSION};
use tinysrc::config::Config;
use tinysrc::error::{ConfigError, Error, Result};

use crate::cli::args::GlobalOptions;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", report(opts)?);
    Ok(())
}

/// Build the status report without printing it.
pub fn report(opts: &GlobalOptions) -> Result<String> {
    let mut lines = vec![format!("{}\n", "TinySRC Configuration Status".bold())];

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            lines.push(format!(
                "Config file: {}",
                config_path.display().to_string().cyan()
            ));
            config
        }
        Err(Error::Config(ConfigError::NotFound)) => {
            lines.push(format!(
                "{} No config file at {}",
                "✗".red(),
                config_path.display()
            ));
            lines.push("  → Run 'tinysrc init' to create one".to_string());
            Config::default()
        }
        Err(e) => return Err(e),
    };
    lines.push(String::new());

    match (opts.api_key_ref(), config.api_key.as_deref()) {
        (Some(key), _) => lines.push(format!(
            "{} API key {} (from --api-key)",
            "✓".green(),
            mask(key)
        )),
        (None, Some(key)) if !key.trim().is_empty() => {
            lines.push(format!("{} API key {}", "✓".green(), mask(key)))
        }
        _ => {
            lines.push(format!("{} API key not configured", "✗".red()));
            lines.push("  → Run 'tinysrc init' to configure".to_string());
        }
    }

    let default_host = format!("{}/{}", API_URL, VERSION);
    match opts.api_host_ref().or(config.api_host.as_deref()) {
        Some(host) => lines.push(format!("{} API host: {} (custom)", "⚠".yellow(), host)),
        None => lines.push(format!("{} API host: {}", "○".dimmed(), default_host)),
    }

    lines.push(format!(
        "{} Page size: {}",
        "○".dimmed(),
        config.preferences.page_size
    ));

    Ok(lines.join("\n"))
}

/// Show only the last four characters of a key.
fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}
