//! Init command implementation

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};

use tinysrc::config::Config;
use tinysrc::error::Result;
use tinysrc::{RequestContext, TinySrcClient, UserApi};

use crate::cli::args::GlobalOptions;

/// Run the init command
///
/// Prompts for an API key unless one was passed with `--api-key`, checks it
/// against the account endpoint, then writes it to the config file. Existing
/// preferences in the file are kept.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to TinySRC!".bold().green());
    println!("Let's set up your configuration.\n");

    let api_key = match opts.api_key_ref() {
        Some(key) => key.to_string(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your TinySRC API key")
            .interact()?,
    };

    println!("\n{}", "Verifying API key...".cyan());
    let context = match opts.timeout {
        Some(timeout) => RequestContext::background().with_timeout(timeout),
        None => RequestContext::background(),
    };
    let mut client = TinySrcClient::new(context, api_key.clone(), None)?;
    if let Some(host) = opts.api_host_ref() {
        client = client.with_base_url(host)?;
    }
    let user = client.get_current_user().await?;
    println!(
        "{} Authenticated as {} ({})",
        "✓".green(),
        user.username.bold(),
        user.email
    );

    let config = apply(Config::load_at(opts.config_ref()).unwrap_or_default(), api_key, opts);
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "tinysrc status".cyan());
    println!(
        "  {} - Shorten a URL",
        "tinysrc link create https://example.com".cyan()
    );

    Ok(())
}

/// Store the verified key, and the API host when one was given.
fn apply(mut config: Config, api_key: String, opts: &GlobalOptions) -> Config {
    config.api_key = Some(api_key);
    if let Some(host) = opts.api_host_ref() {
        config.api_host = Some(host.to_string());
    }
    config
}
