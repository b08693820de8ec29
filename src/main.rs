//! TinySRC CLI - shorten links and inspect their traffic

use clap::Parser;
use colored::Colorize;

mod cli;
mod models;
mod output;

use cli::args::GlobalOptions;
use cli::{Cli, CommandContext, Commands, LinkCommands, StatCommands, UserCommands};
use tinysrc::error::{Error, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        report_error(&err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `--debug`.
fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn report_error(err: &Error) {
    match err {
        Error::Api(response) => {
            match response.status {
                Some(status) => eprintln!("{} API request failed ({})", "Error:".red().bold(), status),
                None => eprintln!("{} API request failed", "Error:".red().bold()),
            }
            for message in response.messages() {
                eprintln!("  {}", message);
            }
        }
        other => eprintln!("{} {}", "Error:".red().bold(), other),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("tinysrc version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Link(command) => {
            let ctx = CommandContext::new(&opts)?;
            let out = match command {
                LinkCommands::Create {
                    url,
                    password,
                    expires,
                    auth_required,
                } => {
                    cli::link::create(
                        &ctx.client,
                        &url,
                        password.as_deref(),
                        expires.as_deref(),
                        auth_required,
                        ctx.format,
                    )
                    .await?
                }
                LinkCommands::List { query, pagination } => {
                    cli::link::list(
                        &ctx.client,
                        query.as_deref(),
                        &pagination,
                        ctx.page_size(),
                        ctx.format,
                    )
                    .await?
                }
                LinkCommands::Get { hash } => cli::link::get(&ctx.client, &hash, ctx.format).await?,
                LinkCommands::Enable { hash } => cli::link::set_active(&ctx.client, &hash, true).await?,
                LinkCommands::Disable { hash } => {
                    cli::link::set_active(&ctx.client, &hash, false).await?
                }
            };
            println!("{}", out);
            Ok(())
        }
        Commands::Stat(StatCommands::Get {
            hash,
            from,
            to,
            pagination,
        }) => {
            let ctx = CommandContext::new(&opts)?;
            let out = cli::stat::get(
                &ctx.client,
                &hash,
                &from,
                &to,
                &pagination,
                ctx.page_size(),
                ctx.format,
            )
            .await?;
            println!("{}", out);
            Ok(())
        }
        Commands::User(UserCommands::Me) => {
            let ctx = CommandContext::new(&opts)?;
            println!("{}", cli::user::me(&ctx.client, ctx.format).await?);
            Ok(())
        }
    }
}
