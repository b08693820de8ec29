//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod init;
pub mod link;
#[cfg(test)]
pub mod mock;
pub mod stat;
pub mod status;
pub mod user;

pub use args::{OutputFormat, PaginationArgs};
pub use context::CommandContext;

/// TinySRC CLI - shorten links and inspect their traffic
#[derive(Parser, Debug)]
#[command(name = "tinysrc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json) [default: config preference, then table]
    #[arg(long, global = true, env = "TINYSRC_FORMAT", hide_env = true)]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "TINYSRC_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// API key (overrides the config file)
    #[arg(
        long,
        global = true,
        env = "TINYSRC_API_KEY",
        hide_env_values = true
    )]
    pub api_key: Option<String>,

    /// API base URL, including the version path
    #[arg(long, global = true, env = "TINYSRC_API_HOST", hide = true)]
    pub api_host: Option<String>,

    /// Abort the request after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true, env = "TINYSRC_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize TinySRC configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Create and manage short links
    #[command(subcommand)]
    Link(LinkCommands),

    /// View click statistics
    #[command(subcommand)]
    Stat(StatCommands),

    /// Show account information
    #[command(subcommand)]
    User(UserCommands),
}

/// Short link subcommands
#[derive(Subcommand, Debug)]
pub enum LinkCommands {
    /// Shorten a URL
    #[command(after_help = "EXAMPLES:\n  \
            tinysrc link create https://example.com\n  \
            tinysrc link create https://example.com --password s3cret\n  \
            tinysrc link create https://example.com --expires \"2030-01-01 00:00:00\"")]
    Create {
        /// Destination URL
        url: String,

        /// Require visitors to enter this password
        #[arg(long)]
        password: Option<String>,

        /// Expiration time (YYYY-MM-DD HH:MM:SS)
        #[arg(long)]
        expires: Option<String>,

        /// Mark the link as requiring authentication (implied by --password)
        #[arg(long)]
        auth_required: bool,
    },

    /// List your links
    #[command(visible_alias = "ls")]
    List {
        /// Only links matching this search string
        #[arg(long, short = 'q')]
        query: Option<String>,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show a single link
    Get {
        /// Link hash
        hash: String,
    },

    /// Re-enable a disabled link
    Enable {
        /// Link hash
        hash: String,
    },

    /// Stop a link from redirecting
    Disable {
        /// Link hash
        hash: String,
    },
}

/// Statistics subcommands
#[derive(Subcommand, Debug)]
pub enum StatCommands {
    /// List clicks recorded for a link
    #[command(after_help = "EXAMPLES:\n  \
            tinysrc stat get abc123 --from 2024-01-01 --to 2024-01-31\n  \
            tinysrc stat get abc123 --from \"2024-01-01 08:00:00\" --to 2024-01-02 --format json")]
    Get {
        /// Link hash
        hash: String,

        /// Start of the range (YYYY-MM-DD or YYYY-MM-DD HH:MM:SS, UTC)
        #[arg(long)]
        from: String,

        /// End of the range (YYYY-MM-DD or YYYY-MM-DD HH:MM:SS, UTC)
        #[arg(long)]
        to: String,

        #[command(flatten)]
        pagination: PaginationArgs,
    },
}

/// Account subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Show the account that owns the API key
    Me,
}
