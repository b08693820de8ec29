//! Pagination argument types for CLI commands

use clap::Args;

/// Shared paging arguments for list commands.
///
/// Flatten this into any command that pages through results:
/// ```ignore
/// List {
///     #[command(flatten)]
///     pagination: PaginationArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Results per page (defaults to the configured page size)
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,

    /// Page number (1-indexed)
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: u32,
}

impl PaginationArgs {
    /// Page size to request, falling back to `default_limit`.
    pub fn limit_or(&self, default_limit: u32) -> u32 {
        self.limit.unwrap_or(default_limit)
    }
}
