//! CLI command implementations.

pub mod browse;
pub mod list;
pub mod search;
pub mod show;

use clap::Args;
use turbo_commerce::ProductId;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Page to show (1-indexed).
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search term.
    pub term: String,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: ProductId,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Initial search term.
    #[arg(short, long)]
    pub search: Option<String>,
}
