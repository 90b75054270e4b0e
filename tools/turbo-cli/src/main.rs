//! TurboShop CLI - browse the product catalog and fill a cart from the terminal.
//!
//! Commands:
//! - `turbo-shop list` - Print one page of the catalog
//! - `turbo-shop search` - Print every product matching a term
//! - `turbo-shop show` - Print a single product with its reviews
//! - `turbo-shop browse` - Interactive product list with a cart

mod commands;
mod config;
mod context;
mod logging;
mod output;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, ListArgs, SearchArgs, ShowArgs};

/// TurboShop - browse a product catalog and keep a cart
#[derive(Parser)]
#[command(name = "turbo-shop")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog base URL (overrides config and environment)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of the catalog
    List(ListArgs),

    /// Print every product matching a term
    Search(SearchArgs),

    /// Print a single product
    Show(ShowArgs),

    /// Browse the catalog interactively and fill a cart
    Browse(BrowseArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.base_url, output)?;
    logging::init(&ctx.config.logging, cli.verbose)?;

    tracing::debug!(base_url = %ctx.config.catalog.base_url, "catalog configured");

    // Execute command
    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
