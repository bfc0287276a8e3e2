//! Command-line argument definition.

use clap::Parser;

/// Meeplebox - A fast, friendly TUI for browsing a board-game collection
#[derive(Parser, Debug)]
#[command(name = "meeplebox")]
#[command(version)]
#[command(
    about = "A fast, friendly TUI for browsing a board-game collection",
    long_about = None
)]
pub struct Args {
    /// Override the catalog feed URL from settings
    #[arg(long)]
    pub feed_url: Option<String>,

    /// Override the featured game id from settings
    #[arg(long)]
    pub featured_id: Option<i64>,

    /// Skip the network fetch and start with an empty catalog
    #[arg(long)]
    pub offline: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
