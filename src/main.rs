//! Trendscout - DexScreener Trending Token Scout
//!
//! Pulls one trending-pairs frame from the DexScreener feed, recovers
//! candidate token addresses, and enriches them through batched API lookups.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use trendscout::adapters::cli::{
    enrich_command, extract_command, resolve_config, scan_command, CliApp, Command,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (URL overrides go here, not in the TOML)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    let config = resolve_config(app.config.as_deref())?;
    init_logging(app.verbose, app.debug, &config.logging.level)?;

    match app.command {
        Command::Scan(cmd) => scan_command(&config, cmd).await,
        Command::Extract(cmd) => extract_command(&config, cmd).await,
        Command::Enrich(cmd) => enrich_command(&config, cmd).await,
    }
}

/// Initialize logging system
///
/// Flags take precedence over the configured level; RUST_LOG overrides both.
fn init_logging(verbose: bool, debug: bool, configured_level: &str) -> Result<()> {
    let fallback = if debug {
        "debug".to_string()
    } else if verbose {
        "info".to_string()
    } else {
        configured_level.to_string()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    fmt().with_env_filter(filter).with_target(false).init();

    Ok(())
}
