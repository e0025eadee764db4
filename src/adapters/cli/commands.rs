//! CLI Command Handlers
//!
//! Implementation of all CLI commands for the trendscout scanner.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::adapters::dexscreener::{
    DexScreenerApiConfig, DexScreenerClient, DexScreenerFeed, DexScreenerFeedConfig,
};
use crate::application::{enrich_addresses, extract_addresses, ScanPipeline};
use crate::config::{load_config, Config};
use crate::domain::EnrichmentRecord;

/// trendscout - Trending Token Scout for DexScreener
#[derive(Parser, Debug)]
#[command(
    name = "trendscout",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Trending token scout for DexScreener",
    long_about = "Trendscout pulls one trending-pairs frame from the DexScreener feed, \
                  recovers candidate token addresses with chain-specific heuristics, and \
                  enriches them through batched API lookups."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (built-in defaults when omitted)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one full scan: feed fetch, extraction, enrichment
    Scan(ScanCmd),

    /// Extract addresses from a raw payload file, without network access
    Extract(ExtractCmd),

    /// Enrich a given list of addresses
    Enrich(EnrichCmd),
}

/// Run one full scan
#[derive(Parser, Debug)]
pub struct ScanCmd {
    /// Write enrichment records to a JSON file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print extracted addresses only, skipping enrichment
    #[arg(long)]
    pub addresses_only: bool,

    /// Override the number of addresses to enrich
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Extract addresses from a payload file
#[derive(Parser, Debug)]
pub struct ExtractCmd {
    /// File containing one raw pairs payload
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Override the minimum candidate length
    #[arg(long, value_name = "CHARS")]
    pub min_len: Option<usize>,
}

/// Enrich explicit addresses
#[derive(Parser, Debug)]
pub struct EnrichCmd {
    /// Token addresses to look up
    #[arg(value_name = "ADDRESS", required = true)]
    pub addresses: Vec<String>,

    /// Write enrichment records to a JSON file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Override the lookups issued concurrently per batch
    #[arg(long, value_name = "N")]
    pub batch_size: Option<usize>,
}

/// Resolve configuration: explicit file when given, built-in defaults otherwise
pub fn resolve_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Handle scan command
pub async fn scan_command(config: &Config, cmd: ScanCmd) -> Result<()> {
    tracing::info!("Starting trending scan...");

    let mut enrichment = config.enrichment.clone();
    if let Some(limit) = cmd.limit {
        enrichment.max_enriched = limit;
    }

    let feed = DexScreenerFeed::new(DexScreenerFeedConfig::from(&config.feed));
    let client = DexScreenerClient::with_config(DexScreenerApiConfig::from(&config.api))
        .context("Failed to create DexScreener API client")?;

    let pipeline = ScanPipeline::new(feed, client, config.extraction.clone(), enrichment);
    let outcome = pipeline.run().await;

    println!("Extracted {} token addresses", outcome.addresses.len());
    if outcome.addresses.is_empty() {
        return Ok(());
    }

    if cmd.addresses_only {
        for address in &outcome.addresses {
            println!("{address}");
        }
        return Ok(());
    }

    render_records(&outcome.records);

    if let Some(path) = cmd.output {
        write_records(&path, &outcome.records)?;
        println!(
            "Saved {} records to {}",
            outcome.records.len(),
            path.display()
        );
    }

    Ok(())
}

/// Handle extract command
pub async fn extract_command(config: &Config, cmd: ExtractCmd) -> Result<()> {
    let payload = std::fs::read(&cmd.input)
        .with_context(|| format!("Failed to read payload from {}", cmd.input.display()))?;

    let mut extraction = config.extraction.clone();
    if let Some(min_len) = cmd.min_len {
        extraction.min_candidate_len = min_len;
    }

    let addresses = extract_addresses(&payload, &extraction);
    tracing::info!(
        "extracted {} addresses from {} payload bytes",
        addresses.len(),
        payload.len()
    );

    for address in &addresses {
        println!("{address}");
    }

    Ok(())
}

/// Handle enrich command
pub async fn enrich_command(config: &Config, cmd: EnrichCmd) -> Result<()> {
    let mut enrichment = config.enrichment.clone();
    if let Some(batch_size) = cmd.batch_size {
        enrichment.batch_size = batch_size;
    }
    // Explicit addresses were asked for; enrich all of them.
    enrichment.max_enriched = enrichment.max_enriched.max(cmd.addresses.len());

    let client = DexScreenerClient::with_config(DexScreenerApiConfig::from(&config.api))
        .context("Failed to create DexScreener API client")?;

    let records = enrich_addresses(&client, &cmd.addresses, &enrichment).await;
    render_records(&records);

    if let Some(path) = cmd.output {
        write_records(&path, &records)?;
        println!("Saved {} records to {}", records.len(), path.display());
    }

    Ok(())
}

/// Print enrichment records as the summary table
fn render_records(records: &[EnrichmentRecord]) {
    println!();
    println!("{}", "=".repeat(80));
    println!("TRENDING TOKENS");
    println!("{}", "=".repeat(80));
    println!(
        "{:<12} {:<26} {:<10} {:<16} {:<10}",
        "Symbol", "Name", "Chain", "Price", "24h %"
    );
    println!("{}", "-".repeat(80));

    for record in records {
        match record {
            EnrichmentRecord::Token(info) => {
                let price = info
                    .price_usd
                    .map(|p| format!("${p}"))
                    .unwrap_or_else(|| "N/A".to_string());
                let name: String = info.name.chars().take(25).collect();
                println!(
                    "{:<12} {:<26} {:<10} {:<16} {:<10}",
                    info.symbol,
                    name,
                    info.chain,
                    price,
                    format!("{}%", info.price_change_24h)
                );
            }
            EnrichmentRecord::Failed(failure) => {
                let address: String = failure.address.chars().take(24).collect();
                println!("{:<12} {:<26} {}", "-", address, failure.error);
            }
        }
    }
}

/// Write enrichment records to a pretty-printed JSON report
fn write_records(path: &Path, records: &[EnrichmentRecord]) -> Result<()> {
    let report = serde_json::json!({
        "scanned_at": Utc::now().to_rfc3339(),
        "data": records,
    });
    let body = serde_json::to_string_pretty(&report).context("Failed to serialize records")?;
    std::fs::write(path, body)
        .with_context(|| format!("Failed to write records to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_app_parse_scan() {
        let args = vec!["trendscout", "scan"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Scan(cmd) => {
                assert!(cmd.output.is_none());
                assert!(!cmd.addresses_only);
                assert!(cmd.limit.is_none());
            }
            _ => panic!("Expected Scan command"),
        }
        assert!(app.config.is_none());
    }

    #[test]
    fn test_cli_app_parse_scan_with_flags() {
        let args = vec![
            "trendscout",
            "scan",
            "--output",
            "tokens.json",
            "--addresses-only",
            "--limit",
            "10",
        ];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Scan(cmd) => {
                assert_eq!(cmd.output, Some(PathBuf::from("tokens.json")));
                assert!(cmd.addresses_only);
                assert_eq!(cmd.limit, Some(10));
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_cli_app_parse_extract() {
        let args = vec!["trendscout", "extract", "frame.bin", "--min-len", "65"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Extract(cmd) => {
                assert_eq!(cmd.input, PathBuf::from("frame.bin"));
                assert_eq!(cmd.min_len, Some(65));
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_cli_app_parse_enrich() {
        let args = vec!["trendscout", "enrich", "mintA", "mintB", "--batch-size", "2"];
        let app = CliApp::try_parse_from(args).unwrap();

        match app.command {
            Command::Enrich(cmd) => {
                assert_eq!(cmd.addresses, vec!["mintA", "mintB"]);
                assert_eq!(cmd.batch_size, Some(2));
            }
            _ => panic!("Expected Enrich command"),
        }
    }

    #[test]
    fn test_cli_app_enrich_requires_addresses() {
        let args = vec!["trendscout", "enrich"];
        assert!(CliApp::try_parse_from(args).is_err());
    }

    #[test]
    fn test_global_flags() {
        let args = vec![
            "trendscout",
            "-v",
            "--debug",
            "--config",
            "custom.toml",
            "scan",
        ];
        let app = CliApp::try_parse_from(args).unwrap();

        assert!(app.verbose);
        assert!(app.debug);
        assert_eq!(app.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_resolve_config_defaults_when_omitted() {
        let config = resolve_config(None).unwrap();
        assert_eq!(config.extraction.min_candidate_len, 40);
        assert_eq!(config.enrichment.batch_size, 5);
    }

    #[test]
    fn test_resolve_config_missing_file_errors() {
        let path = PathBuf::from("/nonexistent/trendscout.toml");
        assert!(resolve_config(Some(&path)).is_err());
    }
}
