//! CLI Adapter
//!
//! Command-line interface for the trendscout scanner.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{
    enrich_command, extract_command, resolve_config, scan_command, CliApp, Command, EnrichCmd,
    ExtractCmd, ScanCmd,
};
