//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - DexScreener: pairs feed (WebSocket) and token lookup API client
//! - CLI: command-line interface handlers

pub mod cli;
pub mod dexscreener;

pub use cli::CliApp;
pub use dexscreener::{DexScreenerClient, DexScreenerFeed};
