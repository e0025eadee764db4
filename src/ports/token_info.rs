//! Token Info Port
//!
//! Seam for the token-info lookup collaborator. The pipeline sees pair
//! records in this port-level shape; wire formats and transport concerns
//! live in the adapter.

use async_trait::async_trait;
use thiserror::Error;

/// One pair record returned by a lookup, every field optional because the
/// upstream omits whatever it does not track for a pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenPair {
    pub base_name: Option<String>,
    pub base_symbol: Option<String>,
    pub chain_id: Option<String>,
    pub price_usd: Option<f64>,
    pub volume_24h: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub url: Option<String>,
}

/// Errors surfaced by a token-info lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("status code {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Lookup collaborator keyed by token address.
#[async_trait]
pub trait TokenInfoSource: Send + Sync {
    /// Fetch the pair records for `address`.
    ///
    /// An empty vec is a successful lookup with no matching pairs; the
    /// caller decides how to represent that.
    async fn lookup(&self, address: &str) -> Result<Vec<TokenPair>, LookupError>;
}
