//! Enrichment Records
//!
//! One record is produced per enriched address: either the structured token
//! metadata from the screener API or a per-address failure. The two cases are
//! a tagged enum so callers have to handle both.

use serde::{Deserialize, Serialize};

/// Structured metadata for one token address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// The address the lookup was keyed by.
    pub address: String,
    /// Display name of the base token.
    pub name: String,
    /// Ticker symbol of the base token.
    pub symbol: String,
    /// Chain identifier reported by the screener (e.g. "solana", "ethereum").
    pub chain: String,
    /// Spot price in USD, when the pair reports one.
    pub price_usd: Option<f64>,
    /// 24-hour trading volume in USD.
    pub volume_24h: f64,
    /// 24-hour price change in percent.
    pub price_change_24h: f64,
    /// Canonical screener URL for the pair.
    pub url: String,
}

/// A lookup that did not produce token data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentFailure {
    pub address: String,
    pub error: String,
}

/// Outcome of enriching a single address.
///
/// Per-address failures are data, not control flow: one bad lookup never
/// cancels its batch or drops siblings from the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnrichmentRecord {
    Token(TokenInfo),
    Failed(EnrichmentFailure),
}

impl EnrichmentRecord {
    /// Build a failure record for `address`.
    pub fn failed(address: impl Into<String>, error: impl Into<String>) -> Self {
        EnrichmentRecord::Failed(EnrichmentFailure {
            address: address.into(),
            error: error.into(),
        })
    }

    /// The address this record belongs to, success or not.
    pub fn address(&self) -> &str {
        match self {
            EnrichmentRecord::Token(info) => &info.address,
            EnrichmentRecord::Failed(failure) => &failure.address,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, EnrichmentRecord::Failed(_))
    }
}
