//! DexScreener API wire types
//!
//! Serde shapes for the `latest/dex/tokens/{address}` response. The upstream
//! omits fields freely and reports `pairs: null` for unknown addresses, so
//! everything is optional here and mapped into the port-level [`TokenPair`]
//! with those gaps intact.

use serde::Deserialize;

use crate::ports::TokenPair;

/// Top-level response of the token lookup endpoint.
#[derive(Debug, Deserialize)]
pub struct TokensResponse {
    #[serde(default)]
    pub pairs: Option<Vec<PairRecord>>,
}

impl TokensResponse {
    /// Flatten into port-level pair records; `pairs: null` becomes empty.
    pub fn into_pairs(self) -> Vec<TokenPair> {
        self.pairs
            .unwrap_or_default()
            .into_iter()
            .map(PairRecord::into_token_pair)
            .collect()
    }
}

/// One pair record as the screener reports it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairRecord {
    #[serde(default)]
    pub base_token: Option<BaseToken>,
    #[serde(default)]
    pub chain_id: Option<String>,
    /// Stringly-typed upstream; parsed on mapping.
    #[serde(default)]
    pub price_usd: Option<String>,
    #[serde(default)]
    pub volume: Option<WindowedStat>,
    #[serde(default)]
    pub price_change: Option<WindowedStat>,
    #[serde(default)]
    pub url: Option<String>,
}

impl PairRecord {
    pub fn into_token_pair(self) -> TokenPair {
        TokenPair {
            base_name: self.base_token.as_ref().and_then(|t| t.name.clone()),
            base_symbol: self.base_token.as_ref().and_then(|t| t.symbol.clone()),
            chain_id: self.chain_id,
            price_usd: self.price_usd.and_then(|p| p.parse().ok()),
            volume_24h: self.volume.and_then(|v| v.h24),
            price_change_24h: self.price_change.and_then(|c| c.h24),
            url: self.url,
        }
    }
}

/// Base token identity nested inside a pair record.
#[derive(Debug, Clone, Deserialize)]
pub struct BaseToken {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Stat bucketed by time window; only the 24h bucket is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct WindowedStat {
    #[serde(default)]
    pub h24: Option<f64>,
}
