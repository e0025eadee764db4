//! DexScreener Token API Client
//!
//! Implements the token-info port against the public
//! `latest/dex/tokens/{address}` endpoint. One GET per address; the batching
//! and failure policy live in the application layer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ApiSection;
use crate::ports::{LookupError, TokenInfoSource, TokenPair};

use super::types::TokensResponse;

/// Configuration for the DexScreenerClient
#[derive(Debug, Clone)]
pub struct DexScreenerApiConfig {
    /// Token lookup endpoint; the address is appended as a path segment
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for DexScreenerApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.dexscreener.com/latest/dex/tokens".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl DexScreenerApiConfig {
    /// Create config with a custom base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

impl From<&ApiSection> for DexScreenerApiConfig {
    fn from(section: &ApiSection) -> Self {
        Self {
            base_url: section.get_base_url(),
            timeout: Duration::from_secs(section.timeout_secs),
        }
    }
}

/// Client for the DexScreener token lookup API
#[derive(Debug, Clone)]
pub struct DexScreenerClient {
    config: DexScreenerApiConfig,
    http: Client,
}

impl DexScreenerClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self, LookupError> {
        Self::with_config(DexScreenerApiConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: DexScreenerApiConfig) -> Result<Self, LookupError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        Ok(Self { config, http })
    }

    /// Full request URL for one address
    fn lookup_url(&self, address: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), address)
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl TokenInfoSource for DexScreenerClient {
    async fn lookup(&self, address: &str) -> Result<Vec<TokenPair>, LookupError> {
        let response = self
            .http
            .get(self.lookup_url(address))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body: TokensResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))?;

        Ok(body.into_pairs())
    }
}

fn map_transport_error(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        LookupError::Timeout
    } else {
        LookupError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = DexScreenerApiConfig::default();
        assert_eq!(
            config.base_url,
            "https://api.dexscreener.com/latest/dex/tokens"
        );
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_config_from_section() {
        let section = ApiSection {
            base_url: "https://example.test/tokens".to_string(),
            timeout_secs: 3,
        };
        let config = DexScreenerApiConfig::from(&section);
        assert_eq!(config.base_url, "https://example.test/tokens");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_client_creation() {
        assert!(DexScreenerClient::new().is_ok());
    }

    #[test]
    fn test_lookup_url_joins_address() {
        let client =
            DexScreenerClient::with_config(DexScreenerApiConfig::with_base_url(
                "https://example.test/tokens/",
            ))
            .unwrap();
        assert_eq!(
            client.lookup_url("mint123"),
            "https://example.test/tokens/mint123"
        );
    }
}
