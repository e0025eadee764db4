//! Mock port implementations for tests
//!
//! Hand-rolled mocks that record calls and return scripted responses, so
//! pipeline behavior (ordering, isolation, batching) is testable without a
//! network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::feed::{FeedError, PairsFeed};
use super::token_info::{LookupError, TokenInfoSource, TokenPair};

/// Mock pairs feed returning a canned payload.
#[derive(Debug, Clone, Default)]
pub struct MockFeed {
    payload: Option<Vec<u8>>,
    calls: Arc<Mutex<usize>>,
}

impl MockFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the payload returned by `fetch_payload`.
    pub fn with_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Number of fetches issued against this feed.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl PairsFeed for MockFeed {
    async fn fetch_payload(&self) -> Result<Vec<u8>, FeedError> {
        *self.calls.lock().unwrap() += 1;
        self.payload
            .clone()
            .ok_or(FeedError::NoPairsPayload { frames_inspected: 0 })
    }
}

/// Scripted response for one address in [`MockTokenInfo`].
#[derive(Debug, Clone)]
pub enum MockLookup {
    Pairs(Vec<TokenPair>),
    Empty,
    Timeout,
    Status(u16),
}

/// Mock token-info source that records lookup order and returns scripted
/// responses per address. Unscripted addresses resolve to an empty pair list.
///
/// Cloning shares the scripted responses and the call log, so a clone moved
/// into a pipeline still reports its calls through the original handle.
#[derive(Debug, Clone, Default)]
pub struct MockTokenInfo {
    responses: Arc<Mutex<HashMap<String, MockLookup>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockTokenInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to script the response for one address.
    pub fn with_response(self, address: &str, response: MockLookup) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(address.to_string(), response);
        self
    }

    /// Script a single-pair success for `address`.
    pub fn with_pair(self, address: &str, symbol: &str, price_usd: f64) -> Self {
        let pair = TokenPair {
            base_name: Some(format!("{symbol} Token")),
            base_symbol: Some(symbol.to_string()),
            chain_id: Some("solana".to_string()),
            price_usd: Some(price_usd),
            volume_24h: Some(100_000.0),
            price_change_24h: Some(1.25),
            url: Some(format!("https://dexscreener.com/solana/{address}")),
        };
        self.with_response(address, MockLookup::Pairs(vec![pair]))
    }

    /// Addresses looked up, in call order.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenInfoSource for MockTokenInfo {
    async fn lookup(&self, address: &str) -> Result<Vec<TokenPair>, LookupError> {
        self.calls.lock().unwrap().push(address.to_string());
        let scripted = self.responses.lock().unwrap().get(address).cloned();
        match scripted {
            Some(MockLookup::Pairs(pairs)) => Ok(pairs),
            Some(MockLookup::Empty) | None => Ok(Vec::new()),
            Some(MockLookup::Timeout) => Err(LookupError::Timeout),
            Some(MockLookup::Status(code)) => Err(LookupError::Status(code)),
        }
    }
}
