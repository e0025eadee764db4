//! DexScreener Adapters
//!
//! Implementations of the feed and token-info ports against DexScreener's
//! public surfaces: the `io.dexscreener.com` WebSocket for pairs frames and
//! the `api.dexscreener.com` REST endpoint for token lookups.

mod api;
mod feed;
mod types;

pub use api::{DexScreenerApiConfig, DexScreenerClient};
pub use feed::{DexScreenerFeed, DexScreenerFeedConfig};
pub use types::{BaseToken, PairRecord, TokensResponse, WindowedStat};
