//! Pairs Feed Port
//!
//! Seam for the collaborator that owns the screener's live connection. The
//! pipeline only ever asks it for one raw, address-bearing payload; framing,
//! handshakes and reconnection policy stay on the adapter side.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by a pairs feed implementation.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed connection failed: {0}")]
    ConnectionFailed(String),

    #[error("feed protocol error: {0}")]
    Protocol(String),

    #[error("no pairs payload received within {frames_inspected} frames")]
    NoPairsPayload { frames_inspected: usize },

    #[error("feed read timed out after {0} seconds")]
    Timeout(u64),
}

/// Source of raw pairs frames.
#[async_trait]
pub trait PairsFeed: Send + Sync {
    /// Fetch one raw payload confirmed to contain pairs data.
    ///
    /// Implementations filter out handshake/heartbeat frames themselves; the
    /// returned bytes go straight into the extraction pipeline.
    async fn fetch_payload(&self) -> Result<Vec<u8>, FeedError>;
}
