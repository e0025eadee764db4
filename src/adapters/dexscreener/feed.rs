//! DexScreener Pairs Feed
//!
//! One-shot WebSocket fetch of a trending-pairs frame from the screener's
//! `io.dexscreener.com` endpoint. The endpoint only answers handshakes that
//! look like a browser, so the upgrade request carries a real user agent,
//! the site origin, and a freshly generated Sec-WebSocket-Key.
//!
//! The first frames after connecting are block/heartbeat notices; the pairs
//! frame is recognized by sniffing the raw bytes for the `pairs` marker.

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as Base64Engine, Engine};
use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::handshake::client::Request;
use tokio_tungstenite::tungstenite::http::header::{ORIGIN, SEC_WEBSOCKET_KEY, USER_AGENT};
use tokio_tungstenite::tungstenite::http::HeaderValue;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

use crate::config::FeedSection;
use crate::ports::{FeedError, PairsFeed};

/// Marker bytes identifying a pairs frame.
const PAIRS_MARKER: &[u8] = b"pairs";

/// Configuration for the DexScreenerFeed
#[derive(Debug, Clone)]
pub struct DexScreenerFeedConfig {
    /// WebSocket endpoint including rank/filter query parameters
    pub ws_url: String,
    /// Origin header for the handshake
    pub origin: String,
    /// Browser user agent for the handshake
    pub user_agent: String,
    /// Frames to inspect before giving up
    pub max_frames: usize,
    /// Overall deadline for one payload fetch
    pub read_timeout: Duration,
}

impl Default for DexScreenerFeedConfig {
    fn default() -> Self {
        Self::from(&FeedSection::default())
    }
}

impl From<&FeedSection> for DexScreenerFeedConfig {
    fn from(section: &FeedSection) -> Self {
        Self {
            ws_url: section.get_ws_url(),
            origin: section.origin.clone(),
            user_agent: section.user_agent.clone(),
            max_frames: section.max_frames,
            read_timeout: Duration::from_secs(section.read_timeout_secs),
        }
    }
}

/// One-shot pairs frame fetcher.
///
/// Each `fetch_payload` call opens a fresh connection and closes it as soon
/// as a pairs frame arrives; there is no subscription state to maintain.
#[derive(Debug, Clone)]
pub struct DexScreenerFeed {
    config: DexScreenerFeedConfig,
}

impl DexScreenerFeed {
    pub fn new(config: DexScreenerFeedConfig) -> Self {
        Self { config }
    }

    /// Build the browser-impersonating upgrade request.
    fn handshake_request(&self) -> Result<Request, FeedError> {
        let mut request = self
            .config
            .ws_url
            .as_str()
            .into_client_request()
            .map_err(|e| FeedError::ConnectionFailed(e.to_string()))?;

        let headers = request.headers_mut();
        headers.insert(ORIGIN, header_value(&self.config.origin)?);
        headers.insert(USER_AGENT, header_value(&self.config.user_agent)?);
        headers.insert(SEC_WEBSOCKET_KEY, header_value(&generate_ws_key())?);

        Ok(request)
    }

    async fn fetch_inner(&self) -> Result<Vec<u8>, FeedError> {
        let request = self.handshake_request()?;
        info!("connecting to pairs feed");
        let (stream, _) = connect_async(request)
            .await
            .map_err(|e| FeedError::ConnectionFailed(e.to_string()))?;
        let (mut write, mut read) = stream.split();

        let mut inspected = 0;
        while inspected < self.config.max_frames {
            match read.next().await {
                Some(Ok(Message::Binary(payload))) => {
                    inspected += 1;
                    if contains_pairs_marker(&payload) {
                        info!("received pairs frame ({} bytes)", payload.len());
                        return Ok(payload);
                    }
                    debug!(
                        "skipping frame #{} ({} bytes - not pairs data)",
                        inspected,
                        payload.len()
                    );
                }
                Some(Ok(Message::Text(text))) => {
                    inspected += 1;
                    if contains_pairs_marker(text.as_bytes()) {
                        info!("received pairs frame ({} bytes)", text.len());
                        return Ok(text.into_bytes());
                    }
                    debug!("skipping frame #{} (text, not pairs data)", inspected);
                }
                Some(Ok(Message::Ping(data))) => {
                    if let Err(e) = write.send(Message::Pong(data)).await {
                        warn!("failed to answer ping: {}", e);
                    }
                }
                Some(Ok(Message::Close(_))) => {
                    return Err(FeedError::Protocol("closed by server".to_string()));
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(FeedError::Protocol(e.to_string())),
                None => break,
            }
        }

        Err(FeedError::NoPairsPayload {
            frames_inspected: inspected,
        })
    }
}

#[async_trait]
impl PairsFeed for DexScreenerFeed {
    async fn fetch_payload(&self) -> Result<Vec<u8>, FeedError> {
        let deadline = self.config.read_timeout;
        match tokio::time::timeout(deadline, self.fetch_inner()).await {
            Ok(result) => result,
            Err(_) => Err(FeedError::Timeout(deadline.as_secs())),
        }
    }
}

/// Random 16-byte key, base64-encoded, as a browser would generate it.
fn generate_ws_key() -> String {
    let random_bytes: [u8; 16] = rand::random();
    Base64Engine.encode(random_bytes)
}

fn header_value(value: &str) -> Result<HeaderValue, FeedError> {
    HeaderValue::from_str(value)
        .map_err(|e| FeedError::ConnectionFailed(format!("invalid header value: {e}")))
}

fn contains_pairs_marker(payload: &[u8]) -> bool {
    payload
        .windows(PAIRS_MARKER.len())
        .any(|window| window == PAIRS_MARKER)
}
