//! Scan Pipeline
//!
//! The two-stage pipeline behind a trending scan:
//! 1. `extract_addresses` recovers candidate token addresses from one raw
//!    pairs frame (normalize, tokenize, classify, dedup).
//! 2. `enrich_addresses` resolves each address against the token-info port
//!    in sequential batches of concurrent lookups.
//!
//! `ScanPipeline` composes both stages behind the feed and token-info ports.

use futures_util::future::join_all;
use tracing::{debug, info, trace, warn};

use crate::config::{EnrichmentSection, ExtractionSection};
use crate::domain::{
    candidate_tokens, classify, dedup_addresses, normalize_payload, EnrichmentRecord, TokenInfo,
    Verdict,
};
use crate::ports::{PairsFeed, TokenInfoSource, TokenPair};

/// Recover unique candidate addresses from one raw pairs payload.
///
/// Total over any byte sequence: an empty or address-free payload yields an
/// empty list, and a rejected candidate never affects its neighbors.
pub fn extract_addresses(payload: &[u8], cfg: &ExtractionSection) -> Vec<String> {
    let text = normalize_payload(payload);
    let candidates = candidate_tokens(&text, cfg.min_candidate_len);
    debug!(
        "{} candidate words of {}+ chars in {} byte payload",
        candidates.len(),
        cfg.min_candidate_len,
        payload.len()
    );

    let mut extracted = Vec::new();
    for candidate in candidates {
        match classify(candidate) {
            Verdict::Address(address) => extracted.push(address),
            Verdict::Rejected(reason) => trace!(?reason, candidate, "candidate rejected"),
        }
    }

    dedup_addresses(extracted, cfg.max_addresses)
}

/// Enrich addresses against the token-info port.
///
/// Only the first `cfg.max_enriched` addresses are looked up. Lookups within
/// a batch run concurrently; batches run strictly one after another, which
/// bounds peak outbound concurrency to `cfg.batch_size`. Output order always
/// matches input order, and every enriched address yields exactly one
/// record - failures included.
pub async fn enrich_addresses<S>(
    source: &S,
    addresses: &[String],
    cfg: &EnrichmentSection,
) -> Vec<EnrichmentRecord>
where
    S: TokenInfoSource + ?Sized,
{
    let batch_size = cfg.batch_size.max(1);
    let limit = addresses.len().min(cfg.max_enriched);
    let to_enrich = &addresses[..limit];
    if to_enrich.len() < addresses.len() {
        info!(
            "enriching first {} of {} extracted addresses",
            to_enrich.len(),
            addresses.len()
        );
    }

    let total_batches = to_enrich.len().div_ceil(batch_size);
    let mut records = Vec::with_capacity(to_enrich.len());

    for (index, batch) in to_enrich.chunks(batch_size).enumerate() {
        debug!(
            "fetching batch {}/{} ({} addresses)",
            index + 1,
            total_batches,
            batch.len()
        );
        // join_all resolves in input order regardless of completion order,
        // which keeps records aligned with their batch positions.
        let lookups = batch.iter().map(|address| enrich_one(source, address));
        records.extend(join_all(lookups).await);
    }

    records
}

async fn enrich_one<S>(source: &S, address: &str) -> EnrichmentRecord
where
    S: TokenInfoSource + ?Sized,
{
    match source.lookup(address).await {
        Ok(pairs) => match pairs.into_iter().next() {
            Some(pair) => record_from_pair(address, pair),
            None => EnrichmentRecord::failed(address, "no data retrieved"),
        },
        Err(err) => {
            warn!("lookup failed for {}: {}", address, err);
            EnrichmentRecord::failed(address, err.to_string())
        }
    }
}

/// Map the first pair record into a success row, substituting fallbacks for
/// fields the upstream omits.
fn record_from_pair(address: &str, pair: TokenPair) -> EnrichmentRecord {
    EnrichmentRecord::Token(TokenInfo {
        address: address.to_string(),
        name: pair.base_name.unwrap_or_else(|| "Unknown".to_string()),
        symbol: pair.base_symbol.unwrap_or_else(|| "Unknown".to_string()),
        chain: pair.chain_id.unwrap_or_else(|| "unknown".to_string()),
        price_usd: pair.price_usd,
        volume_24h: pair.volume_24h.unwrap_or(0.0),
        price_change_24h: pair.price_change_24h.unwrap_or(0.0),
        url: pair.url.unwrap_or_default(),
    })
}

/// Result of one full scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Unique addresses recovered from the feed, in first-appearance order.
    pub addresses: Vec<String>,
    /// One record per enriched address, aligned with `addresses`.
    pub records: Vec<EnrichmentRecord>,
}

/// Full feed-to-records pipeline over the two port traits.
///
/// Holds no state between runs; each `run` is an independent scan.
pub struct ScanPipeline<F, S> {
    feed: F,
    token_info: S,
    extraction: ExtractionSection,
    enrichment: EnrichmentSection,
}

impl<F, S> ScanPipeline<F, S>
where
    F: PairsFeed,
    S: TokenInfoSource,
{
    pub fn new(
        feed: F,
        token_info: S,
        extraction: ExtractionSection,
        enrichment: EnrichmentSection,
    ) -> Self {
        Self {
            feed,
            token_info,
            extraction,
            enrichment,
        }
    }

    /// Run one scan: fetch a pairs frame, extract addresses, enrich them.
    ///
    /// A feed that yields no payload produces an empty outcome rather than
    /// an error; enrichment over an empty address list is a no-op.
    pub async fn run(&self) -> ScanOutcome {
        let payload = match self.feed.fetch_payload().await {
            Ok(payload) => payload,
            Err(err) => {
                warn!("feed yielded no pairs payload: {}", err);
                return ScanOutcome::default();
            }
        };

        let addresses = extract_addresses(&payload, &self.extraction);
        info!("extracted {} unique addresses", addresses.len());

        if addresses.is_empty() {
            return ScanOutcome::default();
        }

        let records = enrich_addresses(&self.token_info, &addresses, &self.enrichment).await;
        ScanOutcome { addresses, records }
    }
}
