//! Trendscout - DexScreener Trending Token Scout Library
//!
//! Recovers candidate token addresses from the screener's mixed binary/text
//! pairs feed and enriches them with structured metadata through batched API
//! lookups.
//!
//! # Modules
//!
//! - `domain`: Core pipeline logic (normalize, classify, dedup, records)
//! - `ports`: Trait abstractions (PairsFeed, TokenInfoSource) and mocks
//! - `adapters`: External implementations (DexScreener feed + API, CLI)
//! - `application`: Pipeline orchestration (extract, enrich, ScanPipeline)
//! - `config`: Configuration loading and validation

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
