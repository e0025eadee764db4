//! Application Layer - Pipeline orchestration
//!
//! Composes the domain pipeline with the feed and token-info ports into one
//! scan use case.

pub mod pipeline;

pub use pipeline::{enrich_addresses, extract_addresses, ScanOutcome, ScanPipeline};
