//! Ports Layer - Trait abstractions for external collaborators
//!
//! Following hexagonal architecture, these traits abstract:
//! - `feed`: the live pairs-frame source (WebSocket on the adapter side)
//! - `token_info`: the per-address metadata lookup
//! - `mocks`: scripted implementations used by unit and integration tests

pub mod feed;
pub mod mocks;
pub mod token_info;

pub use feed::{FeedError, PairsFeed};
pub use token_info::{LookupError, TokenInfoSource, TokenPair};
