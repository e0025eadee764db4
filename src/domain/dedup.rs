//! Address Deduplication
//!
//! The classifier emits addresses in feed order with repeats (the same mint
//! shows up in several pairs records per frame). Downstream enrichment wants
//! first occurrences only, capped to keep one scan's API footprint bounded.

use std::collections::HashSet;

/// Keep the first occurrence of each address, preserving order, truncated to
/// `cap` entries. Idempotent over already-deduplicated input.
pub fn dedup_addresses<I>(addresses: I, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for address in addresses {
        if unique.len() == cap {
            break;
        }
        if seen.insert(address.clone()) {
            unique.push(address);
        }
    }

    unique
}
