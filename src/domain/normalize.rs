//! Payload Normalization and Tokenization
//!
//! The screener feed delivers pairs frames as a mix of binary framing and
//! printable text. Before any address heuristics run, the raw bytes are
//! flattened into printable ASCII and split into candidate words.

/// Map a raw feed payload to printable text.
///
/// Every byte in the printable ASCII range (32-126) is kept as-is; everything
/// else becomes a single space. Output length always equals input length.
pub fn normalize_payload(raw: &[u8]) -> String {
    raw.iter()
        .map(|&b| if (32..=126).contains(&b) { b as char } else { ' ' })
        .collect()
}

/// Split normalized text on whitespace and keep words long enough to be
/// address-bearing. Short fragments are framing noise and field separators.
///
/// Order matches first appearance in the text.
pub fn candidate_tokens(text: &str, min_len: usize) -> Vec<&str> {
    text.split_whitespace()
        .filter(|word| word.len() >= min_len)
        .collect()
}
