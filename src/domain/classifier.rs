//! Candidate Address Classifier
//!
//! Applies chain-specific heuristics to a single candidate word recovered
//! from a pairs frame and either extracts a refined address or rejects the
//! word. Heuristic order is load-bearing:
//!
//! 1. URL rejection - hyperlinks embed long path segments that would
//!    otherwise pass the later heuristics.
//! 2. EVM hex extraction - a fixed-length suffix rule would truncate
//!    0x-prefixed addresses, so hex matching runs before the fallback.
//! 3. Suffix-anchored chains (pump.fun, letsbonk) - those mints end in a
//!    fixed literal, which anchors a window search more reliably than
//!    length-based slicing.
//! 4. Base58 fallback for Solana-style mints.

use once_cell::sync::Lazy;
use regex::Regex;

/// Substrings that mark a candidate as a URL fragment rather than an address.
const URL_MARKERS: &[&str] = &["https", "http", "//", ".com", ".site", ".xyz"];

/// Chain suffix literals used as extraction anchors.
const SUFFIX_ANCHORS: &[&str] = &["pump", "bonk"];

/// Leading framing artifact occasionally glued onto base58 mints.
const FRAMING_PREFIX: char = 'V';

static EVM_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"0x[0-9a-fA-F]{40,}").expect("valid EVM pattern"));

/// Up to 40 characters of address body ending in the anchor literal.
static PUMP_WINDOW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i).{0,40}pump").expect("valid pump pattern"));

static BONK_WINDOW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i).{0,40}bonk").expect("valid bonk pattern"));

static BASE58_MINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{32,44}$").expect("valid base58 pattern"));

/// Why a candidate was not classified as an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Candidate contains a URL marker substring.
    Url,
    /// A suffix anchor was present but the window search did not match.
    SuffixWindowMiss,
    /// The trailing slice failed the base58 alphabet check.
    NotBase58,
}

/// Outcome of classifying one candidate word.
///
/// Rejections are explicit values rather than swallowed errors so the
/// extraction loop stays auditable; a rejected candidate never aborts the
/// candidates around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Address(String),
    Rejected(RejectReason),
}

/// Classify a single candidate word.
pub fn classify(candidate: &str) -> Verdict {
    let lower = candidate.to_ascii_lowercase();

    if URL_MARKERS.iter().any(|marker| lower.contains(marker)) {
        return Verdict::Rejected(RejectReason::Url);
    }

    // EVM addresses can trail arbitrary frame noise; the address proper is
    // the last hex run in the word.
    if lower.contains("0x") {
        if let Some(hit) = EVM_ADDRESS.find_iter(candidate).last() {
            return Verdict::Address(hit.as_str().to_string());
        }
        // "0x" with no full hex run is not conclusive; keep going.
    }

    for (anchor, window) in SUFFIX_ANCHORS.iter().zip([&PUMP_WINDOW, &BONK_WINDOW]) {
        if lower.contains(anchor) {
            return match window.find(candidate) {
                Some(hit) => Verdict::Address(strip_framing_prefix(hit.as_str()).to_string()),
                // Anchor present but no window match: do not let the generic
                // fallback mislabel this as a different chain.
                None => Verdict::Rejected(RejectReason::SuffixWindowMiss),
            };
        }
    }

    classify_base58_tail(candidate)
}

/// Default heuristic: the trailing 44 characters of the candidate, minus the
/// framing prefix, must look like a base58 mint.
fn classify_base58_tail(candidate: &str) -> Verdict {
    // Normalized feed text is plain ASCII; anything else cannot slice on a
    // 44-byte boundary and cannot be a mint either.
    let start = candidate.len().saturating_sub(44);
    let tail = match candidate.get(start..) {
        Some(tail) => tail,
        None => return Verdict::Rejected(RejectReason::NotBase58),
    };
    let tail = strip_framing_prefix(tail);
    if BASE58_MINT.is_match(tail) {
        Verdict::Address(tail.to_string())
    } else {
        Verdict::Rejected(RejectReason::NotBase58)
    }
}

/// Strip a single leading `V` left over from upstream frame encoding.
fn strip_framing_prefix(s: &str) -> &str {
    s.strip_prefix(FRAMING_PREFIX).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base58_word(len: usize) -> String {
        "A".repeat(len)
    }

    #[test]
    fn test_url_rejection_takes_precedence_over_evm() {
        let candidate = format!("https://x.com/0x{}", "a".repeat(40));
        assert_eq!(classify(&candidate), Verdict::Rejected(RejectReason::Url));
    }

    #[test]
    fn test_url_markers_rejected() {
        for candidate in [
            "http://example.org/abcdefghijklmnopqrstuvwxyz0123456789",
            "cdn.shop.site/images/banner_1234567890abcdef",
            "promo.xyz/claim/airdrop/9999999999999999999999",
        ] {
            assert_eq!(classify(candidate), Verdict::Rejected(RejectReason::Url));
        }
    }

    #[test]
    fn test_evm_extraction_takes_last_match() {
        let candidate = format!("noise0x{}more0x{}", "a".repeat(42), "b".repeat(40));
        let expected = format!("0x{}", "b".repeat(40));
        assert_eq!(classify(&candidate), Verdict::Address(expected));
    }

    #[test]
    fn test_evm_extraction_accepts_longer_hex_runs() {
        let candidate = format!("0x{}", "c".repeat(44));
        assert_eq!(
            classify(&candidate),
            Verdict::Address(format!("0x{}", "c".repeat(44)))
        );
    }

    #[test]
    fn test_evm_marker_without_hex_run_falls_through() {
        // "0x" present but not followed by 40 hex digits; the base58 tail
        // still qualifies.
        let tail = base58_word(44);
        let candidate = format!("0xzz{}", tail);
        assert_eq!(classify(&candidate), Verdict::Address(tail));
    }

    #[test]
    fn test_pump_window_strips_framing_prefix() {
        // Body short enough that the 40-char window reaches the leading V.
        let body = "9PXyzkq4mNb2vRtW8dQjL5hTcFgM3a";
        let candidate = format!("V{}pump", body);
        assert_eq!(
            classify(&candidate),
            Verdict::Address(format!("{}pump", body))
        );
    }

    #[test]
    fn test_pump_window_bounded_at_forty_chars() {
        // With a 40-char body the window already excludes the V prefix.
        let body = "9PXyzkq4mNb2vRtW8dQjL5hTcFgM3aBeYwKrDsUn";
        let candidate = format!("V{}pump", body);
        assert_eq!(
            classify(&candidate),
            Verdict::Address(format!("{}pump", body))
        );
    }

    #[test]
    fn test_bonk_window_extraction() {
        let body = "7kLmNpQrStUvWxYz1234567890abcdefghjkBONK";
        let verdict = classify(body);
        match verdict {
            Verdict::Address(addr) => assert!(addr.to_ascii_lowercase().ends_with("bonk")),
            other => panic!("expected address, got {:?}", other),
        }
    }

    #[test]
    fn test_base58_tail_strips_framing_prefix() {
        // 44-character tail starting with V leaves a 43-character mint.
        let mint = base58_word(43);
        let candidate = format!("junkjunkjunkV{}", mint);
        assert_eq!(classify(&candidate), Verdict::Address(mint));
    }

    #[test]
    fn test_base58_tail_whole_candidate_when_short() {
        let mint = base58_word(35);
        assert_eq!(classify(&mint), Verdict::Address(mint.clone()));
    }

    #[test]
    fn test_base58_rejects_invalid_alphabet() {
        // '0', 'O', 'I' and 'l' are not in the base58 alphabet.
        let candidate = "O0Il".repeat(11);
        assert_eq!(
            classify(&candidate),
            Verdict::Rejected(RejectReason::NotBase58)
        );
    }

    #[test]
    fn test_base58_rejects_too_short_tail() {
        assert_eq!(
            classify(&base58_word(20)),
            Verdict::Rejected(RejectReason::NotBase58)
        );
    }

    #[test]
    fn test_classify_is_total_over_ascii_noise() {
        // No candidate may panic the classifier, whatever the mix.
        for candidate in [
            "============================================",
            "!!!###$$$%%%^^^&&&***((()))___+++===---~~~``",
            "0x0x0x0x0x0x0x0x0x0x0x0x0x0x0x0x0x0x0x0x0x0x",
        ] {
            let _ = classify(candidate);
        }
    }
}
