//! Directional keyword scans over a token sequence.
//!
//! A suffix scan locates a value positioned *before* a keyword occurrence,
//! walking backward from just before the keyword to the start of the
//! narrative. A prefix scan mirrors it, walking forward from just after the
//! keyword to the end. Both return the first token that reads as the
//! requested value type and never continue past a first success.

use super::normalize::fold_token;

/// A value that can be read from a raw narrative token.
///
/// Implementations decide at the type level what counts as a hit, so the
/// scans need no runtime type inspection.
pub trait TokenValue: Sized {
    fn from_token(raw: &str) -> Option<Self>;
}

/// Locale-invariant decimal parse (dot separator). Comma-formatted
/// numbers do not parse and are skipped by the scans.
impl TokenValue for f64 {
    fn from_token(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

/// Any token counts, returned verbatim (unfolded).
impl TokenValue for String {
    fn from_token(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

fn is_keyword(token: &str, keywords: &[&str]) -> bool {
    keywords.contains(&fold_token(token).as_str())
}

/// Suffix scan: first value found scanning backward from a keyword.
///
/// Walks tokens left to right; on a keyword hit at index `i`, walks
/// `i-1..=0` and returns the first token that reads as `T`. A keyword at
/// index 0 has an empty backward range — no value from that occurrence,
/// and the outer walk continues to later occurrences.
pub fn scan_before<T: TokenValue>(tokens: &[&str], keywords: &[&str]) -> Option<T> {
    for (i, token) in tokens.iter().enumerate() {
        if !is_keyword(token, keywords) {
            continue;
        }
        for raw in tokens[..i].iter().rev() {
            if let Some(value) = T::from_token(raw) {
                return Some(value);
            }
        }
    }
    None
}

/// Prefix scan: first value found scanning forward from a keyword.
///
/// Mirror of [`scan_before`]: on a keyword hit at index `i`, walks
/// `i+1..` and returns the first token that reads as `T`.
pub fn scan_after<T: TokenValue>(tokens: &[&str], keywords: &[&str]) -> Option<T> {
    for (i, token) in tokens.iter().enumerate() {
        if !is_keyword(token, keywords) {
            continue;
        }
        for raw in &tokens[i + 1..] {
            if let Some(value) = T::from_token(raw) {
                return Some(value);
            }
        }
    }
    None
}
