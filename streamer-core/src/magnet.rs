//! Magnet link helpers
//!
//! Only the `btih` token is ever looked at. Magnets are not validated or
//! resolved beyond that substring match.

use std::sync::LazyLock;

use regex::Regex;

/// Matches the first `btih:<token>` occurrence, hex or base32. ASCII only.
static BTIH_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i-u)btih:([0-9a-z]+)").ok());

/// Extracts the BitTorrent info hash token from a magnet URI.
///
/// Returns the first token following `btih:`, as written in the magnet.
/// Returns `None` when the magnet carries no `btih` topic.
pub fn extract_info_hash(magnet: &str) -> Option<&str> {
    let pattern = BTIH_PATTERN.as_ref()?;
    pattern
        .captures(magnet)
        .and_then(|captures| captures.get(1))
        .map(|token| token.as_str())
}

/// Identity used when collapsing duplicate search results.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupKey {
    /// Lowercased info hash token
    InfoHash(String),
    /// Raw magnet string, used when no hash could be extracted
    Magnet(String),
}

impl DedupKey {
    /// Derives the dedup identity of a magnet link.
    pub fn for_magnet(magnet: &str) -> Self {
        match extract_info_hash(magnet) {
            Some(hash) => Self::InfoHash(hash.to_ascii_lowercase()),
            None => Self::Magnet(magnet.to_string()),
        }
    }
}
