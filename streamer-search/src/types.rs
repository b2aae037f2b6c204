//! Data types for torrent search functionality.

use serde::{Deserialize, Serialize};

fn default_count() -> Option<u32> {
    Some(0)
}

/// Single torrent record returned by a search.
///
/// Field names are part of the HTTP contract and serialize as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Display title, matched against search queries
    pub title: String,
    /// Magnet URI, not validated beyond `btih` extraction
    pub magnet: String,
    /// Human readable size such as `700MB`
    #[serde(default)]
    pub size: Option<String>,
    /// Seeder count
    #[serde(default = "default_count")]
    pub seeds: Option<u32>,
    /// Peer (leecher) count
    #[serde(default = "default_count")]
    pub peers: Option<u32>,
    /// Key of the provider that produced this record
    #[serde(default)]
    pub source: Option<String>,
}

impl SearchItem {
    /// Creates a record with zero seeds and peers and no size or source.
    pub fn new(title: impl Into<String>, magnet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            magnet: magnet.into(),
            size: None,
            seeds: default_count(),
            peers: default_count(),
            source: None,
        }
    }

    /// Sets the display size.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Sets seed and peer counts.
    pub fn with_swarm(mut self, seeds: u32, peers: u32) -> Self {
        self.seeds = Some(seeds);
        self.peers = Some(peers);
        self
    }

    /// Tags the record with its originating provider.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Case-insensitive substring match against the title.
    ///
    /// `needle_lower` must already be lowercased.
    pub fn title_contains(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
    }
}
