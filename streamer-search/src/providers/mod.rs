//! Provider implementations for torrent search functionality.

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::types::SearchItem;

pub mod demo;
pub mod linux;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use demo::DemoProvider;
pub use linux::LinuxProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::{FailingProvider, MockProvider};

/// Trait for torrent search providers.
///
/// Implementations map a (possibly empty) query to a list of records. The
/// built-in providers serve static data; test providers can fail on demand.
#[async_trait]
pub trait TorrentSearchProvider: Send + Sync + std::fmt::Debug {
    /// Search for torrents whose title matches the query.
    ///
    /// # Errors
    /// - `SearchError::ProviderFailed` - Provider could not produce results
    /// - `SearchError::ProviderUnavailable` - Provider is not serving requests
    async fn search_torrents(&self, query: &str) -> Result<Vec<SearchItem>, SearchError>;
}

/// Filters records by case-insensitive title substring.
///
/// An empty query keeps every record. A query matching nothing also keeps
/// every record, so a provider never answers with an empty list.
pub fn filter_by_title(items: Vec<SearchItem>, query: &str) -> Vec<SearchItem> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return items;
    }

    let matching: Vec<SearchItem> = items
        .iter()
        .filter(|item| item.title_contains(&needle))
        .cloned()
        .collect();

    if matching.is_empty() { items } else { matching }
}
