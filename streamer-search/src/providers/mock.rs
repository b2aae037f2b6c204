//! Mock provider implementations for testing.

use async_trait::async_trait;

use super::{TorrentSearchProvider, filter_by_title};
use crate::errors::SearchError;
use crate::types::SearchItem;

/// Provider serving a caller-supplied list, filtered like the built-in ones.
#[derive(Debug, Default)]
pub struct MockProvider {
    items: Vec<SearchItem>,
}

impl MockProvider {
    /// Creates a mock provider serving the given records.
    pub fn new(items: Vec<SearchItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl TorrentSearchProvider for MockProvider {
    async fn search_torrents(&self, query: &str) -> Result<Vec<SearchItem>, SearchError> {
        Ok(filter_by_title(self.items.clone(), query))
    }
}

/// Provider that fails every request.
#[derive(Debug)]
pub struct FailingProvider {
    provider: String,
    reason: Option<String>,
}

impl FailingProvider {
    /// Creates a provider that always fails with the given reason.
    pub fn new(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            reason: Some(reason.into()),
        }
    }

    /// Creates a provider that always reports itself unavailable.
    pub fn unavailable(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            reason: None,
        }
    }
}

#[async_trait]
impl TorrentSearchProvider for FailingProvider {
    async fn search_torrents(&self, _query: &str) -> Result<Vec<SearchItem>, SearchError> {
        let provider = self.provider.clone();
        match &self.reason {
            Some(reason) => Err(SearchError::ProviderFailed {
                provider,
                reason: reason.clone(),
            }),
            None => Err(SearchError::ProviderUnavailable { provider }),
        }
    }
}
