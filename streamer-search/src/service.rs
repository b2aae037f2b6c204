//! Search aggregation across registered providers
//!
//! Runs the selected providers, merges their output in selection order,
//! collapses duplicate torrents and guarantees a non-empty answer by falling
//! back to the demo catalog.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use streamer_core::DedupKey;
use streamer_core::config::{DEFAULT_SOURCES, parse_source_list};
use tracing::{debug, error, warn};

use crate::providers::{DemoProvider, TorrentSearchProvider};
use crate::registry::ProviderRegistry;
use crate::types::SearchItem;

/// Search service shared by the HTTP handlers and the CLI.
#[derive(Debug, Clone)]
pub struct SearchService {
    registry: Arc<ProviderRegistry>,
    fallback: Arc<dyn TorrentSearchProvider>,
    default_sources: Vec<String>,
}

impl SearchService {
    /// Creates a service over the built-in providers with default selection.
    pub fn new() -> Self {
        Self::with_registry(
            ProviderRegistry::with_defaults(),
            DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Creates a service over a custom registry.
    ///
    /// `default_sources` is used when a request names no sources at all.
    pub fn with_registry(registry: ProviderRegistry, default_sources: Vec<String>) -> Self {
        Self {
            registry: Arc::new(registry),
            fallback: Arc::new(DemoProvider::new()),
            default_sources,
        }
    }

    /// Replaces the provider used when aggregation yields nothing.
    pub fn with_fallback(mut self, fallback: Arc<dyn TorrentSearchProvider>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Registry backing this service.
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Provider keys used when a request names no sources.
    pub fn default_sources(&self) -> &[String] {
        &self.default_sources
    }

    /// Searches the selected providers.
    ///
    /// `sources` is a comma-separated list of provider keys; `None` selects
    /// the default sources. Unknown keys and failing providers contribute
    /// nothing. The result is deduplicated by info hash and, when empty,
    /// replaced by the fallback provider's answer for the same query.
    pub async fn search(&self, query: &str, sources: Option<&str>) -> Vec<SearchItem> {
        let selection = match sources {
            Some(raw) => parse_source_list(raw),
            None => self.default_sources.clone(),
        };
        let providers = self.registry.resolve(selection.as_slice());

        let outcomes = join_all(
            providers
                .iter()
                .map(|(_, provider)| provider.search_torrents(query)),
        )
        .await;

        let mut merged = Vec::new();
        for ((key, _), outcome) in providers.iter().zip(outcomes) {
            match outcome {
                Ok(items) => {
                    debug!(provider = %key, count = items.len(), "Provider answered");
                    merged.extend(items);
                }
                Err(e) => warn!(provider = %key, error = %e, "Dropping failed provider"),
            }
        }

        let results = dedup_by_info_hash(merged);
        if !results.is_empty() {
            return results;
        }

        debug!(query, "No aggregated results, using fallback provider");
        match self.fallback.search_torrents(query).await {
            Ok(items) => items,
            Err(e) => {
                error!(error = %e, "Fallback provider failed");
                Vec::new()
            }
        }
    }
}

impl Default for SearchService {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes duplicate torrents, keeping the first occurrence.
///
/// Records are identified by their `btih` token, or by the raw magnet when
/// no hash can be extracted. Order is otherwise preserved.
pub fn dedup_by_info_hash(items: Vec<SearchItem>) -> Vec<SearchItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(DedupKey::for_magnet(&item.magnet)))
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::providers::{FailingProvider, LinuxProvider, MockProvider};

    fn titles(items: &[SearchItem]) -> Vec<&str> {
        items.iter().map(|item| item.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_default_sources_include_demo_and_linux() {
        let results = SearchService::new().search("", None).await;

        assert_eq!(
            results.len(),
            DemoProvider::catalog().len() + LinuxProvider::catalog().len()
        );
        assert!(results.iter().any(|r| r.source.as_deref() == Some("demo")));
        assert!(results.iter().any(|r| r.source.as_deref() == Some("linux")));
        // demo first, in selection order
        assert_eq!(results[0].source.as_deref(), Some("demo"));
    }

    #[tokio::test]
    async fn test_linux_only_ubuntu_query() {
        let results = SearchService::new().search("ubuntu", Some("linux")).await;

        assert_eq!(titles(&results), vec!["Ubuntu 22.04.4 LTS Desktop amd64"]);
    }

    #[tokio::test]
    async fn test_unmatched_demo_query_returns_full_demo_set() {
        let results = SearchService::new().search("zzz", Some("demo")).await;
        assert_eq!(results, DemoProvider::catalog());
    }

    #[tokio::test]
    async fn test_selection_order_is_respected() {
        let results = SearchService::new().search("", Some("linux,demo")).await;

        assert_eq!(results[0].source.as_deref(), Some("linux"));
        assert_eq!(results.last().unwrap().source.as_deref(), Some("demo"));
    }

    #[tokio::test]
    async fn test_unknown_sources_fall_back_to_demo() {
        let service = SearchService::new();

        for sources in ["", "nope", "nope, ,other", ",,,"] {
            let results = service.search("", Some(sources)).await;
            assert_eq!(results, DemoProvider::catalog(), "sources={sources:?}");
        }
    }

    #[tokio::test]
    async fn test_unknown_keys_ignored_alongside_known() {
        let results = SearchService::new().search("", Some("nope,linux")).await;
        assert_eq!(results, LinuxProvider::catalog());
    }

    #[tokio::test]
    async fn test_failing_provider_is_dropped() {
        let registry = ProviderRegistry::with_defaults()
            .register("broken", Arc::new(FailingProvider::new("broken", "boom")));
        let service = SearchService::with_registry(registry, vec!["broken".into(), "linux".into()]);

        let results = service.search("", None).await;

        assert_eq!(results, LinuxProvider::catalog());
    }

    #[tokio::test]
    async fn test_unavailable_provider_is_dropped() {
        let registry = ProviderRegistry::with_defaults()
            .register("offline", Arc::new(FailingProvider::unavailable("offline")));
        let service = SearchService::with_registry(registry, Vec::new());

        let results = service.search("debian", Some("offline,linux")).await;

        assert_eq!(titles(&results), vec!["Debian 12.5.0 amd64 netinst"]);
    }

    #[tokio::test]
    async fn test_only_failing_providers_fall_back_to_demo() {
        let registry = ProviderRegistry::new()
            .register("broken", Arc::new(FailingProvider::new("broken", "boom")));
        let service = SearchService::with_registry(registry, vec!["broken".into()]);

        let results = service.search("sintel", None).await;

        assert_eq!(titles(&results), vec!["Sintel 720p (WebTorrent demo)"]);
    }

    #[tokio::test]
    async fn test_failing_fallback_yields_empty_list() {
        let service = SearchService::with_registry(ProviderRegistry::new(), Vec::new())
            .with_fallback(Arc::new(FailingProvider::new("demo", "offline")));

        assert!(service.search("", None).await.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_hash_across_providers_keeps_first() {
        let mirror = MockProvider::new(vec![
            SearchItem::new(
                "Sintel mirror",
                "magnet:?xt=urn:btih:37D6F9393BD39F2F9D07C9F0E2B4F0DE7B0ED2F5&dn=mirror",
            )
            .with_source("mirror"),
        ]);
        let registry = ProviderRegistry::with_defaults().register("mirror", Arc::new(mirror));
        let service = SearchService::with_registry(registry, Vec::new());

        let results = service.search("sintel", Some("demo,mirror")).await;
        assert_eq!(titles(&results), vec!["Sintel 720p (WebTorrent demo)"]);

        let reversed = service.search("sintel", Some("mirror,demo")).await;
        assert_eq!(titles(&reversed), vec!["Sintel mirror"]);
    }

    #[test]
    fn test_dedup_falls_back_to_raw_magnet() {
        let items = vec![
            SearchItem::new("first", "magnet:?dn=same"),
            SearchItem::new("second", "magnet:?dn=same"),
            SearchItem::new("third", "magnet:?dn=other"),
        ];

        let deduped = dedup_by_info_hash(items);

        assert_eq!(titles(&deduped), vec!["first", "third"]);
    }

    #[test]
    fn test_dedup_hash_and_raw_keys_do_not_collide() {
        let items = vec![
            SearchItem::new("hashed", "magnet:?xt=urn:btih:abc"),
            SearchItem::new("raw", "abc"),
        ];

        assert_eq!(dedup_by_info_hash(items).len(), 2);
    }

    proptest! {
        #[test]
        fn prop_demo_results_match_query_or_are_full_set(query in "[a-zA-Z0-9 ]{0,10}") {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let results = runtime.block_on(SearchService::new().search(&query, Some("demo")));

            let needle = query.to_lowercase();
            let catalog = DemoProvider::catalog();
            let any_match = catalog.iter().any(|item| item.title_contains(&needle));

            if any_match {
                prop_assert!(results.iter().all(|item| item.title_contains(&needle)));
            } else {
                prop_assert_eq!(results, catalog);
            }
        }

        #[test]
        fn prop_dedup_is_idempotent_and_unique(hashes in proptest::collection::vec("[0-9a-f]{4}", 0..12)) {
            let items: Vec<SearchItem> = hashes
                .iter()
                .enumerate()
                .map(|(i, hash)| SearchItem::new(format!("item {i}"), format!("magnet:?xt=urn:btih:{hash}")))
                .collect();

            let deduped = dedup_by_info_hash(items);
            let unique: HashSet<&String> = hashes.iter().collect();

            prop_assert_eq!(deduped.len(), unique.len());
            prop_assert_eq!(dedup_by_info_hash(deduped.clone()), deduped);
        }
    }
}
