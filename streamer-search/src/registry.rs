//! Provider registry keyed by source name.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::providers::demo::DEMO_SOURCE;
use crate::providers::linux::LINUX_SOURCE;
use crate::providers::{DemoProvider, LinuxProvider, TorrentSearchProvider};

/// Registered provider together with the key it was selected by.
pub type ResolvedProvider = (String, Arc<dyn TorrentSearchProvider>);

/// Immutable mapping from provider key to provider.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, Arc<dyn TorrentSearchProvider>>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in `demo` and `linux` providers.
    pub fn with_defaults() -> Self {
        Self::new()
            .register(DEMO_SOURCE, Arc::new(DemoProvider::new()))
            .register(LINUX_SOURCE, Arc::new(LinuxProvider::new()))
    }

    /// Adds or replaces the provider stored under `key`.
    pub fn register(
        mut self,
        key: impl Into<String>,
        provider: Arc<dyn TorrentSearchProvider>,
    ) -> Self {
        self.providers.insert(key.into(), provider);
        self
    }

    /// Looks up a provider by exact key.
    pub fn get(&self, key: &str) -> Option<Arc<dyn TorrentSearchProvider>> {
        self.providers.get(key).cloned()
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Resolves requested keys in request order.
    ///
    /// Unknown keys are skipped. A key requested twice resolves once, at its
    /// first position.
    pub fn resolve<S: AsRef<str>>(&self, keys: &[S]) -> Vec<ResolvedProvider> {
        let mut resolved: Vec<ResolvedProvider> = Vec::with_capacity(keys.len());

        for key in keys {
            let key: &str = key.as_ref();
            if resolved.iter().any(|(seen, _)| seen == key) {
                continue;
            }
            match self.get(key) {
                Some(provider) => resolved.push((key.to_string(), provider)),
                None => debug!(provider = key, "Ignoring unknown search provider"),
            }
        }

        resolved
    }
}
