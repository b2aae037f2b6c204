//! Error types for torrent search functionality.

use thiserror::Error;

/// Errors a search provider can report.
///
/// The aggregation service never surfaces these to HTTP callers; a failing
/// provider simply contributes no results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Provider failed while producing results.
    #[error("Provider '{provider}' failed: {reason}")]
    ProviderFailed {
        /// Key of the provider that failed
        provider: String,
        /// The reason for the failure
        reason: String,
    },

    /// Provider is registered but cannot serve requests right now.
    #[error("Provider '{provider}' is unavailable")]
    ProviderUnavailable {
        /// Key of the unavailable provider
        provider: String,
    },
}
