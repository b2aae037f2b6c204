//! Streamer Search - Sample torrent search and aggregation

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Static in-memory providers return curated torrent records. The search
//! service merges the selected providers, collapses duplicates by info hash
//! and falls back to the demo set when nothing survives.

pub mod errors;
pub mod providers;
pub mod registry;
pub mod service;
pub mod types;

// Re-export main types
pub use errors::SearchError;
pub use providers::{DemoProvider, LinuxProvider, TorrentSearchProvider};
pub use registry::ProviderRegistry;
pub use service::{SearchService, dedup_by_info_hash};
pub use types::SearchItem;
