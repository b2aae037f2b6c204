//! Demo provider serving legal WebTorrent sample films.

use async_trait::async_trait;

use super::{TorrentSearchProvider, filter_by_title};
use crate::errors::SearchError;
use crate::types::SearchItem;

/// Registry key and source tag of the demo provider.
pub const DEMO_SOURCE: &str = "demo";

/// Demo provider for browser streaming tests.
///
/// Returns a curated set of freely licensed films that are well seeded on
/// WebTorrent trackers. No external calls are made.
#[derive(Debug, Default)]
pub struct DemoProvider;

impl DemoProvider {
    /// Creates the demo provider.
    pub fn new() -> Self {
        Self
    }

    /// Full, unfiltered demo catalog.
    pub fn catalog() -> Vec<SearchItem> {
        vec![
            SearchItem::new(
                "Big Buck Bunny 720p (WebTorrent demo)",
                concat!(
                    "magnet:?xt=urn:btih:08ada5a7a6183aae1e09d831df6748d566095a10",
                    "&dn=Big+Buck+Bunny+%5B2008%5D+720p",
                    "&tr=udp%3A%2F%2Ftracker.openbittorrent.com%3A80",
                    "&tr=udp%3A%2F%2Ftracker.opentrackr.org%3A1337%2Fannounce",
                    "&tr=wss%3A%2F%2Ftracker.openwebtorrent.com",
                    "&tr=wss%3A%2F%2Ftracker.btorrent.xyz",
                    "&tr=wss%3A%2F%2Ftracker.fastcast.nz",
                ),
            )
            .with_size("700MB")
            .with_swarm(500, 200)
            .with_source(DEMO_SOURCE),
            SearchItem::new(
                "Sintel 720p (WebTorrent demo)",
                concat!(
                    "magnet:?xt=urn:btih:37d6f9393bd39f2f9d07c9f0e2b4f0de7b0ed2f5",
                    "&dn=Sintel+%5B2010%5D+720p",
                    "&tr=udp%3A%2F%2Ftracker.opentrackr.org%3A1337%2Fannounce",
                    "&tr=wss%3A%2F%2Ftracker.openwebtorrent.com",
                    "&tr=wss%3A%2F%2Ftracker.btorrent.xyz",
                    "&tr=wss%3A%2F%2Ftracker.fastcast.nz",
                ),
            )
            .with_size("600MB")
            .with_swarm(200, 80)
            .with_source(DEMO_SOURCE),
            SearchItem::new(
                "Tears of Steel 720p (WebTorrent demo)",
                concat!(
                    "magnet:?xt=urn:btih:4a5e1e4b5b816d05f4a8f2b5756fa0fe58f3dcb5",
                    "&dn=Tears+of+Steel+%5B2012%5D+720p",
                    "&tr=udp%3A%2F%2Ftracker.opentrackr.org%3A1337%2Fannounce",
                    "&tr=wss%3A%2F%2Ftracker.openwebtorrent.com",
                    "&tr=wss%3A%2F%2Ftracker.btorrent.xyz",
                    "&tr=wss%3A%2F%2Ftracker.fastcast.nz",
                ),
            )
            .with_size("900MB")
            .with_swarm(120, 60)
            .with_source(DEMO_SOURCE),
        ]
    }
}

#[async_trait]
impl TorrentSearchProvider for DemoProvider {
    async fn search_torrents(&self, query: &str) -> Result<Vec<SearchItem>, SearchError> {
        Ok(filter_by_title(Self::catalog(), query))
    }
}
