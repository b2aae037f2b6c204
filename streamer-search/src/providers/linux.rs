//! Linux ISO provider.

use async_trait::async_trait;

use super::{TorrentSearchProvider, filter_by_title};
use crate::errors::SearchError;
use crate::types::SearchItem;

/// Registry key and source tag of the Linux ISO provider.
pub const LINUX_SOURCE: &str = "linux";

const TRACKERS: &str = concat!(
    "&tr=udp%3A%2F%2Ftracker.opentrackr.org%3A1337%2Fannounce",
    "&tr=wss%3A%2F%2Ftracker.openwebtorrent.com",
);

/// Static list of distribution installer images.
#[derive(Debug, Default)]
pub struct LinuxProvider;

impl LinuxProvider {
    /// Creates the Linux ISO provider.
    pub fn new() -> Self {
        Self
    }

    /// Full, unfiltered ISO catalog.
    pub fn catalog() -> Vec<SearchItem> {
        [
            (
                "Ubuntu 22.04.4 LTS Desktop amd64",
                "3e2de7a6d8590bb25b41097fa668045952fcc506",
                "ubuntu-22.04.4-desktop-amd64.iso",
                "4.7GB",
                1843,
                97,
            ),
            (
                "Debian 12.5.0 amd64 netinst",
                "2b4c1b5e8a7d43f09a6e1c3d5f7b9a0c2e4d6f81",
                "debian-12.5.0-amd64-netinst.iso",
                "629MB",
                612,
                21,
            ),
            (
                "Fedora Workstation 39 x86_64 Live",
                "c4f3d2e1a0b9c8d7e6f5a4b3c2d1e0f9a8b7c6d5",
                "Fedora-Workstation-Live-x86_64-39-1.5.iso",
                "2.1GB",
                734,
                45,
            ),
            (
                "Arch Linux 2024.03.01 x86_64",
                "9a8b7c6d5e4f3a2b1c0d9e8f7a6b5c4d3e2f1a0b",
                "archlinux-2024.03.01-x86_64.iso",
                "1.0GB",
                455,
                18,
            ),
        ]
        .into_iter()
        .map(|(title, hash, file_name, size, seeds, peers)| {
            let magnet = format!("magnet:?xt=urn:btih:{hash}&dn={file_name}{TRACKERS}");
            SearchItem::new(title, magnet)
                .with_size(size)
                .with_swarm(seeds, peers)
                .with_source(LINUX_SOURCE)
        })
        .collect()
    }
}

#[async_trait]
impl TorrentSearchProvider for LinuxProvider {
    async fn search_torrents(&self, query: &str) -> Result<Vec<SearchItem>, SearchError> {
        Ok(filter_by_title(Self::catalog(), query))
    }
}
