//! Integration tests for Torrent Streamer
//!
//! Drive the full axum router in-process and check the JSON contract of
//! every endpoint.

#[path = "integration/helpers.rs"]
mod helpers;

#[path = "integration/search_api.rs"]
mod search_api;

#[path = "integration/status_api.rs"]
mod status_api;
