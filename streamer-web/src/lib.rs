//! Streamer Web - JSON API Server

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Liveness, greeting, diagnostics and search endpoints over the sample
//! torrent providers.

pub mod diagnostics;
pub mod handlers;
pub mod server;

// Re-export main types
pub use diagnostics::{DatabaseError, DatabaseProbe, DiagnosticsReport};
pub use server::{AppState, build_router, run_server};
