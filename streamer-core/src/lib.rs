//! Streamer Core - Shared configuration and helpers
//!
//! Holds the pieces every Torrent Streamer crate needs: centralized
//! configuration, the top-level error type, magnet link helpers and the
//! tracing setup used by the binary.

pub mod config;
pub mod magnet;
pub mod tracing_setup;

pub use config::StreamerConfig;
pub use magnet::{DedupKey, extract_info_hash};

/// Core errors that can bubble up while bootstrapping the service.
#[derive(Debug, thiserror::Error)]
pub enum StreamerError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StreamerError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            StreamerError::Configuration { reason } => format!("Invalid configuration: {reason}"),
            StreamerError::Io(_) => "File system error occurred".to_string(),
        }
    }

    /// Checks if this error is due to user input validation.
    pub fn is_user_error(&self) -> bool {
        matches!(self, StreamerError::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, StreamerError>;
