//! HTTP request handlers organized by functionality

pub mod api;
pub mod diagnostics;

// Re-export handler functions
pub use api::{MessageResponse, SearchQuery, api_hello, api_search, root};
pub use diagnostics::diagnostics_status;
