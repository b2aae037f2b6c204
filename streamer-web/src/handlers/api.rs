//! API handlers for liveness and search

use axum::extract::{Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use streamer_search::SearchItem;
use tracing::info;

use crate::server::AppState;

/// Body of the static message endpoints.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human readable message
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Query string of `GET /api/search`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search text, empty when omitted
    pub q: String,
    /// Comma-separated provider keys; default selection when omitted
    pub sources: Option<String>,
}

impl SearchQuery {
    /// Builds the query from decoded key/value pairs.
    ///
    /// A repeated key keeps its last value. Unrelated keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" => query.q = value,
                "sources" => query.sources = Some(value),
                _ => {}
            }
        }
        query
    }
}

/// `GET /` liveness message.
pub async fn root() -> Json<MessageResponse> {
    MessageResponse::new("Torrent Streamer Backend is running")
}

/// `GET /api/hello` static greeting.
pub async fn api_hello() -> Json<MessageResponse> {
    MessageResponse::new("Hello from the backend API!")
}

/// `GET /api/search` aggregated search over the selected providers.
pub async fn api_search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<SearchItem>> {
    let params = SearchQuery::from_pairs(pairs);
    let results = state
        .search_service
        .search(&params.q, params.sources.as_deref())
        .await;

    info!(
        query = %params.q,
        sources = params.sources.as_deref().unwrap_or("<default>"),
        count = results.len(),
        "Search served"
    );

    Json(results)
}
