//! Shared request helpers

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use streamer_core::StreamerConfig;
use streamer_web::{AppState, build_router};
use tower::ServiceExt;

/// Router over the built-in providers with test configuration.
pub fn test_router() -> Router {
    build_router(AppState::from_config(&StreamerConfig::for_testing()))
}

/// Sends a GET request and decodes the JSON body.
pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();

    (status, body)
}

/// Titles of a JSON array of search items.
pub fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("search response should be an array")
        .iter()
        .map(|item| item["title"].as_str().unwrap().to_string())
        .collect()
}

/// Sources of a JSON array of search items.
pub fn sources(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("search response should be an array")
        .iter()
        .map(|item| item["source"].as_str().unwrap_or_default().to_string())
        .collect()
}
