//! Liveness and diagnostics endpoint tests

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use streamer_core::StreamerConfig;
use streamer_web::{AppState, DatabaseError, DatabaseProbe, build_router};

use crate::helpers::{get_json, test_router};

#[derive(Debug)]
struct HealthyDatabase;

#[async_trait]
impl DatabaseProbe for HealthyDatabase {
    async fn is_initialized(&self) -> Result<bool, DatabaseError> {
        Ok(true)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, DatabaseError> {
        Ok(vec!["torrents".to_string(), "users".to_string()])
    }
}

#[tokio::test]
async fn test_root_reports_liveness() {
    let (status, body) = get_json(&test_router(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Torrent Streamer Backend is running");
}

#[tokio::test]
async fn test_hello_greeting() {
    let (status, body) = get_json(&test_router(), "/api/hello").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hello from the backend API!");
}

#[tokio::test]
async fn test_diagnostics_without_database() {
    let (status, body) = get_json(&test_router(), "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(
        body["database"],
        "❌ Database module not found (run enable-database first)"
    );
    assert_eq!(body["database_url"], "❌ Not Set");
    assert_eq!(body["database_name"], "❌ Not Set");
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["collections"], serde_json::json!([]));
}

#[tokio::test]
async fn test_diagnostics_with_database_probe() {
    let mut config = StreamerConfig::for_testing();
    config.database.url_set = true;
    config.database.name_set = true;
    let state = AppState::from_config(&config).with_database_probe(Arc::new(HealthyDatabase));

    let (status, body) = get_json(&build_router(state), "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "✅ Set");
    assert_eq!(body["collections"], serde_json::json!(["torrents", "users"]));
}
