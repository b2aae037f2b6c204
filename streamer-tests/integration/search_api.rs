//! `GET /api/search` contract tests

use std::sync::Arc;

use axum::http::StatusCode;
use proptest::prelude::*;
use streamer_core::StreamerConfig;
use streamer_search::providers::{FailingProvider, MockProvider};
use streamer_search::{DemoProvider, LinuxProvider, ProviderRegistry, SearchItem, SearchService};
use streamer_web::{AppState, build_router};

use crate::helpers::{get_json, sources, test_router, titles};

fn demo_titles() -> Vec<String> {
    DemoProvider::catalog().into_iter().map(|item| item.title).collect()
}

#[tokio::test]
async fn test_ubuntu_query_on_linux_source() {
    let router = test_router();

    let (status, body) = get_json(&router, "/api/search?q=ubuntu&sources=linux").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Ubuntu 22.04.4 LTS Desktop amd64"]);
    assert_eq!(body[0]["source"], "linux");
}

#[tokio::test]
async fn test_unmatched_demo_query_returns_all_demo_records() {
    let router = test_router();

    let (status, body) = get_json(&router, "/api/search?q=zzz&sources=demo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), demo_titles());
}

#[tokio::test]
async fn test_default_sources_cover_demo_and_linux() {
    let router = test_router();

    let (_, body) = get_json(&router, "/api/search").await;

    let sources = sources(&body);
    assert_eq!(
        sources.len(),
        DemoProvider::catalog().len() + LinuxProvider::catalog().len()
    );
    assert!(sources.iter().any(|s| s == "demo"));
    assert!(sources.iter().any(|s| s == "linux"));
}

#[tokio::test]
async fn test_item_shape() {
    let router = test_router();

    let (_, body) = get_json(&router, "/api/search?q=big%20buck&sources=demo").await;

    let item = &body[0];
    assert_eq!(item["title"], "Big Buck Bunny 720p (WebTorrent demo)");
    assert_eq!(item["size"], "700MB");
    assert_eq!(item["seeds"], 500);
    assert_eq!(item["peers"], 200);
    assert_eq!(item["source"], "demo");
    assert!(
        item["magnet"]
            .as_str()
            .unwrap()
            .starts_with("magnet:?xt=urn:btih:08ada5a7a6183aae1e09d831df6748d566095a10")
    );
}

#[tokio::test]
async fn test_invalid_sources_return_demo_set() {
    let router = test_router();

    for uri in [
        "/api/search?sources=",
        "/api/search?sources=nope",
        "/api/search?sources=%2C%2C",
        "/api/search?sources=DEMO",
    ] {
        let (status, body) = get_json(&router, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(titles(&body), demo_titles(), "{uri}");
    }
}

#[tokio::test]
async fn test_repeated_sources_key_uses_last_value() {
    let router = test_router();

    let (status, body) = get_json(&router, "/api/search?sources=demo&sources=linux").await;

    assert_eq!(status, StatusCode::OK);
    let expected: Vec<String> = LinuxProvider::catalog()
        .into_iter()
        .map(|item| item.title)
        .collect();
    assert_eq!(titles(&body), expected);
}

#[tokio::test]
async fn test_repeated_query_key_uses_last_value() {
    let router = test_router();

    let (status, body) = get_json(&router, "/api/search?q=zzz&q=sintel&sources=demo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Sintel 720p (WebTorrent demo)"]);
}

#[tokio::test]
async fn test_undecodable_query_values_still_answer() {
    let router = test_router();

    for uri in ["/api/search?sources=%FF", "/api/search?q=%FF&sources=demo"] {
        let (status, body) = get_json(&router, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(titles(&body), demo_titles(), "{uri}");
    }
}

#[tokio::test]
async fn test_encoded_source_list_keeps_selection_order() {
    let router = test_router();

    let (_, body) = get_json(&router, "/api/search?sources=linux%2C%20demo").await;

    let sources = sources(&body);
    assert_eq!(sources.first().map(String::as_str), Some("linux"));
    assert_eq!(sources.last().map(String::as_str), Some("demo"));
}

#[tokio::test]
async fn test_duplicates_and_failures_across_providers() {
    let mirror = MockProvider::new(vec![
        SearchItem::new(
            "Tears of Steel (mirror)",
            "magnet:?xt=urn:btih:4a5e1e4b5b816d05f4a8f2b5756fa0fe58f3dcb5&dn=mirror",
        )
        .with_source("mirror"),
        SearchItem::new("Unhashed upload", "magnet:?dn=unhashed").with_source("mirror"),
        SearchItem::new("Unhashed upload again", "magnet:?dn=unhashed").with_source("mirror"),
    ]);
    let registry = ProviderRegistry::with_defaults()
        .register("mirror", Arc::new(mirror))
        .register("broken", Arc::new(FailingProvider::new("broken", "index offline")));
    let state = AppState {
        search_service: SearchService::with_registry(registry, Vec::new()),
        ..AppState::from_config(&StreamerConfig::for_testing())
    };
    let router = build_router(state);

    let (status, body) = get_json(&router, "/api/search?sources=broken,demo,mirror").await;

    assert_eq!(status, StatusCode::OK);
    let mut expected = demo_titles();
    expected.push("Unhashed upload".to_string());
    assert_eq!(titles(&body), expected);
}

#[tokio::test]
async fn test_only_failing_sources_fall_back_to_demo() {
    let registry = ProviderRegistry::new()
        .register("broken", Arc::new(FailingProvider::new("broken", "index offline")));
    let state = AppState {
        search_service: SearchService::with_registry(registry, vec!["broken".to_string()]),
        ..AppState::from_config(&StreamerConfig::for_testing())
    };
    let router = build_router(state);

    let (_, body) = get_json(&router, "/api/search?q=tears").await;

    assert_eq!(titles(&body), vec!["Tears of Steel 720p (WebTorrent demo)"]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_unknown_sources_never_return_empty(key in "[a-z]{1,8}") {
        prop_assume!(key != "demo" && key != "linux");

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let body = runtime.block_on(async {
            let router = test_router();
            let (_, body) = get_json(&router, &format!("/api/search?sources={key}")).await;
            body
        });

        prop_assert_eq!(titles(&body), demo_titles());
    }
}
