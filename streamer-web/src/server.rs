//! JSON API server for Torrent Streamer
//!
//! Builds the axum router, owns the shared application state and runs the
//! listener until Ctrl-C.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use streamer_core::StreamerConfig;
use streamer_core::config::DatabaseConfig;
use streamer_search::{ProviderRegistry, SearchService};
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{Level, info};

use crate::diagnostics::DatabaseProbe;
use crate::handlers::{api_hello, api_search, diagnostics_status, root};

/// State shared by every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search aggregation over the registered providers
    pub search_service: SearchService,
    /// Optional database reachability check
    pub database_probe: Option<Arc<dyn DatabaseProbe>>,
    /// Database environment flags captured at startup
    pub database_env: DatabaseConfig,
}

impl AppState {
    /// Creates state for the built-in providers without a database probe.
    pub fn from_config(config: &StreamerConfig) -> Self {
        Self {
            search_service: SearchService::with_registry(
                ProviderRegistry::with_defaults(),
                config.search.default_sources.clone(),
            ),
            database_probe: None,
            database_env: config.database.clone(),
        }
    }

    /// Installs a database probe for the diagnostics endpoint.
    pub fn with_database_probe(mut self, probe: Arc<dyn DatabaseProbe>) -> Self {
        self.database_probe = Some(probe);
        self
    }
}

/// Builds the HTTP router with permissive CORS and request tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/hello", get(api_hello))
        .route("/api/search", get(api_search))
        .route("/test", get(diagnostics_status))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
///
/// # Errors
/// - `StreamerError::Io` - Address could not be bound or the server failed
pub async fn run_server(config: StreamerConfig) -> streamer_core::Result<()> {
    let state = AppState::from_config(&config);
    let providers: Vec<&str> = state.search_service.registry().keys().collect();
    info!(
        providers = %providers.join(","),
        default_sources = %state.search_service.default_sources().join(","),
        "Search providers registered"
    );
    let app = build_router(state);

    let bind_address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(
        "Torrent Streamer API listening on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Torrent Streamer API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
