//! Diagnostics handler

use axum::extract::State;
use axum::response::Json;

use crate::diagnostics::{DiagnosticsReport, collect_diagnostics};
use crate::server::AppState;

/// `GET /test` backend and database status report.
pub async fn diagnostics_status(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let report = collect_diagnostics(state.database_probe.as_deref(), &state.database_env).await;
    Json(report)
}
