//! Backend diagnostics report
//!
//! Database support is optional. When no probe is installed the report says
//! so instead of failing, and every probe error is folded into a short
//! status string.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use streamer_core::config::DatabaseConfig;
use thiserror::Error;
use tracing::warn;

/// Collections listed in the report at most.
pub const MAX_LISTED_COLLECTIONS: usize = 10;

/// Characters of an error message kept in status strings.
pub const ERROR_PREVIEW_CHARS: usize = 50;

/// Failures a database probe can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatabaseError {
    /// Connection could not be checked at all.
    #[error("Database unreachable: {reason}")]
    Unreachable {
        /// The reason the database is unreachable
        reason: String,
    },

    /// Connected, but a query failed.
    #[error("Database query failed: {reason}")]
    Query {
        /// The reason the query failed
        reason: String,
    },
}

/// Optional database reachability check used by the diagnostics endpoint.
#[async_trait]
pub trait DatabaseProbe: Send + Sync + std::fmt::Debug {
    /// Whether the database handle has been initialized.
    ///
    /// # Errors
    /// - `DatabaseError::Unreachable` - The check itself failed
    async fn is_initialized(&self) -> Result<bool, DatabaseError>;

    /// Names of the collections in the configured database.
    ///
    /// # Errors
    /// - `DatabaseError::Query` - Listing failed on an initialized handle
    async fn list_collection_names(&self) -> Result<Vec<String>, DatabaseError>;
}

/// JSON body of `GET /test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsReport {
    /// Backend liveness
    pub backend: String,
    /// Database availability summary
    pub database: String,
    /// Whether `DATABASE_URL` is set
    pub database_url: String,
    /// Whether `DATABASE_NAME` is set
    pub database_name: String,
    /// Connection state
    pub connection_status: String,
    /// Up to ten collection names when the database answered
    pub collections: Vec<String>,
}

fn env_flag(set: bool) -> String {
    let flag = if set { "✅ Set" } else { "❌ Not Set" };
    flag.to_string()
}

/// Shortens an error message to [`ERROR_PREVIEW_CHARS`] characters.
pub fn error_preview(error: &impl std::fmt::Display) -> String {
    error.to_string().chars().take(ERROR_PREVIEW_CHARS).collect()
}

/// Builds the diagnostics report. Never fails.
pub async fn collect_diagnostics(
    probe: Option<&dyn DatabaseProbe>,
    env: &DatabaseConfig,
) -> DiagnosticsReport {
    let mut report = DiagnosticsReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: env_flag(env.url_set),
        database_name: env_flag(env.name_set),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    let Some(probe) = probe else {
        report.database = "❌ Database module not found (run enable-database first)".to_string();
        return report;
    };

    match probe.is_initialized().await {
        Ok(true) => {
            report.database = "✅ Available".to_string();
            report.connection_status = "Connected".to_string();

            match probe.list_collection_names().await {
                Ok(mut collections) => {
                    collections.truncate(MAX_LISTED_COLLECTIONS);
                    report.collections = collections;
                    report.database = "✅ Connected & Working".to_string();
                }
                Err(e) => {
                    warn!(error = %e, "Database collection listing failed");
                    report.database = format!("⚠️  Connected but Error: {}", error_preview(&e));
                }
            }
        }
        Ok(false) => {
            report.database = "⚠️  Available but not initialized".to_string();
        }
        Err(e) => {
            warn!(error = %e, "Database probe failed");
            report.database = format!("❌ Error: {}", error_preview(&e));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubProbe {
        initialized: Result<bool, DatabaseError>,
        collections: Result<Vec<String>, DatabaseError>,
    }

    #[async_trait]
    impl DatabaseProbe for StubProbe {
        async fn is_initialized(&self) -> Result<bool, DatabaseError> {
            self.initialized.clone()
        }

        async fn list_collection_names(&self) -> Result<Vec<String>, DatabaseError> {
            self.collections.clone()
        }
    }

    fn env(url_set: bool, name_set: bool) -> DatabaseConfig {
        DatabaseConfig { url_set, name_set }
    }

    #[tokio::test]
    async fn test_missing_probe_reports_module_not_found() {
        let report = collect_diagnostics(None, &env(false, false)).await;

        assert_eq!(report.backend, "✅ Running");
        assert_eq!(
            report.database,
            "❌ Database module not found (run enable-database first)"
        );
        assert_eq!(report.connection_status, "Not Connected");
        assert_eq!(report.database_url, "❌ Not Set");
        assert_eq!(report.database_name, "❌ Not Set");
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn test_env_flags_are_reported() {
        let report = collect_diagnostics(None, &env(true, false)).await;

        assert_eq!(report.database_url, "✅ Set");
        assert_eq!(report.database_name, "❌ Not Set");
    }

    #[tokio::test]
    async fn test_working_database_lists_first_ten_collections() {
        let probe = StubProbe {
            initialized: Ok(true),
            collections: Ok((0..15).map(|i| format!("collection_{i}")).collect()),
        };

        let report = collect_diagnostics(Some(&probe), &env(true, true)).await;

        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.collections.len(), MAX_LISTED_COLLECTIONS);
        assert_eq!(report.collections[0], "collection_0");
        assert_eq!(report.database_name, "✅ Set");
    }

    #[tokio::test]
    async fn test_listing_error_is_truncated() {
        let probe = StubProbe {
            initialized: Ok(true),
            collections: Err(DatabaseError::Query {
                reason: "x".repeat(200),
            }),
        };

        let report = collect_diagnostics(Some(&probe), &env(false, false)).await;

        let detail = report
            .database
            .strip_prefix("⚠️  Connected but Error: ")
            .unwrap();
        assert_eq!(detail.chars().count(), ERROR_PREVIEW_CHARS);
        assert!(detail.starts_with("Database query failed: xxx"));
        assert_eq!(report.connection_status, "Connected");
        assert!(report.collections.is_empty());
    }

    #[tokio::test]
    async fn test_uninitialized_probe() {
        let probe = StubProbe {
            initialized: Ok(false),
            collections: Ok(Vec::new()),
        };

        let report = collect_diagnostics(Some(&probe), &env(false, false)).await;

        assert_eq!(report.database, "⚠️  Available but not initialized");
        assert_eq!(report.connection_status, "Not Connected");
    }

    #[tokio::test]
    async fn test_probe_error() {
        let probe = StubProbe {
            initialized: Err(DatabaseError::Unreachable {
                reason: "connection refused".to_string(),
            }),
            collections: Ok(Vec::new()),
        };

        let report = collect_diagnostics(Some(&probe), &env(false, false)).await;

        assert_eq!(
            report.database,
            "❌ Error: Database unreachable: connection refused"
        );
    }

    #[test]
    fn test_error_preview_counts_characters() {
        let message = "é".repeat(80);
        assert_eq!(error_preview(&message).chars().count(), ERROR_PREVIEW_CHARS);
        assert_eq!(error_preview(&"short"), "short");
    }
}
