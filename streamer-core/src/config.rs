//! Centralized configuration for Torrent Streamer.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use crate::{Result, StreamerError};

/// Provider keys queried when a search request names no sources.
pub const DEFAULT_SOURCES: [&str; 2] = ["demo", "linux"];

/// Central configuration for all Torrent Streamer components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamerConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub search: SearchConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind to
    pub host: String,
    /// Listen port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` string handed to the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database environment flags.
///
/// Only presence is recorded; no connection is ever opened from these values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Whether `DATABASE_URL` was set to a non-empty value
    pub url_set: bool,
    /// Whether `DATABASE_NAME` was set to a non-empty value
    pub name_set: bool,
}

/// Search aggregation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Provider keys used when the request does not name any
    pub default_sources: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Splits a comma-separated source list, dropping blank entries.
pub fn parse_source_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}

impl StreamerConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// # Errors
    /// - `StreamerError::Configuration` - `PORT` is set but not a valid port number
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup.
    ///
    /// Recognized variables: `STREAMER_HOST`, `PORT`, `DATABASE_URL`, `DATABASE_NAME`
    /// and `STREAMER_DEFAULT_SOURCES`.
    ///
    /// # Errors
    /// - `StreamerError::Configuration` - `PORT` is set but not a valid port number
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("STREAMER_HOST").filter(|h| !h.trim().is_empty()) {
            config.server.host = host.trim().to_string();
        }

        if let Some(port) = lookup("PORT") {
            config.server.port = port.trim().parse::<u16>().map_err(|e| {
                StreamerError::Configuration {
                    reason: format!("PORT must be a valid port number, got '{port}': {e}"),
                }
            })?;
        }

        config.database.url_set = lookup("DATABASE_URL").is_some_and(|v| !v.is_empty());
        config.database.name_set = lookup("DATABASE_NAME").is_some_and(|v| !v.is_empty());

        if let Some(sources) = lookup("STREAMER_DEFAULT_SOURCES") {
            let parsed = parse_source_list(&sources);
            if !parsed.is_empty() {
                config.search.default_sources = parsed;
            }
        }

        Ok(config)
    }

    /// Creates a configuration suitable for tests: loopback host, ephemeral port.
    pub fn for_testing() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_values() {
        let config = StreamerConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert!(!config.database.url_set);
        assert!(!config.database.name_set);
        assert_eq!(config.search.default_sources, vec!["demo", "linux"]);
    }

    #[test]
    fn test_env_override() {
        let config = StreamerConfig::from_lookup(lookup_from(&[
            ("PORT", "9090"),
            ("STREAMER_HOST", "127.0.0.1"),
            ("DATABASE_URL", "mongodb://localhost:27017"),
            ("DATABASE_NAME", "streamer"),
            ("STREAMER_DEFAULT_SOURCES", "linux, demo"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.bind_address(), "127.0.0.1:9090");
        assert!(config.database.url_set);
        assert!(config.database.name_set);
        assert_eq!(config.search.default_sources, vec!["linux", "demo"]);
    }

    #[test]
    fn test_shell_host_variable_is_ignored() {
        let config = StreamerConfig::from_lookup(lookup_from(&[("HOST", "my-laptop")])).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = StreamerConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));

        assert!(matches!(result, Err(StreamerError::Configuration { .. })));
    }

    #[test]
    fn test_empty_database_vars_count_as_unset() {
        let config = StreamerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", ""),
            ("DATABASE_NAME", ""),
        ]))
        .unwrap();

        assert!(!config.database.url_set);
        assert!(!config.database.name_set);
    }

    #[test]
    fn test_blank_default_sources_keep_builtin_selection() {
        let config =
            StreamerConfig::from_lookup(lookup_from(&[("STREAMER_DEFAULT_SOURCES", " , ,")]))
                .unwrap();

        assert_eq!(config.search.default_sources, vec!["demo", "linux"]);
    }

    #[test]
    fn test_parse_source_list() {
        assert_eq!(parse_source_list("demo,linux"), vec!["demo", "linux"]);
        assert_eq!(parse_source_list(" demo ,, linux "), vec!["demo", "linux"]);
        assert!(parse_source_list("").is_empty());
    }

    #[test]
    fn test_testing_preset() {
        let config = StreamerConfig::for_testing();
        assert_eq!(config.server.bind_address(), "127.0.0.1:0");
    }
}
