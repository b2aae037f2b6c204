//! CLI command implementations

use clap::Subcommand;
use streamer_core::{StreamerConfig, StreamerError};
use streamer_search::{ProviderRegistry, SearchItem, SearchService};
use tracing::info;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the JSON API server
    Server {
        /// Host to bind to (overrides STREAMER_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run a search against the built-in providers and print the results
    Search {
        /// Search text; omit to list everything
        #[arg(default_value = "")]
        query: String,
        /// Comma-separated provider keys, e.g. "demo,linux"
        #[arg(short, long)]
        sources: Option<String>,
    },
}

/// Handle the CLI command
///
/// # Errors
/// - `StreamerError::Configuration` - Environment configuration is invalid
/// - `StreamerError::Io` - Server could not bind or failed while running
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let config = StreamerConfig::from_env()?;

    match command {
        Commands::Server { host, port } => start_server(config, host, port).await,
        Commands::Search { query, sources } => run_search(config, query, sources).await,
    }
}

/// Start the web server, applying flag overrides on top of the environment.
///
/// # Errors
/// - `StreamerError::Io` - Server could not bind or failed while running
pub async fn start_server(
    config: StreamerConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let config = apply_overrides(config, host, port);

    info!(
        default_sources = %config.search.default_sources.join(","),
        "Starting Torrent Streamer on {}",
        config.server.bind_address()
    );
    streamer_web::run_server(config).await?;
    Ok(())
}

/// Run one aggregated search and print the results.
pub async fn run_search(
    config: StreamerConfig,
    query: String,
    sources: Option<String>,
) -> anyhow::Result<()> {
    let results = search(config, &query, sources.as_deref()).await;
    print!("{}", render_results(&query, &results));
    Ok(())
}

/// Replaces host and port with the values given on the command line.
fn apply_overrides(
    mut config: StreamerConfig,
    host: Option<String>,
    port: Option<u16>,
) -> StreamerConfig {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config
}

async fn search(config: StreamerConfig, query: &str, sources: Option<&str>) -> Vec<SearchItem> {
    let service = SearchService::with_registry(
        ProviderRegistry::with_defaults(),
        config.search.default_sources,
    );
    service.search(query, sources).await
}

fn render_results(query: &str, results: &[SearchItem]) -> String {
    let mut output = format!("Found {} result(s) for '{query}':\n", results.len());
    for item in results {
        output.push_str(&format_item(item));
        output.push('\n');
    }
    output
}

/// Message shown to the user when a command fails on bad input.
///
/// Returns `None` for failures that are not caused by user input.
pub fn user_error_message(error: &anyhow::Error) -> Option<String> {
    error
        .downcast_ref::<StreamerError>()
        .filter(|e| e.is_user_error())
        .map(StreamerError::user_message)
}

fn format_item(item: &SearchItem) -> String {
    format!(
        "  {} [{}] seeds={} peers={} source={}\n    {}",
        item.title,
        item.size.as_deref().unwrap_or("?"),
        item.seeds.unwrap_or(0),
        item.peers.unwrap_or(0),
        item.source.as_deref().unwrap_or("unknown"),
        item.magnet
    )
}
