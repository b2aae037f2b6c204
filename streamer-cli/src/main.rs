//! Torrent Streamer CLI
//!
//! Runs the JSON API server or a one-off search from the terminal.

mod commands;

use std::path::PathBuf;

use clap::Parser;
use streamer_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "torrent-streamer")]
#[command(about = "Sample torrent search backend")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,

    /// Console log level (RUST_LOG overrides)
    #[arg(long, value_enum, default_value_t = CliLogLevel::Info, global = true)]
    log_level: CliLogLevel,

    /// Directory for the full debug log of this run
    #[arg(long, default_value = "logs", global = true)]
    logs_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), Some(cli.logs_dir.as_path()))?;
    if let Err(e) = commands::handle_command(cli.command).await {
        if let Some(message) = commands::user_error_message(&e) {
            tracing::error!("{e}");
            eprintln!("{message}");
            std::process::exit(2);
        }
        return Err(e);
    }

    Ok(())
}
