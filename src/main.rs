//! elk-probe: a log pipeline diagnostic endpoint.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file, initializes tracing, wires the tracing-backed diagnostic sink into the
//! router, and starts the HTTP server.

use std::sync::Arc;

use clap::Parser;

use elk_probe::config::{AppConfig, DEFAULT_CONFIG_PATH, ELK_PATH};
use elk_probe::diagnostics::TracingSink;
use elk_probe::http::start_server;
use elk_probe::routes::create_router;
use elk_probe::state::AppState;
use elk_probe::telemetry::{init_tracing, resolve_filter};
use elk_probe::Error;

/// elk-probe: emits one log record per severity on every request
#[derive(Parser, Debug)]
#[command(name = "elk-probe", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "elk_probe=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();

    // Config comes first since it carries the log format
    let config = AppConfig::load(&args.config)?;

    let log_filter = resolve_filter(
        args.log_level,
        std::env::var("RUST_LOG").ok(),
        &config.logging,
    );
    init_tracing(&log_filter, config.logging.format)?;

    tracing::info!(
        config = %args.config,
        format = ?config.logging.format,
        "Loaded configuration"
    );

    let state = AppState::new(Arc::new(TracingSink));
    let app = create_router(state);
    tracing::info!(path = ELK_PATH, "Diagnostic endpoint registered");

    start_server(app, &config.http).await?;

    Ok(())
}
