//! Guestbook mock data source
//!
//! Run with: cargo run --bin guestbook-mock
//!
//! # Configuration
//!
//! Environment variables:
//! - `GUESTBOOK_HOST`: Host to bind to (default: 0.0.0.0)
//! - `GUESTBOOK_PORT`: Port to listen on (default: 9191)
//! - `GUESTBOOK_DATA_FILE`: JSON array to serve (default: built-in sample)
//! - `RUST_LOG`: Log filter (default: from `GUESTBOOK_LOG_LEVEL`, info)

use anyhow::Context;
use clap::Parser;
use guestbook::api::{load_visitors, serve, AppState};
use guestbook::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "guestbook-mock")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve a static visitor collection over HTTP")]
struct Args {
    /// Config file (default: standard locations, then environment)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// JSON file to serve (overrides config)
    #[arg(short, long)]
    data_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(path) = args.data_file {
        config.server.data_file = Some(path.to_string_lossy().to_string());
    }

    guestbook::logging::init(&config.logging);

    tracing::info!("Starting guestbook mock server v{}", env!("CARGO_PKG_VERSION"));

    let visitors = load_visitors(&config.server).context("loading mock visitors")?;
    tracing::info!("Serving {} visitor records", visitors.len());

    let state = AppState::new(visitors);
    serve(state, &config.server).await?;

    tracing::info!("Guestbook mock server stopped");
    Ok(())
}
