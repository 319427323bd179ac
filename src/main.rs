//! OctoFit Dashboard Server
//!
//! Run with: cargo run --bin octofit
//!
//! # Configuration
//!
//! Read from `--config`, or else `~/.config/octofit/config.toml` or
//! `./octofit.toml`. Environment variables override the file:
//! - `CODESPACE_NAME` / `OCTOFIT_CODESPACE_NAME`: Backend deployment identifier
//! - `OCTOFIT_API_BASE_URL`: Backend base URL, bypassing the host template
//! - `OCTOFIT_HOST` / `OCTOFIT_PORT`: Bind address (default: 0.0.0.0:3000)
//! - `OCTOFIT_LOG_LEVEL` / `OCTOFIT_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full filter directives, replacing the level

use anyhow::Context;
use clap::Parser;
use octofit::{logging, serve, AppState, Config, HttpSource};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "octofit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "OctoFit Tracker dashboard server")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(port) = args.port {
        config.server.port = port;
    }

    logging::init(&config.logging).context("Failed to initialize logging")?;

    tracing::info!("Starting OctoFit dashboard v{}", env!("CARGO_PKG_VERSION"));

    if config.backend.base_url.is_none() && config.backend.codespace_name.is_none() {
        tracing::warn!("No codespace name configured, set CODESPACE_NAME or OCTOFIT_API_BASE_URL");
    }

    let source = HttpSource::new(&config.backend).context("Failed to build HTTP client")?;
    let server = config.server.clone();
    let state = AppState::new(config, Arc::new(source));

    serve(state, &server).await?;

    tracing::info!("OctoFit dashboard stopped");
    Ok(())
}
