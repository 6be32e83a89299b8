use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;

/// Badge attendance HTTP server.
#[derive(Debug, Parser)]
#[command(name = "attendance-engine", version, about)]
struct Cli {
    /// Directory containing engine.yaml
    #[arg(long, default_value = "./config/default")]
    config: PathBuf,

    /// Override the port from the configuration file
    #[arg(long)]
    port: Option<u16>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    let mut server = config.server().clone();
    if let Some(port) = cli.port {
        server.port = port;
    }
    let address = server.bind_address();

    let router = create_router(AppState::in_memory(&config));
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {}", address))?;

    info!(address = %address, "Attendance engine listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    Ok(())
}
