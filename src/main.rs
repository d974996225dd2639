//! Ethereum Wallet Viewer - Main executable
//!
//! Serves a small web front end where a user enters an Ethereum address and
//! gets back the tokens held by that wallet, with spam tokens filtered out
//! and approximate USD values taken from the Ethplorer API.
use anyhow::Context;
use dotenv::dotenv;
use eth_wallet_viewer::{Router, ServiceContainer, Settings, WebRouter};
use log::info;
use std::sync::Arc;

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting Ethereum Wallet Viewer v{}", eth_wallet_viewer::VERSION);

    let settings = Settings::load()?;
    let ethplorer_config = settings.ethplorer_config();
    info!(
        "Using Ethplorer API at {} (timeout {:?})",
        ethplorer_config.base_url, ethplorer_config.timeout
    );

    let services = Arc::new(
        ServiceContainer::new(ethplorer_config).context("Failed to initialize services")?,
    );
    let app = WebRouter::new(services).setup_routes();

    let listener = tokio::net::TcpListener::bind(&settings.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", settings.bind_address))?;

    info!("Listening on http://{}", settings.bind_address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}
