//! Radar API server

use anyhow::Context;
use clap::Parser;

use radar_api::{router, ServerConfig};
use radar_core::logging_facility;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine; flags and the process environment still apply.
    dotenvy::dotenv().ok();

    let config = ServerConfig::parse();
    logging_facility::init(config.log_format.profile());

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(%addr, "radar-api listening");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("radar-api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
    }
}
