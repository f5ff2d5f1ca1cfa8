mod config;
mod error;
mod render;
mod server;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use portfolio_common::contact::{ContactClient, ContactClientConfig};

use config::Config;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting portfolio site");

    let config = Config::from_env()?;

    let contact_config = ContactClientConfig::from_env();
    match contact_config.endpoint() {
        Ok(endpoint) => info!(
            endpoint,
            timeout_ms = contact_config.timeout.as_millis(),
            "contact backend configured"
        ),
        Err(e) => warn!(error = %e, "contact form will fail until BACKEND_URL is set"),
    }
    let contact = Arc::new(ContactClient::new(contact_config)?);

    let shutdown = CancellationToken::new();
    let state = AppState::new(contact, shutdown.clone(), config.assets_dir.clone());
    if let Some(dir) = &config.assets_dir {
        info!(dir = %dir.display(), "serving static assets");
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .inspect_err(|e| tracing::error!(error = %e, addr = %config.bind_addr, "bind failed"))?;
    info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, server::router(state))
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "failed to listen for shutdown signal");
            }
            info!("shutdown requested");
            shutdown.cancel();
        })
        .await?;

    info!("portfolio site shut down");
    Ok(())
}
