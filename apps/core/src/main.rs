// Chattomo Mini Backend Entry Point
// "The Brain" - lexicon-based mood analysis behind a small HTTP API

mod brain;
mod config;
mod error;
mod log_store;
mod models;
mod server;

#[cfg(test)]
mod tests;

use anyhow::Context;
use config::AppConfig;
use log_store::CsvAnalysisLog;
use server::AppState;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "chattomo_core=info,tower_http=info";

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let dotenv_result = dotenv::dotenv();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    init_tracing(config.log_json);

    if let Ok(path) = dotenv_result {
        info!("Loaded environment from {:?}", path);
    }

    let addr = config.socket_addr()?;
    let log = Arc::new(CsvAnalysisLog::new(config.log_path()));
    info!("Analysis log at: {:?}", log.path());
    let state = Arc::new(AppState::new(log, config.default_user_id.clone()));
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Chattomo Mini listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}
