//! LLM Relay - Headless Daemon
//!
//! A small HTTP gateway that:
//! - Forwards /call-ai requests to the generative-language API with a
//!   server-held key
//! - Injects persona text per configured origin
//! - Keeps per-model-family usage counters on disk
//!
//! All configuration comes from the process environment; see config.rs.

use anyhow::Result;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod router;
mod state;
#[cfg(test)]
mod test_helpers;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::load_config()?;

    info!("🚀 LLM relay starting on port {}...", config.port);
    if !config.personas.is_empty() {
        info!("📝 {} persona(s) configured", config.personas.len());
    }

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout))
        .build()?;

    let port = config.port;
    let state = AppState::new(config, http_client);
    let app = router::build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("✅ Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
