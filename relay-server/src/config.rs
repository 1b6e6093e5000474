//! Environment configuration.
//!
//! Everything is read once at startup. JSON-encoded variables that fail to
//! parse are logged and fall back to their defaults rather than aborting;
//! only a missing API key is fatal.

use anyhow::{bail, Result};
use relay_types::RelayConfig;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

fn env_json_map(name: &str) -> HashMap<String, String> {
    match std::env::var(name) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                warn!("{} is not a valid JSON object ({}), ignoring", name, e);
                HashMap::new()
            }
        },
        Err(_) => HashMap::new(),
    }
}

pub fn load_config() -> Result<RelayConfig> {
    let mut config = RelayConfig::default();

    config.port = std::env::var("RELAY_PORT")
        .or_else(|_| std::env::var("PORT"))
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(config.port);

    config.api_key = match std::env::var("GEMINI_API_KEY").or_else(|_| std::env::var("API_KEY")) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => bail!("GEMINI_API_KEY (or API_KEY) must be set"),
    };

    config.accounts = env_json_map("ACCOUNTS");
    config.personas = env_json_map("RELAY_PERSONAS");

    if let Ok(raw) = std::env::var("RELAY_ALLOWED_ORIGINS") {
        let origins: Vec<String> =
            raw.split(',').map(|o| o.trim().to_string()).filter(|o| !o.is_empty()).collect();
        if origins.is_empty() {
            warn!("RELAY_ALLOWED_ORIGINS is empty, keeping default allow-list");
        } else {
            config.allowed_origins = origins;
        }
    }

    if let Ok(url) = std::env::var("RELAY_UPSTREAM_URL") {
        if !url.trim().is_empty() {
            config.upstream_url = Some(url);
        }
    }

    if let Ok(path) = std::env::var("RELAY_USAGE_FILE") {
        if !path.trim().is_empty() {
            config.usage_file = PathBuf::from(path);
        }
    }

    config.request_timeout = std::env::var("RELAY_REQUEST_TIMEOUT")
        .ok()
        .and_then(|t| t.parse().ok())
        .unwrap_or(config.request_timeout);

    Ok(config)
}
