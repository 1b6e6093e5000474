//! Application State
//!
//! Holds the shared state for the server: the gateway components plus the
//! static account map for /login.

use std::collections::HashMap;
use std::sync::Arc;

use relay_core::{GatewayState, PersonaRegistry, UpstreamClient, UsageTracker};
use relay_types::RelayConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub config: RelayConfig,
    pub gateway: GatewayState,
}

impl AppState {
    pub fn new(config: RelayConfig, http_client: reqwest::Client) -> Self {
        let upstream = Arc::new(UpstreamClient::new(
            http_client,
            config.api_key.clone(),
            config.upstream_url.clone(),
        ));
        let personas = Arc::new(PersonaRegistry::new(config.personas.clone()));
        let usage = Arc::new(UsageTracker::load(config.usage_file.clone()));

        let gateway = GatewayState { upstream, personas, usage };
        Self { inner: Arc::new(AppStateInner { config, gateway }) }
    }

    pub fn gateway_state(&self) -> GatewayState {
        self.inner.gateway.clone()
    }

    pub fn accounts(&self) -> &HashMap<String, String> {
        &self.inner.config.accounts
    }

    pub fn usage(&self) -> &UsageTracker {
        &self.inner.gateway.usage
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.inner.config.allowed_origins
    }
}
