//! Relay configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Relay server configuration.
///
/// Populated from the process environment at startup (see the loader in
/// `relay-server`). Everything except `api_key` has a working default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// TCP port to listen on.
    pub port: u16,

    /// Server-held credential injected into every upstream call.
    pub api_key: String,

    /// Static user → password map for /login.
    #[serde(default)]
    pub accounts: HashMap<String, String>,

    /// CORS origin allow-list.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Origin → persona text, consulted per request on /call-ai.
    #[serde(default)]
    pub personas: HashMap<String, String>,

    /// Override for the upstream base URL (tests, regional endpoints).
    #[serde(default)]
    pub upstream_url: Option<String>,

    /// Path of the persisted usage counter file.
    #[serde(default = "default_usage_file")]
    pub usage_file: PathBuf,

    /// Upstream request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub request_timeout: u64,
}

fn default_allowed_origins() -> Vec<String> {
    vec!["https://llmforall.netlify.app".to_string()]
}

fn default_usage_file() -> PathBuf {
    PathBuf::from("usage.json")
}

fn default_timeout() -> u64 {
    120
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            api_key: String::new(),
            accounts: HashMap::new(),
            allowed_origins: default_allowed_origins(),
            personas: HashMap::new(),
            upstream_url: None,
            usage_file: default_usage_file(),
            request_timeout: default_timeout(),
        }
    }
}
