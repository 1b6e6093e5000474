//! Test helpers for relay-server unit tests.

use std::collections::HashMap;

use tempfile::TempDir;

use relay_types::RelayConfig;

use crate::state::AppState;

/// Create a minimal `AppState` for testing.
///
/// Returns `(AppState, TempDir)` — keep `TempDir` alive for the test duration.
pub fn test_app_state() -> (AppState, TempDir) {
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    let config = RelayConfig {
        api_key: "test-key".to_string(),
        accounts: HashMap::from([("a".to_string(), "correct".to_string())]),
        usage_file: temp_dir.path().join("usage.json"),
        upstream_url: Some("http://127.0.0.1:9".to_string()),
        ..RelayConfig::default()
    };

    let state = AppState::new(config, reqwest::Client::new());
    (state, temp_dir)
}
