//! Usage accounting.
//!
//! Tracks per-model-family request and token counters in memory and mirrors
//! them to a flat JSON file. All mutation happens under a single write lock,
//! so concurrent requests cannot lose increments; the file is rewritten under
//! that same lock.

use relay_types::{GatewayError, UsageRecord};
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Rough chars-per-token ratio used to estimate token spend from text length.
const ESTIMATED_CHARS_PER_TOKEN: u64 = 4;

pub struct UsageTracker {
    record: RwLock<UsageRecord>,
    path: Option<PathBuf>,
}

impl UsageTracker {
    /// Tracker without file persistence.
    pub fn in_memory() -> Self {
        Self { record: RwLock::new(UsageRecord::default()), path: None }
    }

    /// Load counters from `path`, starting from zero when the file is absent.
    /// A corrupt file is logged and replaced rather than taking the service
    /// down with it.
    pub fn load(path: PathBuf) -> Self {
        let record = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!("Usage file {} is corrupt ({}), starting fresh", path.display(), e);
                    UsageRecord::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => UsageRecord::default(),
            Err(e) => {
                tracing::warn!("Could not read usage file {} ({}), starting fresh", path.display(), e);
                UsageRecord::default()
            }
        };
        Self { record: RwLock::new(record), path: Some(path) }
    }

    /// Increment `family` by one request and `tokens` tokens, then persist.
    pub async fn record(&self, family: &str, tokens: u64) -> Result<(), GatewayError> {
        let mut record = self.record.write().await;
        record.bump(family, tokens);

        if let Some(path) = &self.path {
            let json = serde_json::to_string_pretty(&*record)
                .map_err(|e| GatewayError::Usage { detail: e.to_string() })?;
            tokio::fs::write(path, json)
                .await
                .map_err(|e| GatewayError::Usage { detail: e.to_string() })?;
        }
        Ok(())
    }

    /// Current counters, cloned.
    pub async fn snapshot(&self) -> UsageRecord {
        self.record.read().await.clone()
    }
}

/// Estimate token spend for a payload: summed text length of every part,
/// divided by the chars-per-token constant.
pub fn estimate_tokens(payload: &serde_json::Value) -> u64 {
    let mut chars: u64 = 0;
    if let Some(contents) = payload.get("contents").and_then(|c| c.as_array()) {
        for turn in contents {
            if let Some(parts) = turn.get("parts").and_then(|p| p.as_array()) {
                for part in parts {
                    if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                        chars = chars.saturating_add(text.len() as u64);
                    }
                }
            }
        }
    }
    chars / ESTIMATED_CHARS_PER_TOKEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use relay_types::FamilyUsage;
    use serde_json::json;

    #[tokio::test]
    async fn test_record_and_snapshot() {
        let tracker = UsageTracker::in_memory();
        tracker.record("gemma", 10).await.unwrap();
        tracker.record("gemma", 5).await.unwrap();

        let snapshot = tracker.snapshot().await;
        assert_eq!(snapshot.get("gemma"), Some(&FamilyUsage { requests: 2, tokens: 15 }));
    }

    #[tokio::test]
    async fn test_counters_survive_reload() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("usage.json");

        let tracker = UsageTracker::load(path.clone());
        tracker.record("gemini", 42).await.unwrap();
        drop(tracker);

        let reloaded = UsageTracker::load(path);
        let snapshot = reloaded.snapshot().await;
        assert_eq!(snapshot.get("gemini"), Some(&FamilyUsage { requests: 1, tokens: 42 }));
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_fresh() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("usage.json");
        std::fs::write(&path, "{not json").unwrap();

        let tracker = UsageTracker::load(path);
        assert!(tracker.snapshot().await.families.is_empty());
    }

    #[test]
    fn test_estimate_tokens_sums_all_parts() {
        let payload = json!({
            "contents": [
                {"role": "user", "parts": [{"text": "abcd"}, {"text": "efgh"}]},
                {"role": "model", "parts": [{"text": "ijkl"}]}
            ]
        });
        // 12 chars / 4 chars-per-token
        assert_eq!(estimate_tokens(&payload), 3);
    }

    #[test]
    fn test_estimate_tokens_empty_payload() {
        assert_eq!(estimate_tokens(&json!({})), 0);
        assert_eq!(estimate_tokens(&json!({"contents": []})), 0);
    }
}
