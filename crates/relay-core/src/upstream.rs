//! Upstream generative-language API client.

use reqwest::Client;
use serde_json::Value;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Resolve the upstream base URL: explicit config wins, then the
/// `RELAY_UPSTREAM_URL` environment variable, then the production default.
/// Invalid overrides are rejected with a warning rather than an error.
fn resolve_base_url(explicit: Option<String>) -> String {
    let candidate = explicit.or_else(|| std::env::var("RELAY_UPSTREAM_URL").ok());
    match candidate {
        Some(raw) => {
            let trimmed = raw.trim().trim_end_matches('/').to_string();
            if trimmed.is_empty() {
                tracing::warn!("Upstream URL override is empty, using default");
                return DEFAULT_BASE_URL.to_string();
            }
            if url::Url::parse(&trimmed).is_err() {
                tracing::warn!("Upstream URL override is not a valid URL, using default");
                return DEFAULT_BASE_URL.to_string();
            }
            tracing::info!("Using custom upstream URL");
            trimmed
        }
        None => DEFAULT_BASE_URL.to_string(),
    }
}

/// HTTP client for the `models/{model}:generateContent` endpoint.
///
/// Accepts a pre-built `reqwest::Client` so the caller controls timeouts and
/// TLS setup, and so tests can point it at a mock server.
pub struct UpstreamClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl UpstreamClient {
    pub fn new(http_client: Client, api_key: String, base_url: Option<String>) -> Self {
        Self { http_client, base_url: resolve_base_url(base_url), api_key }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the payload to `{base}/models/{model}:generateContent` with the
    /// server-held key. Returns the raw response; the caller decides how to
    /// mirror it. The key travels as a query parameter, matching the public
    /// API contract.
    pub async fn generate_content(
        &self,
        model: &str,
        payload: &Value,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        self.http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(payload)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_url_wins() {
        let client =
            UpstreamClient::new(Client::new(), "k".to_string(), Some("http://localhost:9095/".to_string()));
        assert_eq!(client.base_url(), "http://localhost:9095");
    }

    #[test]
    fn test_invalid_override_falls_back_to_default() {
        let client =
            UpstreamClient::new(Client::new(), "k".to_string(), Some("not a url".to_string()));
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }
}
