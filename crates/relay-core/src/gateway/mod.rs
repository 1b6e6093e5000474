//! Relay handlers.

mod model_family;
mod payload;
#[cfg(test)]
mod payload_tests;

pub use model_family::ModelFamily;
pub use payload::{inject_persona, resolve_model, resolve_payload, DEFAULT_MODEL};

use crate::error::ApiError;
use crate::persona::PersonaRegistry;
use crate::upstream::UpstreamClient;
use crate::usage::{estimate_tokens, UsageTracker};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use relay_types::GatewayError;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared state for the relay routes.
#[derive(Clone)]
pub struct GatewayState {
    pub upstream: Arc<UpstreamClient>,
    pub personas: Arc<PersonaRegistry>,
    pub usage: Arc<UsageTracker>,
}

/// Router for the forwarding path. The server merges this with its
/// management routes.
pub fn build_gateway_router(state: GatewayState) -> Router {
    Router::new().route("/call-ai", post(handle_call_ai)).with_state(state)
}

/// `POST /call-ai`: shape the payload, forward it with the server-held key,
/// and mirror the upstream response verbatim.
pub async fn handle_call_ai(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) =
        body.map_err(|e| GatewayError::BadRequest { detail: e.body_text() })?;

    let model = resolve_model(&body);
    let family = ModelFamily::from_model(&model);
    let mut payload = resolve_payload(&body);
    family.adapt(&mut payload);

    let origin = headers.get(header::ORIGIN).and_then(|v| v.to_str().ok());
    if let Some(persona) = state.personas.resolve(origin) {
        inject_persona(&mut payload, persona);
    }

    info!("[Relay] Request: {} (family: {})", model, family.name());

    let response = state.upstream.generate_content(&model, &payload).await.map_err(|e| {
        warn!("[Relay] Upstream call failed: {}", e);
        GatewayError::UpstreamFailed { detail: e.to_string() }
    })?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| GatewayError::UpstreamFailed { detail: e.to_string() })?;

    info!("[Relay] Upstream status: {}", status);

    if status.is_success() {
        let tokens = estimate_tokens(&payload);
        state.usage.record(family.name(), tokens).await?;
    }

    // Mirror status and body unchanged; the body is not re-parsed.
    Ok((status, [(header::CONTENT_TYPE, "application/json")], text).into_response())
}
