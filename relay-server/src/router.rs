use axum::{
    extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse, routing::get,
    routing::post, Router,
};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::state::AppState;
use relay_core::middleware::cors::{cors_layer, preflight_no_content};

// Conversation payloads can carry base64-encoded documents in their parts
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let gateway_router = relay_core::build_gateway_router(state.gateway_state());
    let cors = cors_layer(state.allowed_origins());

    Router::new()
        .route("/", get(root_status))
        .route("/healthz", get(health_check))
        .route("/version", get(version_info))
        .route("/login", post(api::login::handle_login))
        .route("/stats", get(api::stats::get_usage_stats))
        .with_state(state)
        .merge(gateway_router)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum::middleware::from_fn(preflight_no_content))
}

/// Plain status line for uptime probes and the hosting platform.
async fn root_status() -> impl IntoResponse {
    (StatusCode::OK, "✅ LLM relay backend running")
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(serde_json::json!({"status": "ok"})))
}

async fn version_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
