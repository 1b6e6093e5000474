//! Static credential check.
//!
//! No sessions, no hashing: credentials come from the ACCOUNTS environment
//! map and are compared in constant time. The relay path does not consume
//! this; it exists for the frontend's own gatekeeping.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::state::AppState;
use relay_core::ApiError;
use relay_types::GatewayError;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub user: String,
    pub pass: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub user: String,
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

pub async fn handle_login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = body.map_err(|e| GatewayError::BadRequest { detail: e.body_text() })?;

    let authorized = state
        .accounts()
        .get(&req.user)
        .is_some_and(|expected| constant_time_compare(expected, &req.pass));

    if !authorized {
        tracing::warn!("[Login] Rejected credentials for user {}", req.user);
        return Err(GatewayError::Unauthorized.into());
    }

    Ok(Json(LoginResponse { ok: true, user: req.user }).into_response())
}
