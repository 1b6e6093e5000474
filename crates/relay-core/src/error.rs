//! HTTP rendering for gateway errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_types::GatewayError;
use serde_json::json;

/// Axum-facing wrapper around [`GatewayError`].
///
/// Renders as `{"error": <headline>, "detail": <detail>}` with the status
/// code the taxonomy assigns. Handlers return `Result<_, ApiError>` and
/// propagate with `?`.
#[derive(Debug)]
pub struct ApiError(pub GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut body = json!({ "error": self.0.headline() });
        if let Some(detail) = self.0.detail() {
            body["detail"] = json!(detail);
        }
        (status, Json(body)).into_response()
    }
}
