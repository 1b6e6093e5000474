//! Usage statistics handler.

use axum::{extract::State, response::Json};
use relay_types::UsageRecord;

use crate::state::AppState;

pub async fn get_usage_stats(State(state): State<AppState>) -> Json<UsageRecord> {
    Json(state.usage().snapshot().await)
}
