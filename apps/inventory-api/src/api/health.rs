//! Readiness endpoint

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::AppError;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct ReadinessResponse {
    status: String,
    items: usize,
}

/// Create a readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - the store answers and reports its size
async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, AppError> {
    let items = state
        .items
        .count_items()
        .await
        .map_err(|e| AppError::ServiceUnavailable(format!("Item store unavailable: {}", e)))?;

    Ok(Json(ReadinessResponse {
        status: "ready".to_string(),
        items,
    }))
}
