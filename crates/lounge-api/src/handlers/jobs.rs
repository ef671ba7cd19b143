//! Scheduled job handlers
//!
//! The daily reset is triggered by an external scheduler hitting this
//! endpoint. It is unauthenticated and idempotent; re-runs find nothing
//! left to purge.

use axum::{extract::State, Json};
use lounge_service::{CleanupService, ResetReportResponse};

use crate::response::ApiResult;
use crate::state::AppState;

/// Run the daily reset
///
/// POST /jobs/daily-reset
pub async fn daily_reset(State(state): State<AppState>) -> ApiResult<Json<ResetReportResponse>> {
    let service = CleanupService::new(state.service_context());
    let response = service.daily_reset().await?;
    Ok(Json(response))
}
