//! DJ rating handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use lounge_service::{CreateRatingRequest, DjRatingService, RatingResponse, RatingSummaryResponse};

use crate::extractors::{parse_id, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Query parameters for the rating summary
#[derive(Debug, serde::Deserialize)]
pub struct SummaryQuery {
    /// ISO date; defaults to tonight
    pub date: Option<NaiveDate>,
}

/// Rate a DJ for tonight's performance
///
/// POST /djs/{dj_id}/ratings
pub async fn create_rating(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(dj_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateRatingRequest>,
) -> ApiResult<Created<Json<RatingResponse>>> {
    let dj_id = parse_id(&dj_id, "dj_id")?;

    let service = DjRatingService::new(state.service_context());
    let response = service.rate(auth.user_id, dj_id, request).await?;
    Ok(Created(Json(response)))
}

/// Aggregate rating summary for a DJ on one night
///
/// GET /djs/{dj_id}/ratings/summary?date=...
pub async fn get_rating_summary(
    State(state): State<AppState>,
    Path(dj_id): Path<String>,
    Query(query): Query<SummaryQuery>,
) -> ApiResult<Json<RatingSummaryResponse>> {
    let dj_id = parse_id(&dj_id, "dj_id")?;

    let service = DjRatingService::new(state.service_context());
    let response = service.summary(dj_id, query.date).await?;
    Ok(Json(response))
}
