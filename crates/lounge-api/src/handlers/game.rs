//! Truth-or-dare game handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use lounge_service::{
    CreatePromptRequest, DrawPromptQuery, GameService, LeaderboardEntryResponse, PointsResponse,
    PromptCompletionResponse, PromptResponse,
};

use crate::extractors::{parse_id, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Query parameters for the leaderboard
#[derive(Debug, serde::Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<i64>,
}

/// Draw a random prompt of the given kind
///
/// GET /game/prompts/draw?kind=truth|dare
pub async fn draw_prompt(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<DrawPromptQuery>,
) -> ApiResult<Json<PromptResponse>> {
    let service = GameService::new(state.service_context());
    let response = service.draw(&query.kind).await?;
    Ok(Json(response))
}

/// Staff: seed a new prompt
///
/// POST /game/prompts
pub async fn create_prompt(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePromptRequest>,
) -> ApiResult<Created<Json<PromptResponse>>> {
    let service = GameService::new(state.service_context());
    let response = service.create_prompt(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Record a completed prompt and award points
///
/// POST /game/prompts/{prompt_id}/complete
pub async fn complete_prompt(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(prompt_id): Path<String>,
) -> ApiResult<Json<PromptCompletionResponse>> {
    let prompt_id = parse_id(&prompt_id, "prompt_id")?;

    let service = GameService::new(state.service_context());
    let response = service.complete(auth.user_id, prompt_id).await?;
    Ok(Json(response))
}

/// The caller's point balance
///
/// GET /game/points/@me
pub async fn get_my_points(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<PointsResponse>> {
    let service = GameService::new(state.service_context());
    let response = service.my_points(auth.user_id).await?;
    Ok(Json(response))
}

/// Top point balances
///
/// GET /game/leaderboard?limit=...
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> ApiResult<Json<Vec<LeaderboardEntryResponse>>> {
    let service = GameService::new(state.service_context());
    let response = service.leaderboard(query.limit).await?;
    Ok(Json(response))
}
