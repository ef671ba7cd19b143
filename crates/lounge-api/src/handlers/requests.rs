//! Song request handlers
//!
//! Endpoints for submitting requests, tonight's ranked board, voting,
//! and staff moderation.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use lounge_service::{
    CreateSongRequest, RankingQuery, RankingResponse, SongRequestResponse, SongRequestService,
    UpdateRequestStatusRequest, VoteResponse, VoteService,
};

use crate::extractors::{parse_id, AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Submit a song request
///
/// POST /requests
pub async fn create_request(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateSongRequest>,
) -> ApiResult<Created<Json<SongRequestResponse>>> {
    let service = SongRequestService::new(state.service_context());
    let response = service.submit(request).await?;
    Ok(Created(Json(response)))
}

/// Tonight's ranked board with optional search
///
/// GET /requests?q=...
pub async fn get_ranking(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Query(query): Query<RankingQuery>,
) -> ApiResult<Json<RankingResponse>> {
    let service = SongRequestService::new(state.service_context());
    let response = service.ranking(auth.user_id(), query.q.as_deref()).await?;
    Ok(Json(response))
}

/// Get a single request
///
/// GET /requests/{request_id}
pub async fn get_request(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Path(request_id): Path<String>,
) -> ApiResult<Json<SongRequestResponse>> {
    let request_id = parse_id(&request_id, "request_id")?;

    let service = SongRequestService::new(state.service_context());
    let response = service.get(request_id, auth.user_id()).await?;
    Ok(Json(response))
}

/// Staff: update request status
///
/// PATCH /requests/{request_id}
pub async fn update_request_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(request_id): Path<String>,
    Json(body): Json<UpdateRequestStatusRequest>,
) -> ApiResult<Json<SongRequestResponse>> {
    let request_id = parse_id(&request_id, "request_id")?;

    let service = SongRequestService::new(state.service_context());
    let response = service
        .update_status(auth.user_id, request_id, &body.status)
        .await?;
    Ok(Json(response))
}

/// Staff: delete a request
///
/// DELETE /requests/{request_id}
pub async fn delete_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(request_id): Path<String>,
) -> ApiResult<NoContent> {
    let request_id = parse_id(&request_id, "request_id")?;

    let service = SongRequestService::new(state.service_context());
    service.delete(auth.user_id, request_id).await?;
    Ok(NoContent)
}

/// Toggle the caller's vote on a request
///
/// PUT /requests/{request_id}/vote/@me
pub async fn toggle_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(request_id): Path<String>,
) -> ApiResult<Json<VoteResponse>> {
    let request_id = parse_id(&request_id, "request_id")?;

    let service = VoteService::new(state.service_context());
    let response = service.toggle(auth.user_id, request_id).await?;
    Ok(Json(response))
}
