//! FAQ handlers

use axum::{extract::State, Json};
use lounge_service::{
    AskFaqRequest, CreateFaqRequest, FaqAnswerResponse, FaqEntryResponse, FaqService,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Ask a free-form question
///
/// POST /faq/ask
pub async fn ask(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AskFaqRequest>,
) -> ApiResult<Json<FaqAnswerResponse>> {
    let service = FaqService::new(state.service_context());
    let response = service.ask(request).await?;
    Ok(Json(response))
}

/// List all curated entries
///
/// GET /faq
pub async fn list_entries(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<FaqEntryResponse>>> {
    let service = FaqService::new(state.service_context());
    let response = service.list().await?;
    Ok(Json(response))
}

/// Staff: add a curated entry
///
/// POST /faq
pub async fn create_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateFaqRequest>,
) -> ApiResult<Created<Json<FaqEntryResponse>>> {
    let service = FaqService::new(state.service_context());
    let response = service.create_entry(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}
