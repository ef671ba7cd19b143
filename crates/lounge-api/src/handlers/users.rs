//! User handlers

use axum::{extract::State, Json};
use lounge_service::{AuthService, CurrentUserResponse};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the authenticated user's profile
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.me(auth.user_id).await?;
    Ok(Json(response))
}
