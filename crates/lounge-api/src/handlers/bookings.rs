//! Table booking handlers

use axum::{
    extract::{Path, State},
    Json,
};
use lounge_service::{
    BookingResponse, BookingService, CreateBookingRequest, UpdateBookingStatusRequest,
};

use crate::extractors::{parse_id, AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a booking
///
/// POST /bookings
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> ApiResult<Created<Json<BookingResponse>>> {
    let service = BookingService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the caller's bookings
///
/// GET /bookings/@me
pub async fn get_my_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<BookingResponse>>> {
    let service = BookingService::new(state.service_context());
    let response = service.list_mine(auth.user_id).await?;
    Ok(Json(response))
}

/// Staff: move a booking through its lifecycle
///
/// PATCH /bookings/{booking_id}
pub async fn update_booking_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(booking_id): Path<String>,
    Json(body): Json<UpdateBookingStatusRequest>,
) -> ApiResult<Json<BookingResponse>> {
    let booking_id = parse_id(&booking_id, "booking_id")?;

    let service = BookingService::new(state.service_context());
    let response = service
        .update_status(auth.user_id, booking_id, &body.status)
        .await?;
    Ok(Json(response))
}

/// Cancel a booking (owner or staff)
///
/// DELETE /bookings/{booking_id}
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(booking_id): Path<String>,
) -> ApiResult<Json<BookingResponse>> {
    let booking_id = parse_id(&booking_id, "booking_id")?;

    let service = BookingService::new(state.service_context());
    let response = service.cancel(auth.user_id, booking_id).await?;
    Ok(Json(response))
}
