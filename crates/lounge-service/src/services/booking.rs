//! Table booking service

use tracing::{info, instrument};

use lounge_core::entities::{Booking, BookingStatus};
use lounge_core::{moderation, DomainError, Snowflake};

use crate::dto::requests::CreateBookingRequest;
use crate::dto::responses::BookingResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_staff;

/// Booking service
pub struct BookingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BookingService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a booking for the authenticated user
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        user_id: Snowflake,
        request: CreateBookingRequest,
    ) -> ServiceResult<BookingResponse> {
        if !Booking::is_valid_party_size(request.party_size) {
            return Err(ServiceError::validation(
                "party size must be between 1 and 20",
            ));
        }

        for field in [
            Some(request.guest_name.as_str()),
            request.notes.as_deref(),
        ]
        .into_iter()
        .flatten()
        {
            if moderation::contains_profanity(field) {
                return Err(DomainError::ProfaneContent.into());
            }
        }

        let booking = Booking::new(
            self.ctx.generate_id(),
            user_id,
            request.guest_name.trim().to_string(),
            request.party_size,
            request.booking_date,
            request.booking_time,
            request
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        );
        self.ctx.booking_repo().create(&booking).await?;

        info!(booking_id = %booking.id, "booking created");
        Ok(BookingResponse::from(&booking))
    }

    /// List the authenticated user's bookings, newest first
    #[instrument(skip(self))]
    pub async fn list_mine(&self, user_id: Snowflake) -> ServiceResult<Vec<BookingResponse>> {
        let bookings = self.ctx.booking_repo().find_by_user(user_id).await?;
        Ok(bookings.iter().map(BookingResponse::from).collect())
    }

    /// Staff: confirm or otherwise move a booking through its lifecycle
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        actor: Snowflake,
        id: Snowflake,
        status: &str,
    ) -> ServiceResult<BookingResponse> {
        require_staff(self.ctx, actor).await?;

        let status = BookingStatus::from_str_opt(status)
            .ok_or_else(|| ServiceError::validation(format!("unknown status: {status}")))?;

        let mut booking = self
            .ctx
            .booking_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::BookingNotFound)?;

        self.ctx.booking_repo().update_status(id, status).await?;
        booking.status = status;

        info!(booking_id = %id, status = status.as_str(), "booking status updated");
        Ok(BookingResponse::from(&booking))
    }

    /// Cancel a booking. Owners cancel their own; staff can cancel any.
    #[instrument(skip(self))]
    pub async fn cancel(&self, actor: Snowflake, id: Snowflake) -> ServiceResult<BookingResponse> {
        let mut booking = self
            .ctx
            .booking_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::BookingNotFound)?;

        if booking.user_id != actor {
            let user = self
                .ctx
                .user_repo()
                .find_by_id(actor)
                .await?
                .ok_or(DomainError::UserNotFound)?;
            if !user.is_staff {
                return Err(DomainError::NotOwner.into());
            }
        }

        if !booking.can_cancel() {
            return Err(ServiceError::validation("booking is already cancelled"));
        }

        self.ctx
            .booking_repo()
            .update_status(id, BookingStatus::Cancelled)
            .await?;
        booking.status = BookingStatus::Cancelled;

        info!(booking_id = %id, "booking cancelled");
        Ok(BookingResponse::from(&booking))
    }
}
