//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod booking;
pub mod cleanup;
pub mod context;
pub mod dj_rating;
pub mod error;
pub mod faq;
pub mod game;
pub mod song_request;
pub mod vote;

// Re-export all services for convenience
pub use auth::AuthService;
pub use booking::BookingService;
pub use cleanup::CleanupService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dj_rating::DjRatingService;
pub use error::{ServiceError, ServiceResult};
pub use faq::FaqService;
pub use game::GameService;
pub use song_request::SongRequestService;
pub use vote::VoteService;

use lounge_core::{DomainError, Snowflake};

/// Ensure the acting user exists and holds staff access.
pub(crate) async fn require_staff(
    ctx: &ServiceContext,
    actor: Snowflake,
) -> ServiceResult<()> {
    let user = ctx
        .user_repo()
        .find_by_id(actor)
        .await?
        .ok_or(DomainError::UserNotFound)?;

    if !user.is_staff {
        return Err(DomainError::NotStaff.into());
    }

    Ok(())
}
