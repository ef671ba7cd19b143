//! Domain layer for the lounge engagement backend
//!
//! Pure domain logic: entities, value objects, ranking and moderation rules,
//! errors, and repository ports. No IO lives here.

pub mod entities;
pub mod error;
pub mod faq;
pub mod moderation;
pub mod ranking;
pub mod traits;
pub mod value_objects;

pub use entities::{
    Booking, BookingStatus, DjRating, FaqEntry, GamePrompt, PointEntry, PromptKind, RatingSummary,
    RequestStatus, SongRequest, User, Vote,
};
pub use error::{DomainError, DomainResult};
pub use ranking::{
    RankedBoard, MAX_VOTES_PER_USER, RATING_RETENTION_HOURS, TONIGHT_WINDOW_HOURS, TRENDING_COUNT,
};
pub use value_objects::{Snowflake, SnowflakeGenerator};
