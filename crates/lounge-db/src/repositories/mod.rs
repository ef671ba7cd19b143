//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in lounge-core.
//! Each repository handles database operations for a specific domain entity.

mod booking;
mod dj_rating;
mod error;
mod faq;
mod points;
mod prompt;
mod song_request;
mod user;
mod vote;

pub use booking::PgBookingRepository;
pub use dj_rating::PgDjRatingRepository;
pub use faq::PgFaqRepository;
pub use points::PgPointsRepository;
pub use prompt::PgPromptRepository;
pub use song_request::PgSongRequestRepository;
pub use user::PgUserRepository;
pub use vote::PgVoteRepository;
