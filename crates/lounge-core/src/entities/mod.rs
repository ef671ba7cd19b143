//! Domain entities

mod booking;
mod dj_rating;
mod faq_entry;
mod prompt;
mod song_request;
mod user;
mod vote;

pub use booking::{Booking, BookingStatus, MAX_PARTY_SIZE, MIN_PARTY_SIZE};
pub use dj_rating::{DjRating, RatingSummary, MAX_RATING, MIN_RATING};
pub use faq_entry::FaqEntry;
pub use prompt::{GamePrompt, PointEntry, PromptKind, DARE_POINTS, TRUTH_POINTS};
pub use song_request::{RequestStatus, SongRequest};
pub use user::User;
pub use vote::Vote;
