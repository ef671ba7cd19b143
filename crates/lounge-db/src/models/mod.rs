//! Database models - SQLx-compatible structs for PostgreSQL tables

mod booking;
mod dj_rating;
mod faq;
mod prompt;
mod song_request;
mod user;
mod vote;

pub use booking::BookingModel;
pub use dj_rating::{DjRatingModel, RatingSummaryModel};
pub use faq::FaqEntryModel;
pub use prompt::{GamePromptModel, PointBalanceModel, PointEntryModel};
pub use song_request::SongRequestModel;
pub use user::UserModel;
pub use vote::VoteModel;
