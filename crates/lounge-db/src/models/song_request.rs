//! Song request database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for song_requests table
#[derive(Debug, Clone, FromRow)]
pub struct SongRequestModel {
    pub id: i64,
    pub song_title: String,
    pub artist: String,
    pub requested_by_name: Option<String>,
    pub vote_count: i32,
    pub status: String,
    pub event_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
