//! Vote database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for votes table
#[derive(Debug, Clone, FromRow)]
pub struct VoteModel {
    pub id: i64,
    pub song_request_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}
