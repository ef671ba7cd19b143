//! DJ rating database models

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for dj_ratings table
#[derive(Debug, Clone, FromRow)]
pub struct DjRatingModel {
    pub id: i64,
    pub dj_id: i64,
    pub user_id: i64,
    pub score: i16,
    pub comment: Option<String>,
    pub performance_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Aggregated rating summary (from query)
#[derive(Debug, Clone, FromRow)]
pub struct RatingSummaryModel {
    pub rating_count: i64,
    pub average_score: Option<f64>,
}
