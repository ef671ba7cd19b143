//! DJ rating entity

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::Snowflake;

/// Rating bounds (inclusive)
pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// One user's rating of a DJ for a specific performance night.
/// Unique per (dj_id, user_id, performance_date).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DjRating {
    pub id: Snowflake,
    pub dj_id: Snowflake,
    pub user_id: Snowflake,
    pub score: i16,
    pub comment: Option<String>,
    pub performance_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl DjRating {
    pub fn new(
        id: Snowflake,
        dj_id: Snowflake,
        user_id: Snowflake,
        score: i16,
        comment: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            dj_id,
            user_id,
            score,
            comment,
            performance_date: now.date_naive(),
            created_at: now,
        }
    }

    /// Whether a score falls inside the 1-5 scale
    pub fn is_valid_score(score: i16) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&score)
    }
}

/// Aggregated rating summary for a DJ on one night
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub dj_id: Snowflake,
    pub performance_date: NaiveDate,
    pub rating_count: i64,
    pub average_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bounds() {
        assert!(!DjRating::is_valid_score(0));
        assert!(DjRating::is_valid_score(1));
        assert!(DjRating::is_valid_score(5));
        assert!(!DjRating::is_valid_score(6));
    }

    #[test]
    fn test_new_rating_dated_today() {
        let rating = DjRating::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            4,
            Some("great set".to_string()),
        );
        assert_eq!(rating.performance_date, Utc::now().date_naive());
    }
}
