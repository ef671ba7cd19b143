//! PostgreSQL implementation of DjRatingRepository

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use tracing::instrument;

use lounge_core::entities::{DjRating, RatingSummary};
use lounge_core::error::DomainError;
use lounge_core::traits::{DjRatingRepository, RepoResult};
use lounge_core::value_objects::Snowflake;

use crate::models::RatingSummaryModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of DjRatingRepository
#[derive(Clone)]
pub struct PgDjRatingRepository {
    pool: PgPool,
}

impl PgDjRatingRepository {
    /// Create a new PgDjRatingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DjRatingRepository for PgDjRatingRepository {
    #[instrument(skip(self))]
    async fn create(&self, rating: &DjRating) -> RepoResult<()> {
        // One rating per user per DJ per night, enforced by a unique index
        // on (dj_id, user_id, performance_date).
        sqlx::query(
            r#"
            INSERT INTO dj_ratings (id, dj_id, user_id, score, comment, performance_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(rating.id.into_inner())
        .bind(rating.dj_id.into_inner())
        .bind(rating.user_id.into_inner())
        .bind(rating.score)
        .bind(rating.comment.as_deref())
        .bind(rating.performance_date)
        .bind(rating.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyRated))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn summary(&self, dj_id: Snowflake, date: NaiveDate) -> RepoResult<RatingSummary> {
        let model = sqlx::query_as::<_, RatingSummaryModel>(
            r#"
            SELECT COUNT(*) AS rating_count, AVG(score::float8) AS average_score
            FROM dj_ratings
            WHERE dj_id = $1 AND performance_date = $2
            "#,
        )
        .bind(dj_id.into_inner())
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(RatingSummary {
            dj_id,
            performance_date: date,
            rating_count: model.rating_count,
            average_score: model.average_score,
        })
    }

    #[instrument(skip(self))]
    async fn delete_stale(&self, cutoff: DateTime<Utc>, today: NaiveDate) -> RepoResult<u64> {
        // Only today's stale rows are purged. Prior performance dates are
        // kept for historical reporting.
        let result = sqlx::query(
            r#"
            DELETE FROM dj_ratings
            WHERE created_at < $1 AND performance_date = $2
            "#,
        )
        .bind(cutoff)
        .bind(today)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgDjRatingRepository>();
    }
}
