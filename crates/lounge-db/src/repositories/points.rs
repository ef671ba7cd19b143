//! PostgreSQL implementation of PointsRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lounge_core::entities::PointEntry;
use lounge_core::traits::{PointsRepository, RepoResult};
use lounge_core::value_objects::Snowflake;

use crate::models::PointBalanceModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PointsRepository
#[derive(Clone)]
pub struct PgPointsRepository {
    pool: PgPool,
}

impl PgPointsRepository {
    /// Create a new PgPointsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PointsRepository for PgPointsRepository {
    #[instrument(skip(self))]
    async fn add_entry(&self, entry: &PointEntry) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO point_entries (id, user_id, prompt_id, points, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entry.id.into_inner())
        .bind(entry.user_id.into_inner())
        .bind(entry.prompt_id.into_inner())
        .bind(entry.points)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn balance(&self, user_id: Snowflake) -> RepoResult<i64> {
        let balance = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(points), 0)
            FROM point_entries
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(balance)
    }

    #[instrument(skip(self))]
    async fn top(&self, limit: i64) -> RepoResult<Vec<(Snowflake, i64)>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, PointBalanceModel>(
            r#"
            SELECT user_id, SUM(points) AS balance
            FROM point_entries
            GROUP BY user_id
            ORDER BY balance DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|r| (Snowflake::new(r.user_id), r.balance))
            .collect())
    }
}
