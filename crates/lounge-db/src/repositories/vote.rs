//! PostgreSQL implementation of VoteRepository
//!
//! The unique constraint on (song_request_id, user_id) is the race arbiter
//! for concurrent toggles: the insert uses ON CONFLICT DO NOTHING and reports
//! whether a row actually landed. The denormalized vote_count on the request
//! moves in the same transaction as the vote row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use lounge_core::entities::Vote;
use lounge_core::traits::{RepoResult, VoteRepository};
use lounge_core::value_objects::Snowflake;

use crate::models::VoteModel;

use super::error::map_db_error;

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn find(
        &self,
        song_request_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Vote>> {
        let result = sqlx::query_as::<_, VoteModel>(
            r#"
            SELECT id, song_request_id, user_id, created_at
            FROM votes
            WHERE song_request_id = $1 AND user_id = $2
            "#,
        )
        .bind(song_request_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Vote::from))
    }

    #[instrument(skip(self))]
    async fn add(&self, vote: &Vote) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            INSERT INTO votes (id, song_request_id, user_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (song_request_id, user_id) DO NOTHING
            "#,
        )
        .bind(vote.id.into_inner())
        .bind(vote.song_request_id.into_inner())
        .bind(vote.user_id.into_inner())
        .bind(vote.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let inserted = result.rows_affected() > 0;

        if inserted {
            sqlx::query(
                r#"
                UPDATE song_requests SET vote_count = vote_count + 1 WHERE id = $1
                "#,
            )
            .bind(vote.song_request_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn remove(&self, song_request_id: Snowflake, user_id: Snowflake) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r#"
            DELETE FROM votes WHERE song_request_id = $1 AND user_id = $2
            "#,
        )
        .bind(song_request_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let removed = result.rows_affected() > 0;

        if removed {
            sqlx::query(
                r#"
                UPDATE song_requests
                SET vote_count = GREATEST(vote_count - 1, 0)
                WHERE id = $1
                "#,
            )
            .bind(song_request_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn count_since(&self, user_id: Snowflake, cutoff: DateTime<Utc>) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM votes v
            JOIN song_requests r ON r.id = v.song_request_id
            WHERE v.user_id = $1 AND r.created_at >= $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(cutoff)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn voted_request_ids(
        &self,
        user_id: Snowflake,
        cutoff: DateTime<Utc>,
    ) -> RepoResult<Vec<Snowflake>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT v.song_request_id
            FROM votes v
            JOIN song_requests r ON r.id = v.song_request_id
            WHERE v.user_id = $1 AND r.created_at >= $2
            "#,
        )
        .bind(user_id.into_inner())
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids.into_iter().map(Snowflake::new).collect())
    }

    #[instrument(skip(self))]
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> RepoResult<u64> {
        let result = sqlx::query("DELETE FROM votes WHERE created_at < $1")
            .bind(cutoff)
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
        assert_send_sync::<PgVoteRepository>();
    }
}
