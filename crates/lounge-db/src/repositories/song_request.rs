//! PostgreSQL implementation of SongRequestRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use lounge_core::entities::{RequestStatus, SongRequest};
use lounge_core::traits::{RepoResult, SongRequestRepository};
use lounge_core::value_objects::Snowflake;

use crate::models::SongRequestModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SongRequestRepository
#[derive(Clone)]
pub struct PgSongRequestRepository {
    pool: PgPool,
}

impl PgSongRequestRepository {
    /// Create a new PgSongRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SongRequestRepository for PgSongRequestRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<SongRequest>> {
        let result = sqlx::query_as::<_, SongRequestModel>(
            r#"
            SELECT id, song_title, artist, requested_by_name, vote_count, status,
                   event_date, created_at
            FROM song_requests
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SongRequest::from))
    }

    #[instrument(skip(self))]
    async fn find_since(&self, cutoff: DateTime<Utc>) -> RepoResult<Vec<SongRequest>> {
        let results = sqlx::query_as::<_, SongRequestModel>(
            r#"
            SELECT id, song_title, artist, requested_by_name, vote_count, status,
                   event_date, created_at
            FROM song_requests
            WHERE created_at >= $1
            ORDER BY vote_count DESC, created_at ASC
            "#,
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SongRequest::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, request: &SongRequest) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO song_requests (id, song_title, artist, requested_by_name, vote_count,
                                       status, event_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(request.id.into_inner())
        .bind(&request.song_title)
        .bind(&request.artist)
        .bind(request.requested_by_name.as_deref())
        .bind(request.vote_count)
        .bind(request.status.as_str())
        .bind(request.event_date)
        .bind(request.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: Snowflake, status: RequestStatus) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE song_requests SET status = $2 WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM votes WHERE song_request_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("DELETE FROM song_requests WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Votes reference requests, so they go first.
        sqlx::query(
            r#"
            DELETE FROM votes
            WHERE song_request_id IN (SELECT id FROM song_requests WHERE created_at < $1)
            "#,
        )
        .bind(cutoff)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM song_requests WHERE created_at < $1")
            .bind(cutoff)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgSongRequestRepository>();
    }
}
