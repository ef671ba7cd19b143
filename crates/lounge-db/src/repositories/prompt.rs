//! PostgreSQL implementation of PromptRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lounge_core::entities::{GamePrompt, PromptKind};
use lounge_core::traits::{PromptRepository, RepoResult};
use lounge_core::value_objects::Snowflake;

use crate::models::GamePromptModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PromptRepository
#[derive(Clone)]
pub struct PgPromptRepository {
    pool: PgPool,
}

impl PgPromptRepository {
    /// Create a new PgPromptRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromptRepository for PgPromptRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<GamePrompt>> {
        let result = sqlx::query_as::<_, GamePromptModel>(
            r#"
            SELECT id, kind, text, points, active, created_at
            FROM game_prompts
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GamePrompt::from))
    }

    #[instrument(skip(self))]
    async fn find_by_kind(&self, kind: PromptKind) -> RepoResult<Vec<GamePrompt>> {
        let results = sqlx::query_as::<_, GamePromptModel>(
            r#"
            SELECT id, kind, text, points, active, created_at
            FROM game_prompts
            WHERE kind = $1 AND active
            ORDER BY created_at
            "#,
        )
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GamePrompt::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, prompt: &GamePrompt) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO game_prompts (id, kind, text, points, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(prompt.id.into_inner())
        .bind(prompt.kind.as_str())
        .bind(&prompt.text)
        .bind(prompt.points)
        .bind(prompt.active)
        .bind(prompt.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPromptRepository>();
    }
}
