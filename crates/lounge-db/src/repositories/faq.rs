//! PostgreSQL implementation of FaqRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lounge_core::entities::FaqEntry;
use lounge_core::traits::{FaqRepository, RepoResult};

use crate::models::FaqEntryModel;

use super::error::map_db_error;

/// PostgreSQL implementation of FaqRepository
#[derive(Clone)]
pub struct PgFaqRepository {
    pool: PgPool,
}

impl PgFaqRepository {
    /// Create a new PgFaqRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FaqRepository for PgFaqRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<FaqEntry>> {
        let results = sqlx::query_as::<_, FaqEntryModel>(
            r#"
            SELECT id, question, answer, keywords, created_at
            FROM faq_entries
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(FaqEntry::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, entry: &FaqEntry) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO faq_entries (id, question, answer, keywords, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entry.id.into_inner())
        .bind(&entry.question)
        .bind(&entry.answer)
        .bind(&entry.keywords)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
