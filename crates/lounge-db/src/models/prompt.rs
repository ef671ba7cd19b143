//! Game prompt and point ledger database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for game_prompts table
#[derive(Debug, Clone, FromRow)]
pub struct GamePromptModel {
    pub id: i64,
    pub kind: String,
    pub text: String,
    pub points: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Database model for point_entries table
#[derive(Debug, Clone, FromRow)]
pub struct PointEntryModel {
    pub id: i64,
    pub user_id: i64,
    pub prompt_id: i64,
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

/// Aggregated point balance (from query)
#[derive(Debug, Clone, FromRow)]
pub struct PointBalanceModel {
    pub user_id: i64,
    pub balance: i64,
}
