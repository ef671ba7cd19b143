//! FAQ entry database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for faq_entries table
#[derive(Debug, Clone, FromRow)]
pub struct FaqEntryModel {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Stored as a TEXT[] column
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
}
