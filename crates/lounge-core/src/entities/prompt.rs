//! Truth-or-dare game prompts and the point ledger

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Points awarded for completing a prompt of each kind
pub const TRUTH_POINTS: i32 = 5;
pub const DARE_POINTS: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    Truth,
    Dare,
}

impl PromptKind {
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "truth" => Some(Self::Truth),
            "dare" => Some(Self::Dare),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Truth => "truth",
            Self::Dare => "dare",
        }
    }

    /// Points a completed prompt of this kind is worth
    pub fn points(&self) -> i32 {
        match self {
            Self::Truth => TRUTH_POINTS,
            Self::Dare => DARE_POINTS,
        }
    }
}

/// A staff-seeded truth or dare prompt. Each prompt carries its own point
/// value; the per-kind constants are only the defaults for new prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePrompt {
    pub id: Snowflake,
    pub kind: PromptKind,
    pub text: String,
    pub points: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl GamePrompt {
    pub fn new(id: Snowflake, kind: PromptKind, text: String, points: i32) -> Self {
        Self {
            id,
            kind,
            text,
            points,
            active: true,
            created_at: Utc::now(),
        }
    }
}

/// One entry in a user's point ledger. Balances are the sum of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointEntry {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub prompt_id: Snowflake,
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

impl PointEntry {
    pub fn new(id: Snowflake, user_id: Snowflake, prompt_id: Snowflake, points: i32) -> Self {
        Self {
            id,
            user_id,
            prompt_id,
            points,
            created_at: Utc::now(),
        }
    }
}
