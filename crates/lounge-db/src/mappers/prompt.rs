//! Game prompt and point entry mappers

use lounge_core::entities::{GamePrompt, PointEntry, PromptKind};
use lounge_core::value_objects::Snowflake;

use crate::models::{GamePromptModel, PointEntryModel};

/// Convert GamePromptModel to GamePrompt entity
impl From<GamePromptModel> for GamePrompt {
    fn from(model: GamePromptModel) -> Self {
        GamePrompt {
            id: Snowflake::new(model.id),
            kind: PromptKind::from_str_opt(&model.kind).unwrap_or(PromptKind::Truth),
            text: model.text,
            points: model.points,
            active: model.active,
            created_at: model.created_at,
        }
    }
}

/// Convert PointEntryModel to PointEntry entity
impl From<PointEntryModel> for PointEntry {
    fn from(model: PointEntryModel) -> Self {
        PointEntry {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            prompt_id: Snowflake::new(model.prompt_id),
            points: model.points,
            created_at: model.created_at,
        }
    }
}
