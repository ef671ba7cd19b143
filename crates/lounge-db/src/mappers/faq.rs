//! FAQ entry entity <-> model mapper

use lounge_core::entities::FaqEntry;
use lounge_core::value_objects::Snowflake;

use crate::models::FaqEntryModel;

/// Convert FaqEntryModel to FaqEntry entity
impl From<FaqEntryModel> for FaqEntry {
    fn from(model: FaqEntryModel) -> Self {
        FaqEntry {
            id: Snowflake::new(model.id),
            question: model.question,
            answer: model.answer,
            keywords: model.keywords,
            created_at: model.created_at,
        }
    }
}
