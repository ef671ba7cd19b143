//! Vote entity <-> model mapper

use lounge_core::entities::Vote;
use lounge_core::value_objects::Snowflake;

use crate::models::VoteModel;

/// Convert VoteModel to Vote entity
impl From<VoteModel> for Vote {
    fn from(model: VoteModel) -> Self {
        Vote {
            id: Snowflake::new(model.id),
            song_request_id: Snowflake::new(model.song_request_id),
            user_id: Snowflake::new(model.user_id),
            created_at: model.created_at,
        }
    }
}
