//! DJ rating entity <-> model mapper

use lounge_core::entities::DjRating;
use lounge_core::value_objects::Snowflake;

use crate::models::DjRatingModel;

/// Convert DjRatingModel to DjRating entity
impl From<DjRatingModel> for DjRating {
    fn from(model: DjRatingModel) -> Self {
        DjRating {
            id: Snowflake::new(model.id),
            dj_id: Snowflake::new(model.dj_id),
            user_id: Snowflake::new(model.user_id),
            score: model.score,
            comment: model.comment,
            performance_date: model.performance_date,
            created_at: model.created_at,
        }
    }
}
