//! DJ rating service

use chrono::{NaiveDate, Utc};
use tracing::{info, instrument};

use lounge_core::entities::DjRating;
use lounge_core::{moderation, DomainError, Snowflake};

use crate::dto::requests::CreateRatingRequest;
use crate::dto::responses::{RatingResponse, RatingSummaryResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// DJ rating service
pub struct DjRatingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DjRatingService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Rate a DJ for tonight's performance. One rating per user per night.
    #[instrument(skip(self, request))]
    pub async fn rate(
        &self,
        user_id: Snowflake,
        dj_id: Snowflake,
        request: CreateRatingRequest,
    ) -> ServiceResult<RatingResponse> {
        if !DjRating::is_valid_score(request.score) {
            return Err(ServiceError::validation("score must be between 1 and 5"));
        }

        if let Some(comment) = &request.comment {
            if moderation::contains_profanity(comment) {
                return Err(DomainError::ProfaneContent.into());
            }
        }

        let rating = DjRating::new(
            self.ctx.generate_id(),
            dj_id,
            user_id,
            request.score,
            request
                .comment
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
        );
        self.ctx.rating_repo().create(&rating).await?;

        info!(dj_id = %dj_id, score = rating.score, "rating submitted");
        Ok(RatingResponse::from(&rating))
    }

    /// Aggregate summary for a DJ on one night, defaulting to tonight
    #[instrument(skip(self))]
    pub async fn summary(
        &self,
        dj_id: Snowflake,
        date: Option<NaiveDate>,
    ) -> ServiceResult<RatingSummaryResponse> {
        let date = date.unwrap_or_else(|| Utc::now().date_naive());
        let summary = self.ctx.rating_repo().summary(dj_id, date).await?;
        Ok(RatingSummaryResponse::from(&summary))
    }
}
