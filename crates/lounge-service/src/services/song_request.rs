//! Song request service - submissions, tonight's board, staff moderation

use chrono::Utc;
use tracing::{info, instrument};

use lounge_core::entities::{RequestStatus, SongRequest};
use lounge_core::ranking::{rank_requests, window_cutoff};
use lounge_core::{moderation, DomainError, Snowflake};

use crate::dto::requests::CreateSongRequest;
use crate::dto::responses::{RankingResponse, SongRequestResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_staff;

/// Song request service
pub struct SongRequestService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SongRequestService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a song request for tonight's board
    #[instrument(skip(self, request))]
    pub async fn submit(&self, request: CreateSongRequest) -> ServiceResult<SongRequestResponse> {
        for field in [
            Some(request.song_title.as_str()),
            Some(request.artist.as_str()),
            request.requested_by_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        {
            if moderation::contains_profanity(field) {
                return Err(DomainError::ProfaneContent.into());
            }
        }

        let entity = SongRequest::new(
            self.ctx.generate_id(),
            request.song_title.trim().to_string(),
            request.artist.trim().to_string(),
            request
                .requested_by_name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        );
        self.ctx.request_repo().create(&entity).await?;

        info!(request_id = %entity.id, "song request submitted");
        Ok(SongRequestResponse::from_entity(&entity, false))
    }

    /// Ranked snapshot of tonight's board, with the viewer's votes marked
    #[instrument(skip(self))]
    pub async fn ranking(
        &self,
        viewer: Option<Snowflake>,
        search: Option<&str>,
    ) -> ServiceResult<RankingResponse> {
        let now = Utc::now();
        let cutoff = window_cutoff(now);

        let requests = self.ctx.request_repo().find_since(cutoff).await?;
        let voted = match viewer {
            Some(user_id) => self.ctx.vote_repo().voted_request_ids(user_id, cutoff).await?,
            None => Vec::new(),
        };

        let board = rank_requests(requests, now, search);
        let mark = |r: &SongRequest| SongRequestResponse::from_entity(r, voted.contains(&r.id));

        Ok(RankingResponse {
            trending: board.trending.iter().map(mark).collect(),
            others: board.others.iter().map(mark).collect(),
            generated_at: now,
        })
    }

    /// Fetch a single request
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        id: Snowflake,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<SongRequestResponse> {
        let request = self
            .ctx
            .request_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::RequestNotFound)?;

        let voted = match viewer {
            Some(user_id) => self.ctx.vote_repo().find(id, user_id).await?.is_some(),
            None => false,
        };

        Ok(SongRequestResponse::from_entity(&request, voted))
    }

    /// Staff moderation: change a request's status
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        actor: Snowflake,
        id: Snowflake,
        status: &str,
    ) -> ServiceResult<SongRequestResponse> {
        require_staff(self.ctx, actor).await?;

        let status = RequestStatus::from_str_opt(status)
            .ok_or_else(|| ServiceError::validation(format!("unknown status: {status}")))?;

        let mut request = self
            .ctx
            .request_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::RequestNotFound)?;

        self.ctx.request_repo().update_status(id, status).await?;
        request.status = status;

        info!(request_id = %id, status = status.as_str(), "request status updated");
        Ok(SongRequestResponse::from_entity(&request, false))
    }

    /// Staff moderation: remove a request and its votes
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: Snowflake, id: Snowflake) -> ServiceResult<()> {
        require_staff(self.ctx, actor).await?;

        if self.ctx.request_repo().find_by_id(id).await?.is_none() {
            return Err(DomainError::RequestNotFound.into());
        }

        self.ctx.request_repo().delete(id).await?;
        info!(request_id = %id, "request deleted");
        Ok(())
    }
}
