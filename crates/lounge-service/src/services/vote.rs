//! Vote service - the vote toggle and the per-user cap
//!
//! A toggle either removes the caller's existing vote or adds a new one.
//! The cap only gates additions; removal always succeeds so users can
//! free a slot even while at the limit.

use chrono::Utc;
use tracing::{info, instrument};

use lounge_core::entities::Vote;
use lounge_core::ranking::{window_cutoff, MAX_VOTES_PER_USER};
use lounge_core::{DomainError, Snowflake};

use crate::dto::responses::VoteResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Vote service
pub struct VoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VoteService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle the caller's vote on a request
    #[instrument(skip(self))]
    pub async fn toggle(
        &self,
        user_id: Snowflake,
        request_id: Snowflake,
    ) -> ServiceResult<VoteResponse> {
        let request = self
            .ctx
            .request_repo()
            .find_by_id(request_id)
            .await?
            .ok_or(DomainError::RequestNotFound)?;

        let now = Utc::now();
        let cutoff = window_cutoff(now);

        let voted = if self.ctx.vote_repo().find(request_id, user_id).await?.is_some() {
            self.ctx.vote_repo().remove(request_id, user_id).await?;
            info!(request_id = %request_id, "vote removed");
            false
        } else {
            let held = self.ctx.vote_repo().count_since(user_id, cutoff).await?;
            if held >= MAX_VOTES_PER_USER {
                return Err(DomainError::VoteLimitExceeded {
                    limit: MAX_VOTES_PER_USER,
                }
                .into());
            }

            let vote = Vote::new(self.ctx.generate_id(), request_id, user_id);
            // A false return means another request of ours won the race;
            // the vote exists either way.
            self.ctx.vote_repo().add(&vote).await?;
            info!(request_id = %request_id, "vote added");
            true
        };

        // Re-read for the post-toggle count; fall back to the snapshot if
        // the request was purged mid-flight.
        let vote_count = self
            .ctx
            .request_repo()
            .find_by_id(request_id)
            .await?
            .map_or(request.vote_count, |r| r.vote_count);

        let held = self.ctx.vote_repo().count_since(user_id, cutoff).await?;
        let votes_remaining = (MAX_VOTES_PER_USER - held).max(0);

        Ok(VoteResponse {
            voted,
            vote_count,
            votes_remaining,
        })
    }
}
