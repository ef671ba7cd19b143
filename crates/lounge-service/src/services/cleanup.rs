//! Daily reset job - purges stale requests, votes, and ratings
//!
//! Each purge step runs independently. A failed step is logged and the
//! next one still runs, so a partial reset tonight is finished by the
//! next run rather than blocking it.

use chrono::{Duration, Utc};
use tracing::{error, info, instrument};

use lounge_core::ranking::{window_cutoff, RATING_RETENTION_HOURS};

use crate::dto::responses::ResetReportResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Cleanup service for the scheduled daily reset
pub struct CleanupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CleanupService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run the daily reset. Idempotent: a re-run finds nothing left to purge.
    #[instrument(skip(self))]
    pub async fn daily_reset(&self) -> ServiceResult<ResetReportResponse> {
        let now = Utc::now();
        let cutoff = window_cutoff(now);
        let rating_cutoff = now - Duration::hours(RATING_RETENTION_HOURS);
        let today = now.date_naive();

        let requests_purged = match self.ctx.request_repo().delete_older_than(cutoff).await {
            Ok(count) => count,
            Err(e) => {
                error!(error = %e, "reset: request purge failed");
                0
            }
        };

        // Votes on surviving requests are untouched; this sweeps orphans
        // whose request row outlived the window by other means.
        let votes_purged = match self.ctx.vote_repo().delete_older_than(cutoff).await {
            Ok(count) => count,
            Err(e) => {
                error!(error = %e, "reset: vote purge failed");
                0
            }
        };

        let ratings_purged = match self
            .ctx
            .rating_repo()
            .delete_stale(rating_cutoff, today)
            .await
        {
            Ok(count) => count,
            Err(e) => {
                error!(error = %e, "reset: rating purge failed");
                0
            }
        };

        info!(
            requests_purged,
            votes_purged, ratings_purged, "daily reset complete"
        );

        Ok(ResetReportResponse {
            success: true,
            message: format!(
                "purged {requests_purged} requests, {votes_purged} votes, {ratings_purged} ratings"
            ),
            cutoff_time: cutoff,
        })
    }
}
