//! Truth-or-dare game service - prompt draws and the point ledger

use rand::seq::SliceRandom;
use tracing::{info, instrument};

use lounge_core::entities::{GamePrompt, PointEntry, PromptKind};
use lounge_core::{DomainError, Snowflake};

use crate::dto::requests::CreatePromptRequest;
use crate::dto::responses::{
    LeaderboardEntryResponse, PointsResponse, PromptCompletionResponse, PromptResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::require_staff;

const DEFAULT_LEADERBOARD_SIZE: i64 = 10;

/// Game service
pub struct GameService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GameService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Draw a random active prompt of the requested kind
    #[instrument(skip(self))]
    pub async fn draw(&self, kind: &str) -> ServiceResult<PromptResponse> {
        let kind = parse_kind(kind)?;
        let prompts = self.ctx.prompt_repo().find_by_kind(kind).await?;

        let prompt = prompts
            .choose(&mut rand::thread_rng())
            .ok_or(DomainError::PromptNotFound)?;

        Ok(PromptResponse::from(prompt))
    }

    /// Record a completed prompt and award its points
    #[instrument(skip(self))]
    pub async fn complete(
        &self,
        user_id: Snowflake,
        prompt_id: Snowflake,
    ) -> ServiceResult<PromptCompletionResponse> {
        let prompt = self
            .ctx
            .prompt_repo()
            .find_by_id(prompt_id)
            .await?
            .ok_or(DomainError::PromptNotFound)?;

        let points = prompt.points;
        let entry = PointEntry::new(self.ctx.generate_id(), user_id, prompt_id, points);
        self.ctx.points_repo().add_entry(&entry).await?;

        let balance = self.ctx.points_repo().balance(user_id).await?;
        info!(prompt_id = %prompt_id, points, "prompt completed");

        Ok(PromptCompletionResponse {
            points_awarded: points,
            balance,
        })
    }

    /// Staff: seed a new prompt
    #[instrument(skip(self, request))]
    pub async fn create_prompt(
        &self,
        actor: Snowflake,
        request: CreatePromptRequest,
    ) -> ServiceResult<PromptResponse> {
        require_staff(self.ctx, actor).await?;

        let kind = parse_kind(&request.kind)?;
        let points = request.points.unwrap_or_else(|| kind.points());
        let prompt = GamePrompt::new(
            self.ctx.generate_id(),
            kind,
            request.text.trim().to_string(),
            points,
        );
        self.ctx.prompt_repo().create(&prompt).await?;

        info!(prompt_id = %prompt.id, kind = kind.as_str(), points, "prompt created");
        Ok(PromptResponse::from(&prompt))
    }

    /// The authenticated user's point balance
    #[instrument(skip(self))]
    pub async fn my_points(&self, user_id: Snowflake) -> ServiceResult<PointsResponse> {
        let balance = self.ctx.points_repo().balance(user_id).await?;
        Ok(PointsResponse {
            user_id: user_id.to_string(),
            balance,
        })
    }

    /// Top point balances with display names resolved
    #[instrument(skip(self))]
    pub async fn leaderboard(
        &self,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<LeaderboardEntryResponse>> {
        let limit = limit.unwrap_or(DEFAULT_LEADERBOARD_SIZE);
        let top = self.ctx.points_repo().top(limit).await?;

        let mut entries = Vec::with_capacity(top.len());
        for (user_id, balance) in top {
            let display_name = self
                .ctx
                .user_repo()
                .find_by_id(user_id)
                .await?
                .map(|u| u.display_name);
            entries.push(LeaderboardEntryResponse {
                user_id: user_id.to_string(),
                display_name,
                balance,
            });
        }

        Ok(entries)
    }
}

fn parse_kind(kind: &str) -> ServiceResult<PromptKind> {
    PromptKind::from_str_opt(kind)
        .ok_or_else(|| ServiceError::validation(format!("unknown prompt kind: {kind}")))
}
