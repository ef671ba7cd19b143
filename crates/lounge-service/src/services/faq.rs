//! FAQ service - keyword-matched answers over staff-curated entries

use tracing::{info, instrument};

use lounge_core::entities::FaqEntry;
use lounge_core::{faq, Snowflake};

use crate::dto::requests::{AskFaqRequest, CreateFaqRequest};
use crate::dto::responses::{FaqAnswerResponse, FaqEntryResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::require_staff;

/// FAQ service
pub struct FaqService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FaqService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Answer a free-form question from the curated entries.
    /// No match is a normal outcome, not an error.
    #[instrument(skip(self, request))]
    pub async fn ask(&self, request: AskFaqRequest) -> ServiceResult<FaqAnswerResponse> {
        let entries = self.ctx.faq_repo().find_all().await?;

        Ok(match faq::best_match(&request.question, &entries) {
            Some(entry) => FaqAnswerResponse {
                matched: true,
                question: Some(entry.question.clone()),
                answer: Some(entry.answer.clone()),
            },
            None => FaqAnswerResponse::no_match(),
        })
    }

    /// List all curated entries
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<FaqEntryResponse>> {
        let entries = self.ctx.faq_repo().find_all().await?;
        Ok(entries.iter().map(FaqEntryResponse::from).collect())
    }

    /// Staff: add a curated entry
    #[instrument(skip(self, request))]
    pub async fn create_entry(
        &self,
        actor: Snowflake,
        request: CreateFaqRequest,
    ) -> ServiceResult<FaqEntryResponse> {
        require_staff(self.ctx, actor).await?;

        let entry = FaqEntry::new(
            self.ctx.generate_id(),
            request.question.trim().to_string(),
            request.answer.trim().to_string(),
            request.keywords,
        );
        self.ctx.faq_repo().create(&entry).await?;

        info!(entry_id = %entry.id, "faq entry created");
        Ok(FaqEntryResponse::from(&entry))
    }
}
