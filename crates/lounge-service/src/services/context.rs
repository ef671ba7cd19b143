//! Service context - dependency container for services
//!
//! Holds the repositories and shared services every domain service needs.

use std::sync::Arc;

use lounge_common::auth::JwtService;
use lounge_core::traits::{
    BookingRepository, DjRatingRepository, FaqRepository, PointsRepository, PromptRepository,
    SongRequestRepository, UserRepository, VoteRepository,
};
use lounge_core::SnowflakeGenerator;
use lounge_db::PgPool;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (kept for readiness checks)
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    request_repo: Arc<dyn SongRequestRepository>,
    vote_repo: Arc<dyn VoteRepository>,
    rating_repo: Arc<dyn DjRatingRepository>,
    booking_repo: Arc<dyn BookingRepository>,
    prompt_repo: Arc<dyn PromptRepository>,
    points_repo: Arc<dyn PointsRepository>,
    faq_repo: Arc<dyn FaqRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        request_repo: Arc<dyn SongRequestRepository>,
        vote_repo: Arc<dyn VoteRepository>,
        rating_repo: Arc<dyn DjRatingRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        prompt_repo: Arc<dyn PromptRepository>,
        points_repo: Arc<dyn PointsRepository>,
        faq_repo: Arc<dyn FaqRepository>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            request_repo,
            vote_repo,
            rating_repo,
            booking_repo,
            prompt_repo,
            points_repo,
            faq_repo,
            jwt_service,
            snowflake_generator,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the song request repository
    pub fn request_repo(&self) -> &dyn SongRequestRepository {
        self.request_repo.as_ref()
    }

    /// Get the vote repository
    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    /// Get the DJ rating repository
    pub fn rating_repo(&self) -> &dyn DjRatingRepository {
        self.rating_repo.as_ref()
    }

    /// Get the booking repository
    pub fn booking_repo(&self) -> &dyn BookingRepository {
        self.booking_repo.as_ref()
    }

    /// Get the game prompt repository
    pub fn prompt_repo(&self) -> &dyn PromptRepository {
        self.prompt_repo.as_ref()
    }

    /// Get the point ledger repository
    pub fn points_repo(&self) -> &dyn PointsRepository {
        self.points_repo.as_ref()
    }

    /// Get the FAQ repository
    pub fn faq_repo(&self) -> &dyn FaqRepository {
        self.faq_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> lounge_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    request_repo: Option<Arc<dyn SongRequestRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    rating_repo: Option<Arc<dyn DjRatingRepository>>,
    booking_repo: Option<Arc<dyn BookingRepository>>,
    prompt_repo: Option<Arc<dyn PromptRepository>>,
    points_repo: Option<Arc<dyn PointsRepository>>,
    faq_repo: Option<Arc<dyn FaqRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn request_repo(mut self, repo: Arc<dyn SongRequestRepository>) -> Self {
        self.request_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn rating_repo(mut self, repo: Arc<dyn DjRatingRepository>) -> Self {
        self.rating_repo = Some(repo);
        self
    }

    pub fn booking_repo(mut self, repo: Arc<dyn BookingRepository>) -> Self {
        self.booking_repo = Some(repo);
        self
    }

    pub fn prompt_repo(mut self, repo: Arc<dyn PromptRepository>) -> Self {
        self.prompt_repo = Some(repo);
        self
    }

    pub fn points_repo(mut self, repo: Arc<dyn PointsRepository>) -> Self {
        self.points_repo = Some(repo);
        self
    }

    pub fn faq_repo(mut self, repo: Arc<dyn FaqRepository>) -> Self {
        self.faq_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.request_repo.ok_or_else(|| ServiceError::validation("request_repo is required"))?,
            self.vote_repo.ok_or_else(|| ServiceError::validation("vote_repo is required"))?,
            self.rating_repo.ok_or_else(|| ServiceError::validation("rating_repo is required"))?,
            self.booking_repo.ok_or_else(|| ServiceError::validation("booking_repo is required"))?,
            self.prompt_repo.ok_or_else(|| ServiceError::validation("prompt_repo is required"))?,
            self.points_repo.ok_or_else(|| ServiceError::validation("points_repo is required"))?,
            self.faq_repo.ok_or_else(|| ServiceError::validation("faq_repo is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
