//! # lounge-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! Provides connection pool management, `FromRow` models, entity mappers,
//! and the repository implementations for the traits in `lounge-core`.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgBookingRepository, PgDjRatingRepository, PgFaqRepository, PgPointsRepository,
    PgPromptRepository, PgSongRequestRepository, PgUserRepository, PgVoteRepository,
};
