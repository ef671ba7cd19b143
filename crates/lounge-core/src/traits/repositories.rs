//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::{
    Booking, BookingStatus, DjRating, FaqEntry, GamePrompt, PointEntry, PromptKind, RatingSummary,
    RequestStatus, SongRequest, User, Vote,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Song Request Repository
// ============================================================================

#[async_trait]
pub trait SongRequestRepository: Send + Sync {
    /// Find request by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<SongRequest>>;

    /// List requests created at or after the cutoff
    async fn find_since(&self, cutoff: DateTime<Utc>) -> RepoResult<Vec<SongRequest>>;

    /// Create a new request
    async fn create(&self, request: &SongRequest) -> RepoResult<()>;

    /// Update moderation status
    async fn update_status(&self, id: Snowflake, status: RequestStatus) -> RepoResult<()>;

    /// Delete a single request and its votes
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Purge requests older than the cutoff, votes first, in one transaction.
    /// Returns the number of requests removed.
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> RepoResult<u64>;
}

// ============================================================================
// Vote Repository
// ============================================================================

#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Find a user's vote on a request
    async fn find(&self, song_request_id: Snowflake, user_id: Snowflake)
        -> RepoResult<Option<Vote>>;

    /// Insert a vote and bump the request's vote count in one transaction.
    /// Returns false when the vote already existed (a lost race, not an error).
    async fn add(&self, vote: &Vote) -> RepoResult<bool>;

    /// Remove a vote and decrement the request's vote count in one
    /// transaction. Returns false when no vote was present.
    async fn remove(&self, song_request_id: Snowflake, user_id: Snowflake) -> RepoResult<bool>;

    /// Count a user's votes on requests created at or after the cutoff
    async fn count_since(&self, user_id: Snowflake, cutoff: DateTime<Utc>) -> RepoResult<i64>;

    /// Request IDs the user currently holds votes on, within the window
    async fn voted_request_ids(
        &self,
        user_id: Snowflake,
        cutoff: DateTime<Utc>,
    ) -> RepoResult<Vec<Snowflake>>;

    /// Purge votes older than the cutoff. Returns the number removed.
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> RepoResult<u64>;
}

// ============================================================================
// DJ Rating Repository
// ============================================================================

#[async_trait]
pub trait DjRatingRepository: Send + Sync {
    /// Create a rating; fails with AlreadyRated on the nightly unique key
    async fn create(&self, rating: &DjRating) -> RepoResult<()>;

    /// Aggregate count and average for a DJ on one night
    async fn summary(&self, dj_id: Snowflake, date: NaiveDate) -> RepoResult<RatingSummary>;

    /// Purge ratings older than the cutoff for past performance dates.
    /// Returns the number removed.
    async fn delete_stale(&self, cutoff: DateTime<Utc>, today: NaiveDate) -> RepoResult<u64>;
}

// ============================================================================
// Booking Repository
// ============================================================================

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find booking by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Booking>>;

    /// List a user's bookings, newest first
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Booking>>;

    /// Create a new booking
    async fn create(&self, booking: &Booking) -> RepoResult<()>;

    /// Update booking status
    async fn update_status(&self, id: Snowflake, status: BookingStatus) -> RepoResult<()>;

    /// Delete a booking
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Prompt Repository
// ============================================================================

#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Find prompt by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<GamePrompt>>;

    /// List active prompts of a kind
    async fn find_by_kind(&self, kind: PromptKind) -> RepoResult<Vec<GamePrompt>>;

    /// Create a new prompt
    async fn create(&self, prompt: &GamePrompt) -> RepoResult<()>;
}

// ============================================================================
// Points Repository
// ============================================================================

#[async_trait]
pub trait PointsRepository: Send + Sync {
    /// Append a ledger entry
    async fn add_entry(&self, entry: &PointEntry) -> RepoResult<()>;

    /// Sum of a user's ledger entries
    async fn balance(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Top balances, highest first
    async fn top(&self, limit: i64) -> RepoResult<Vec<(Snowflake, i64)>>;
}

// ============================================================================
// FAQ Repository
// ============================================================================

#[async_trait]
pub trait FaqRepository: Send + Sync {
    /// List all entries
    async fn find_all(&self) -> RepoResult<Vec<FaqEntry>>;

    /// Create a new entry
    async fn create(&self, entry: &FaqEntry) -> RepoResult<()>;
}
