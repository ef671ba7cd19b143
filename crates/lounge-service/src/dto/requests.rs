//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; most add `Validate` for input
//! validation at the edge.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 2, max = 32, message = "Display name must be 2-32 characters"))]
    pub display_name: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Song Request Requests
// ============================================================================

/// Submit a song request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSongRequest {
    #[validate(length(min = 1, max = 200, message = "Song title must be 1-200 characters"))]
    pub song_title: String,

    #[validate(length(min = 1, max = 200, message = "Artist must be 1-200 characters"))]
    pub artist: String,

    /// Optional display name shown on the board
    #[validate(length(max = 64, message = "Name must be at most 64 characters"))]
    pub requested_by_name: Option<String>,
}

/// Staff status change on a request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequestStatusRequest {
    /// One of: pending, approved, played, declined
    pub status: String,
}

/// Optional search filter for the ranking view
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingQuery {
    pub q: Option<String>,
}

// ============================================================================
// DJ Rating Requests
// ============================================================================

/// Rate tonight's DJ
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRatingRequest {
    #[validate(range(min = 1, max = 5, message = "Score must be between 1 and 5"))]
    pub score: i16,

    #[validate(length(max = 500, message = "Comment must be at most 500 characters"))]
    pub comment: Option<String>,
}

// ============================================================================
// Booking Requests
// ============================================================================

/// Create a table booking
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, max = 64, message = "Guest name must be 1-64 characters"))]
    pub guest_name: String,

    #[validate(range(min = 1, max = 20, message = "Party size must be between 1 and 20"))]
    pub party_size: i16,

    /// ISO date, e.g. 2026-09-12
    pub booking_date: chrono::NaiveDate,

    /// Time of day, e.g. 21:30:00
    pub booking_time: chrono::NaiveTime,

    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub notes: Option<String>,
}

/// Staff status change on a booking
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBookingStatusRequest {
    /// One of: pending, confirmed, cancelled
    pub status: String,
}

// ============================================================================
// Game Requests
// ============================================================================

/// Staff-seeded prompt
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePromptRequest {
    /// One of: truth, dare
    pub kind: String,

    #[validate(length(min = 1, max = 500, message = "Prompt text must be 1-500 characters"))]
    pub text: String,

    /// Omitted means the kind's default value
    #[validate(range(min = 0, message = "Points must not be negative"))]
    pub points: Option<i32>,
}

/// Query for drawing a prompt
#[derive(Debug, Clone, Deserialize)]
pub struct DrawPromptQuery {
    /// One of: truth, dare
    pub kind: String,
}

// ============================================================================
// FAQ Requests
// ============================================================================

/// Free-form question for the FAQ responder
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AskFaqRequest {
    #[validate(length(min = 1, max = 500, message = "Question must be 1-500 characters"))]
    pub question: String,
}

/// Staff-curated FAQ entry
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFaqRequest {
    #[validate(length(min = 1, max = 500, message = "Question must be 1-500 characters"))]
    pub question: String,

    #[validate(length(min = 1, max = 2000, message = "Answer must be 1-2000 characters"))]
    pub answer: String,

    #[validate(length(min = 1, message = "At least one keyword is required"))]
    pub keywords: Vec<String>,
}
