//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use lounge_core::entities::{BookingStatus, PromptKind, RequestStatus};

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

/// Token pair returned by the refresh endpoint
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Current authenticated user response (includes email)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Song Request Responses
// ============================================================================

/// A single entry on tonight's board
#[derive(Debug, Clone, Serialize)]
pub struct SongRequestResponse {
    pub id: String,
    pub song_title: String,
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by_name: Option<String>,
    pub vote_count: i32,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    /// Whether the requesting user currently holds a vote on this entry
    pub voted_by_me: bool,
}

/// Ranked snapshot of tonight's board
#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub trending: Vec<SongRequestResponse>,
    pub others: Vec<SongRequestResponse>,
    pub generated_at: DateTime<Utc>,
}

/// Result of a vote toggle
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    /// Whether the user holds a vote on this request after the toggle
    pub voted: bool,
    pub vote_count: i32,
    pub votes_remaining: i64,
}

// ============================================================================
// DJ Rating Responses
// ============================================================================

/// A submitted rating
#[derive(Debug, Clone, Serialize)]
pub struct RatingResponse {
    pub id: String,
    pub dj_id: String,
    pub score: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub performance_date: NaiveDate,
}

/// Aggregated rating summary for a DJ on one night
#[derive(Debug, Clone, Serialize)]
pub struct RatingSummaryResponse {
    pub dj_id: String,
    pub performance_date: NaiveDate,
    pub rating_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
}

// ============================================================================
// Booking Responses
// ============================================================================

/// A table booking
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: String,
    pub guest_name: String,
    pub party_size: i16,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Game Responses
// ============================================================================

/// A drawn or created prompt
#[derive(Debug, Clone, Serialize)]
pub struct PromptResponse {
    pub id: String,
    pub kind: PromptKind,
    pub text: String,
    pub points: i32,
}

/// Result of completing a prompt
#[derive(Debug, Serialize)]
pub struct PromptCompletionResponse {
    pub points_awarded: i32,
    pub balance: i64,
}

/// A user's point balance
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub user_id: String,
    pub balance: i64,
}

/// One leaderboard row
#[derive(Debug, Serialize)]
pub struct LeaderboardEntryResponse {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub balance: i64,
}

// ============================================================================
// FAQ Responses
// ============================================================================

/// Answer from the FAQ responder
#[derive(Debug, Serialize)]
pub struct FaqAnswerResponse {
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl FaqAnswerResponse {
    pub fn no_match() -> Self {
        Self {
            matched: false,
            question: None,
            answer: None,
        }
    }
}

/// A curated FAQ entry
#[derive(Debug, Clone, Serialize)]
pub struct FaqEntryResponse {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub keywords: Vec<String>,
}

// ============================================================================
// Job Responses
// ============================================================================

/// Report from the daily reset job. Always success; per-step failures are
/// logged and the next step still runs.
#[derive(Debug, Serialize)]
pub struct ResetReportResponse {
    pub success: bool,
    pub message: String,
    // Schedulers consume this field by its camelCase wire name
    #[serde(rename = "cutoffTime")]
    pub cutoff_time: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
