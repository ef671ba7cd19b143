//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Unique id for rows seeded directly into the database
#[allow(clippy::cast_possible_wrap)]
pub fn seed_id() -> i64 {
    chrono::Utc::now().timestamp_micros() + unique_suffix() as i64
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub display_name: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("guest{suffix}@example.com"),
            display_name: format!("Guest {suffix}"),
            password: "NightOwl123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub is_staff: bool,
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Token pair response
#[derive(Debug, Deserialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Submit a song request
#[derive(Debug, Serialize)]
pub struct CreateSongRequest {
    pub song_title: String,
    pub artist: String,
    pub requested_by_name: Option<String>,
}

impl CreateSongRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            song_title: format!("Test Track {suffix}"),
            artist: format!("Test Artist {suffix}"),
            requested_by_name: None,
        }
    }
}

/// Song request response
#[derive(Debug, Deserialize)]
pub struct SongRequestResponse {
    pub id: String,
    pub song_title: String,
    pub artist: String,
    pub vote_count: i32,
    pub status: String,
    pub voted_by_me: bool,
}

/// Ranked board response
#[derive(Debug, Deserialize)]
pub struct RankingResponse {
    pub trending: Vec<SongRequestResponse>,
    pub others: Vec<SongRequestResponse>,
}

/// Vote toggle response
#[derive(Debug, Deserialize)]
pub struct VoteResponse {
    pub voted: bool,
    pub vote_count: i32,
    pub votes_remaining: i64,
}

/// Rate a DJ
#[derive(Debug, Serialize)]
pub struct CreateRatingRequest {
    pub score: i16,
    pub comment: Option<String>,
}

/// Rating response
#[derive(Debug, Deserialize)]
pub struct RatingResponse {
    pub id: String,
    pub dj_id: String,
    pub score: i16,
}

/// Rating summary response
#[derive(Debug, Deserialize)]
pub struct RatingSummaryResponse {
    pub dj_id: String,
    pub rating_count: i64,
    pub average_score: Option<f64>,
}

/// Create a booking
#[derive(Debug, Serialize)]
pub struct CreateBookingRequest {
    pub guest_name: String,
    pub party_size: i16,
    pub booking_date: String,
    pub booking_time: String,
    pub notes: Option<String>,
}

impl CreateBookingRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            guest_name: format!("Party {suffix}"),
            party_size: 4,
            booking_date: "2026-12-18".to_string(),
            booking_time: "21:30:00".to_string(),
            notes: None,
        }
    }
}

/// Booking response
#[derive(Debug, Deserialize)]
pub struct BookingResponse {
    pub id: String,
    pub guest_name: String,
    pub party_size: i16,
    pub status: String,
}

/// Seed a game prompt (staff only)
#[derive(Debug, Serialize)]
pub struct CreatePromptRequest {
    pub kind: String,
    pub text: String,
    pub points: Option<i32>,
}

/// Result of completing a prompt
#[derive(Debug, Deserialize)]
pub struct PromptCompletionResponse {
    pub points_awarded: i32,
    pub balance: i64,
}

/// Ask the FAQ responder
#[derive(Debug, Serialize)]
pub struct AskFaqRequest {
    pub question: String,
}

/// FAQ answer response
#[derive(Debug, Deserialize)]
pub struct FaqAnswerResponse {
    pub matched: bool,
    pub question: Option<String>,
    pub answer: Option<String>,
}

/// Daily reset report
#[derive(Debug, Deserialize)]
pub struct ResetReportResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "cutoffTime")]
    pub cutoff_time: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
