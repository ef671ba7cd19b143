//! Data transfer objects for API requests and responses
//!
//! Request DTOs carry validation for API inputs; response DTOs serialize
//! API outputs; mappers convert domain entities to DTOs.

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AskFaqRequest, CreateBookingRequest, CreateFaqRequest, CreatePromptRequest,
    CreateRatingRequest, CreateSongRequest, DrawPromptQuery, LoginRequest, RankingQuery,
    RefreshTokenRequest, RegisterRequest, UpdateBookingStatusRequest, UpdateRequestStatusRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, AuthResponse, BookingResponse, CurrentUserResponse, FaqAnswerResponse,
    FaqEntryResponse, HealthChecks, HealthResponse, LeaderboardEntryResponse, PointsResponse,
    PromptCompletionResponse, PromptResponse, RankingResponse, RatingResponse,
    RatingSummaryResponse, ReadinessResponse, ResetReportResponse, SongRequestResponse,
    TokenResponse, VoteResponse,
};
