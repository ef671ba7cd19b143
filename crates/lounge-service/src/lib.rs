//! # lounge-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export DTOs and services so handlers can import from the crate root
pub use dto::requests::{
    AskFaqRequest, CreateBookingRequest, CreateFaqRequest, CreatePromptRequest,
    CreateRatingRequest, CreateSongRequest, DrawPromptQuery, LoginRequest, RankingQuery,
    RefreshTokenRequest, RegisterRequest, UpdateBookingStatusRequest, UpdateRequestStatusRequest,
};
pub use dto::responses::{
    ApiResponse, AuthResponse, BookingResponse, CurrentUserResponse, FaqAnswerResponse,
    FaqEntryResponse, HealthChecks, HealthResponse, LeaderboardEntryResponse, PointsResponse,
    PromptCompletionResponse, PromptResponse, RankingResponse, RatingResponse,
    RatingSummaryResponse, ReadinessResponse, ResetReportResponse, SongRequestResponse,
    TokenResponse, VoteResponse,
};
pub use services::{
    AuthService, BookingService, CleanupService, DjRatingService, FaqService, GameService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SongRequestService,
    VoteService,
};
