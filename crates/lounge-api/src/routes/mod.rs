//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{auth, bookings, faq, game, health, jobs, ratings, requests, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .route("/jobs/daily-reset", post(jobs::daily_reset))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(request_routes())
        .merge(rating_routes())
        .merge(booking_routes())
        .merge(game_routes())
        .merge(faq_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/@me", get(users::get_current_user))
}

/// Song request and voting routes
fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/requests", get(requests::get_ranking))
        .route("/requests", post(requests::create_request))
        .route("/requests/:request_id", get(requests::get_request))
        .route("/requests/:request_id", patch(requests::update_request_status))
        .route("/requests/:request_id", delete(requests::delete_request))
        .route("/requests/:request_id/vote/@me", put(requests::toggle_vote))
}

/// DJ rating routes
fn rating_routes() -> Router<AppState> {
    Router::new()
        .route("/djs/:dj_id/ratings", post(ratings::create_rating))
        .route("/djs/:dj_id/ratings/summary", get(ratings::get_rating_summary))
}

/// Booking routes
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(bookings::create_booking))
        .route("/bookings/@me", get(bookings::get_my_bookings))
        .route("/bookings/:booking_id", patch(bookings::update_booking_status))
        .route("/bookings/:booking_id", delete(bookings::cancel_booking))
}

/// Truth-or-dare game routes
fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/game/prompts", post(game::create_prompt))
        .route("/game/prompts/draw", get(game::draw_prompt))
        .route("/game/prompts/:prompt_id/complete", post(game::complete_prompt))
        .route("/game/points/@me", get(game::get_my_points))
        .route("/game/leaderboard", get(game::get_leaderboard))
}

/// FAQ routes
fn faq_routes() -> Router<AppState> {
    Router::new()
        .route("/faq", get(faq::list_entries))
        .route("/faq", post(faq::create_entry))
        .route("/faq/ask", post(faq::ask))
}
