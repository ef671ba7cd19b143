//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the schema applied
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, seed_pool, TestServer,
};
use reqwest::StatusCode;

async fn register(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.email, request.email);
    assert!(!auth.user.is_staff);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();

    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server
        .post("/api/v1/auth/register", &register_req)
        .await
        .unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "WrongPass1".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let status = response.status();
    assert_eq!(status, StatusCode::FORBIDDEN);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_refresh_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let refresh_req = RefreshTokenRequest {
        refresh_token: auth.refresh_token,
    };
    let response = server
        .post("/api/v1/auth/refresh", &refresh_req)
        .await
        .unwrap();
    let tokens: TokenPairResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!tokens.access_token.is_empty());
    assert!(!tokens.refresh_token.is_empty());
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .get_auth("/api/v1/users/@me", &auth.access_token)
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, auth.user.id);
    assert_eq!(user.email, auth.user.email);
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Song Request Tests
// ============================================================================

#[tokio::test]
async fn test_submit_request() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let request = CreateSongRequest::unique();
    let response = server
        .post_auth("/api/v1/requests", &auth.access_token, &request)
        .await
        .unwrap();
    let created: SongRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.song_title, request.song_title);
    assert_eq!(created.vote_count, 0);
    assert_eq!(created.status, "pending");
    assert!(!created.voted_by_me);
}

#[tokio::test]
async fn test_submit_request_blocked_language() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let request = CreateSongRequest {
        song_title: "this song is shit".to_string(),
        artist: "someone".to_string(),
        requested_by_name: None,
    };
    let response = server
        .post_auth("/api/v1/requests", &auth.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_ranking_includes_submission() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let request = CreateSongRequest::unique();
    let response = server
        .post_auth("/api/v1/requests", &auth.access_token, &request)
        .await
        .unwrap();
    let created: SongRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get("/api/v1/requests").await.unwrap();
    let board: RankingResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let all: Vec<&SongRequestResponse> =
        board.trending.iter().chain(board.others.iter()).collect();
    assert!(all.iter().any(|r| r.id == created.id));
}

#[tokio::test]
async fn test_ranking_search_filter() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let request = CreateSongRequest::unique();
    server
        .post_auth("/api/v1/requests", &auth.access_token, &request)
        .await
        .unwrap();

    // Search for something that cannot match
    let response = server
        .get("/api/v1/requests?q=zzzzzz-no-such-track")
        .await
        .unwrap();
    let board: RankingResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(board.trending.is_empty());
    assert!(board.others.is_empty());
}

// ============================================================================
// Vote Tests
// ============================================================================

#[tokio::test]
async fn test_vote_toggle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let request = CreateSongRequest::unique();
    let response = server
        .post_auth("/api/v1/requests", &auth.access_token, &request)
        .await
        .unwrap();
    let created: SongRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let vote_path = format!("/api/v1/requests/{}/vote/@me", created.id);

    // First toggle adds the vote
    let response = server.put_auth(&vote_path, &auth.access_token).await.unwrap();
    let vote: VoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(vote.voted);
    assert_eq!(vote.vote_count, 1);

    // Second toggle removes it
    let response = server.put_auth(&vote_path, &auth.access_token).await.unwrap();
    let vote: VoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!vote.voted);
    assert_eq!(vote.vote_count, 0);
}

#[tokio::test]
async fn test_vote_cap_enforced() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    // Submit four requests and vote on the first three
    let mut ids = Vec::new();
    for _ in 0..4 {
        let request = CreateSongRequest::unique();
        let response = server
            .post_auth("/api/v1/requests", &auth.access_token, &request)
            .await
            .unwrap();
        let created: SongRequestResponse =
            assert_json(response, StatusCode::CREATED).await.unwrap();
        ids.push(created.id);
    }

    for id in &ids[..3] {
        let response = server
            .put_auth(&format!("/api/v1/requests/{id}/vote/@me"), &auth.access_token)
            .await
            .unwrap();
        let vote: VoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(vote.voted);
    }

    // Fourth vote hits the cap
    let response = server
        .put_auth(
            &format!("/api/v1/requests/{}/vote/@me", ids[3]),
            &auth.access_token,
        )
        .await
        .unwrap();
    let status = response.status();
    assert_eq!(status, StatusCode::CONFLICT);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error.code, "VOTE_LIMIT_EXCEEDED");

    // Freeing a slot lets the fourth vote through
    let response = server
        .put_auth(
            &format!("/api/v1/requests/{}/vote/@me", ids[0]),
            &auth.access_token,
        )
        .await
        .unwrap();
    let vote: VoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!vote.voted);

    let response = server
        .put_auth(
            &format!("/api/v1/requests/{}/vote/@me", ids[3]),
            &auth.access_token,
        )
        .await
        .unwrap();
    let vote: VoteResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(vote.voted);
    assert_eq!(vote.votes_remaining, 0);
}

#[tokio::test]
async fn test_vote_unknown_request() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .put_auth("/api/v1/requests/999999999999/vote/@me", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Staff Moderation Tests
// ============================================================================

#[tokio::test]
async fn test_update_status_requires_staff() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let request = CreateSongRequest::unique();
    let response = server
        .post_auth("/api/v1/requests", &auth.access_token, &request)
        .await
        .unwrap();
    let created: SongRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let body = serde_json::json!({ "status": "approved" });
    let response = server
        .patch_auth(
            &format!("/api/v1/requests/{}", created.id),
            &auth.access_token,
            &body,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_delete_request_requires_staff() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let request = CreateSongRequest::unique();
    let response = server
        .post_auth("/api/v1/requests", &auth.access_token, &request)
        .await
        .unwrap();
    let created: SongRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/requests/{}", created.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// DJ Rating Tests
// ============================================================================

#[tokio::test]
async fn test_rate_dj_once_per_night() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    // Any snowflake works as a DJ id; ratings do not reference users
    let dj_id = "424242424242";
    let rating = CreateRatingRequest {
        score: 4,
        comment: Some("great set".to_string()),
    };

    let response = server
        .post_auth(
            &format!("/api/v1/djs/{dj_id}/ratings"),
            &auth.access_token,
            &rating,
        )
        .await
        .unwrap();
    let created: RatingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.score, 4);

    // Same user rating the same DJ again tonight conflicts
    let response = server
        .post_auth(
            &format!("/api/v1/djs/{dj_id}/ratings"),
            &auth.access_token,
            &rating,
        )
        .await
        .unwrap();
    let status = response.status();
    assert_eq!(status, StatusCode::CONFLICT);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error.code, "ALREADY_RATED");
}

#[tokio::test]
async fn test_rating_summary() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let dj_id = "515151515151";
    let rating = CreateRatingRequest {
        score: 5,
        comment: None,
    };
    server
        .post_auth(
            &format!("/api/v1/djs/{dj_id}/ratings"),
            &auth.access_token,
            &rating,
        )
        .await
        .unwrap();

    let response = server
        .get(&format!("/api/v1/djs/{dj_id}/ratings/summary"))
        .await
        .unwrap();
    let summary: RatingSummaryResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(summary.rating_count >= 1);
    assert!(summary.average_score.is_some());
}

#[tokio::test]
async fn test_rating_score_out_of_range() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let rating = CreateRatingRequest {
        score: 6,
        comment: None,
    };
    let response = server
        .post_auth("/api/v1/djs/616161/ratings", &auth.access_token, &rating)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

// ============================================================================
// Booking Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_bookings() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let request = CreateBookingRequest::unique();
    let response = server
        .post_auth("/api/v1/bookings", &auth.access_token, &request)
        .await
        .unwrap();
    let created: BookingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.status, "pending");

    let response = server
        .get_auth("/api/v1/bookings/@me", &auth.access_token)
        .await
        .unwrap();
    let bookings: Vec<BookingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(bookings.iter().any(|b| b.id == created.id));
}

#[tokio::test]
async fn test_cancel_own_booking() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let request = CreateBookingRequest::unique();
    let response = server
        .post_auth("/api/v1/bookings", &auth.access_token, &request)
        .await
        .unwrap();
    let created: BookingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/bookings/{}", created.id), &auth.access_token)
        .await
        .unwrap();
    let cancelled: BookingResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(cancelled.status, "cancelled");
}

#[tokio::test]
async fn test_cannot_cancel_other_users_booking() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = register(&server).await;
    let stranger = register(&server).await;

    let request = CreateBookingRequest::unique();
    let response = server
        .post_auth("/api/v1/bookings", &owner.access_token, &request)
        .await
        .unwrap();
    let created: BookingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/bookings/{}", created.id),
            &stranger.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Game Tests
// ============================================================================

#[tokio::test]
async fn test_create_prompt_requires_staff() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let prompt = CreatePromptRequest {
        kind: "dare".to_string(),
        text: "Request a polka song".to_string(),
        points: None,
    };
    let response = server
        .post_auth("/api/v1/game/prompts", &auth.access_token, &prompt)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_draw_prompt_unknown_kind() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .get_auth("/api/v1/game/prompts/draw?kind=riddle", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_completion_awards_the_prompts_points() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let pool = seed_pool().await.expect("Failed to connect to database");

    // Seed a prompt whose point value differs from the kind default
    let prompt_id = seed_id();
    sqlx::query(
        "INSERT INTO game_prompts (id, kind, text, points, active, created_at)
         VALUES ($1, 'dare', 'Lead a conga line', 25, true, now())",
    )
    .bind(prompt_id)
    .execute(&pool)
    .await
    .unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/game/prompts/{prompt_id}/complete"),
            &auth.access_token,
            &(),
        )
        .await
        .unwrap();
    let completion: PromptCompletionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(completion.points_awarded, 25);
    assert_eq!(completion.balance, 25);
}

#[tokio::test]
async fn test_points_start_at_zero() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .get_auth("/api/v1/game/points/@me", &auth.access_token)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["balance"], 0);
}

// ============================================================================
// FAQ Tests
// ============================================================================

#[tokio::test]
async fn test_faq_no_match() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let question = AskFaqRequest {
        question: "xyzzy plugh frobnicate".to_string(),
    };
    let response = server.post("/api/v1/faq/ask", &question).await.unwrap();
    let answer: FaqAnswerResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!answer.matched);
    assert!(answer.answer.is_none());
}

#[tokio::test]
async fn test_faq_create_requires_staff() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let entry = serde_json::json!({
        "question": "What time do you open?",
        "answer": "8pm.",
        "keywords": ["open", "hours"],
    });
    let response = server
        .post_auth("/api/v1/faq", &auth.access_token, &entry)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Daily Reset Tests
// ============================================================================

#[tokio::test]
async fn test_daily_reset_succeeds_and_is_idempotent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/jobs/daily-reset", &()).await.unwrap();
    let report: ResetReportResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(report.success);

    // A second run finds nothing left and still reports success
    let response = server.post("/jobs/daily-reset", &()).await.unwrap();
    let report: ResetReportResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(report.success);
}

#[tokio::test]
async fn test_daily_reset_keeps_prior_night_ratings() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let user_id: i64 = auth.user.id.parse().unwrap();
    let pool = seed_pool().await.expect("Failed to connect to database");

    let dj_id = seed_id();
    let prior_night_id = seed_id();
    let stale_tonight_id = seed_id();

    // A prior night's rating, well past the retention window
    sqlx::query(
        "INSERT INTO dj_ratings (id, dj_id, user_id, score, comment, performance_date, created_at)
         VALUES ($1, $2, $3, 4, NULL, (now() - interval '1 day')::date, now() - interval '25 hours')",
    )
    .bind(prior_night_id)
    .bind(dj_id)
    .bind(user_id)
    .execute(&pool)
    .await
    .unwrap();

    // A stale rating dated tonight
    sqlx::query(
        "INSERT INTO dj_ratings (id, dj_id, user_id, score, comment, performance_date, created_at)
         VALUES ($1, $2, $3, 4, NULL, now()::date, now() - interval '25 hours')",
    )
    .bind(stale_tonight_id)
    .bind(dj_id)
    .bind(user_id)
    .execute(&pool)
    .await
    .unwrap();

    let response = server.post("/jobs/daily-reset", &()).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let (prior_kept,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM dj_ratings WHERE id = $1")
        .bind(prior_night_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(prior_kept, 1, "prior night's rating survives for reporting");

    let (stale_kept,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM dj_ratings WHERE id = $1")
        .bind(stale_tonight_id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stale_kept, 0, "tonight's stale rating is purged");
}

#[tokio::test]
async fn test_daily_reset_keeps_fresh_requests() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let request = CreateSongRequest::unique();
    let response = server
        .post_auth("/api/v1/requests", &auth.access_token, &request)
        .await
        .unwrap();
    let created: SongRequestResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    server.post("/jobs/daily-reset", &()).await.unwrap();

    // A just-submitted request is inside the window and survives
    let response = server
        .get(&format!("/api/v1/requests/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
