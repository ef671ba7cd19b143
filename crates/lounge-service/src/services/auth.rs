//! Authentication service - registration, login, token refresh

use tracing::{info, instrument, warn};

use lounge_common::auth::{validate_password_strength, PasswordService};
use lounge_core::entities::User;
use lounge_core::{DomainError, Snowflake};

use crate::dto::requests::{LoginRequest, RegisterRequest};
use crate::dto::responses::{AuthResponse, CurrentUserResponse, TokenResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
    password_service: PasswordService,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            ctx,
            password_service: PasswordService::new(),
        }
    }

    /// Register a new guest account
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password)?;

        let email = request.email.trim().to_lowercase();
        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(DomainError::EmailTaken.into());
        }

        let password_hash = self.password_service.hash(&request.password)?;
        let user = User::new(
            self.ctx.generate_id(),
            email,
            request.display_name.trim().to_string(),
        );
        self.ctx.user_repo().create(&user, &password_hash).await?;

        let tokens = self.ctx.jwt_service().generate_token_pair(user.id)?;
        info!(user_id = %user.id, "user registered");

        Ok(AuthResponse::new(
            tokens.access_token,
            tokens.refresh_token,
            tokens.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Authenticate with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let email = request.email.trim().to_lowercase();

        let Some(user) = self.ctx.user_repo().find_by_email(&email).await? else {
            warn!("login attempt for unknown email");
            return Err(DomainError::InvalidCredentials.into());
        };

        let Some(hash) = self.ctx.user_repo().get_password_hash(user.id).await? else {
            warn!(user_id = %user.id, "user has no password hash");
            return Err(DomainError::InvalidCredentials.into());
        };

        if !self.password_service.verify(&request.password, &hash)? {
            warn!(user_id = %user.id, "login failed: bad password");
            return Err(DomainError::InvalidCredentials.into());
        }

        let tokens = self.ctx.jwt_service().generate_token_pair(user.id)?;
        info!(user_id = %user.id, "user logged in");

        Ok(AuthResponse::new(
            tokens.access_token,
            tokens.refresh_token,
            tokens.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Mint a fresh token pair from a valid refresh token
    #[instrument(skip(self, refresh_token))]
    pub fn refresh(&self, refresh_token: &str) -> ServiceResult<TokenResponse> {
        let tokens = self.ctx.jwt_service().refresh_tokens(refresh_token)?;

        Ok(TokenResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
        })
    }

    /// Fetch the authenticated user's own profile
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        Ok(CurrentUserResponse::from(&user))
    }
}
