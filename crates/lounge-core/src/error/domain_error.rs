//! Domain error type shared across layers

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("song request not found")]
    RequestNotFound,

    #[error("user not found")]
    UserNotFound,

    #[error("booking not found")]
    BookingNotFound,

    #[error("prompt not found")]
    PromptNotFound,

    #[error("FAQ entry not found")]
    FaqNotFound,

    #[error("vote limit of {limit} active votes reached")]
    VoteLimitExceeded { limit: i64 },

    #[error("already rated this DJ tonight")]
    AlreadyRated,

    #[error("email already registered")]
    EmailTaken,

    #[error("submission contains blocked language")]
    ProfaneContent,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("staff access required")]
    NotStaff,

    #[error("not the owner of this resource")]
    NotOwner,

    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("{field} exceeds maximum length of {max}")]
    ContentTooLong { field: &'static str, max: usize },

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::RequestNotFound => "REQUEST_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::BookingNotFound => "BOOKING_NOT_FOUND",
            Self::PromptNotFound => "PROMPT_NOT_FOUND",
            Self::FaqNotFound => "FAQ_NOT_FOUND",
            Self::VoteLimitExceeded { .. } => "VOTE_LIMIT_EXCEEDED",
            Self::AlreadyRated => "ALREADY_RATED",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::ProfaneContent => "PROFANE_CONTENT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotStaff => "NOT_STAFF",
            Self::NotOwner => "NOT_OWNER",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RequestNotFound
                | Self::UserNotFound
                | Self::BookingNotFound
                | Self::PromptNotFound
                | Self::FaqNotFound
        )
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::ContentTooLong { .. } | Self::ProfaneContent
        )
    }

    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::VoteLimitExceeded { .. } | Self::AlreadyRated | Self::EmailTaken
        )
    }

    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials | Self::NotStaff | Self::NotOwner
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(DomainError::RequestNotFound.is_not_found());
        assert!(DomainError::ProfaneContent.is_validation());
        assert!(DomainError::VoteLimitExceeded { limit: 3 }.is_conflict());
        assert!(DomainError::NotStaff.is_authorization());
        assert!(!DomainError::NotStaff.is_conflict());
    }

    #[test]
    fn test_codes_stable() {
        assert_eq!(
            DomainError::VoteLimitExceeded { limit: 3 }.code(),
            "VOTE_LIMIT_EXCEEDED"
        );
        assert_eq!(DomainError::AlreadyRated.code(), "ALREADY_RATED");
    }

    #[test]
    fn test_display_carries_limit() {
        let msg = DomainError::VoteLimitExceeded { limit: 3 }.to_string();
        assert!(msg.contains('3'));
    }
}
