//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// A registered guest or staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Snowflake,
    pub email: String,
    pub display_name: String,
    /// Staff accounts can moderate requests, seed prompts, and manage FAQ.
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Snowflake, email: String, display_name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            display_name,
            is_staff: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Minimal email shape check; real validation happens at the DTO layer
    pub fn is_valid_email(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
    }

    pub fn is_valid_display_name(name: &str) -> bool {
        let trimmed = name.trim();
        (2..=32).contains(&trimmed.chars().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_guest() {
        let user = User::new(Snowflake::new(1), "a@b.io".into(), "Alice".into());
        assert!(!user.is_staff);
    }

    #[test]
    fn test_email_shape() {
        assert!(User::is_valid_email("guest@example.com"));
        assert!(!User::is_valid_email("no-at-sign"));
        assert!(!User::is_valid_email("@example.com"));
        assert!(!User::is_valid_email("a@nodot"));
    }

    #[test]
    fn test_display_name_length() {
        assert!(User::is_valid_display_name("DJ"));
        assert!(!User::is_valid_display_name("x"));
        assert!(!User::is_valid_display_name(&"y".repeat(33)));
        assert!(!User::is_valid_display_name("   "));
    }
}
