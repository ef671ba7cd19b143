//! Path parameter helpers
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use lounge_core::Snowflake;

use crate::response::ApiError;

/// Parse a path segment as a Snowflake ID
pub fn parse_id(raw: &str, name: &str) -> Result<Snowflake, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid {name} format")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert!(parse_id("123456789", "request_id").is_ok());
        assert!(parse_id("not-a-number", "request_id").is_err());
    }
}
