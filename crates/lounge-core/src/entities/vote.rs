//! Vote entity - one upvote by one user on one song request

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// A single vote. Unique per (song_request_id, user_id); the store enforces
/// the constraint and concurrent duplicate inserts collapse to one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: Snowflake,
    pub song_request_id: Snowflake,
    pub user_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    pub fn new(id: Snowflake, song_request_id: Snowflake, user_id: Snowflake) -> Self {
        Self {
            id,
            song_request_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vote() {
        let vote = Vote::new(Snowflake::new(1), Snowflake::new(2), Snowflake::new(3));
        assert_eq!(vote.song_request_id, Snowflake::new(2));
        assert_eq!(vote.user_id, Snowflake::new(3));
    }
}
