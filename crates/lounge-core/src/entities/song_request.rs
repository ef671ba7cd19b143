//! Song request entity - a track requested for tonight's set

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Moderation status of a song request, driven by staff/DJ action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Played,
    Declined,
}

impl RequestStatus {
    /// Parse from the database representation
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "played" => Some(Self::Played),
            "declined" => Some(Self::Declined),
            _ => None,
        }
    }

    /// Database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Played => "played",
            Self::Declined => "declined",
        }
    }
}

/// Song request entity
///
/// `vote_count` is denormalized; the vote repository adjusts it in the same
/// transaction as every vote insert/delete so it never drifts from the live
/// vote rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRequest {
    pub id: Snowflake,
    pub song_title: String,
    pub artist: String,
    pub requested_by_name: Option<String>,
    pub vote_count: i32,
    pub status: RequestStatus,
    pub event_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl SongRequest {
    /// Create a new pending request with zero votes
    pub fn new(
        id: Snowflake,
        song_title: String,
        artist: String,
        requested_by_name: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            song_title,
            artist,
            requested_by_name,
            vote_count: 0,
            status: RequestStatus::Pending,
            event_date: now.date_naive(),
            created_at: now,
        }
    }

    /// Check whether this request falls inside the tonight window ending at `now`
    pub fn is_within_window(&self, now: DateTime<Utc>, window: chrono::Duration) -> bool {
        self.created_at >= now - window
    }

    /// Case-insensitive match against a search term over title and artist
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.song_title.to_lowercase().contains(&term) || self.artist.to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_request_defaults() {
        let req = SongRequest::new(
            Snowflake::new(1),
            "Nightcall".to_string(),
            "Kavinsky".to_string(),
            None,
        );
        assert_eq!(req.vote_count, 0);
        assert_eq!(req.status, RequestStatus::Pending);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Played,
            RequestStatus::Declined,
        ] {
            assert_eq!(RequestStatus::from_str_opt(status.as_str()), Some(status));
        }
        assert_eq!(RequestStatus::from_str_opt("bogus"), None);
    }

    #[test]
    fn test_window_membership() {
        let now = Utc::now();
        let mut req = SongRequest::new(Snowflake::new(1), "a".into(), "b".into(), None);

        req.created_at = now - Duration::hours(5);
        assert!(req.is_within_window(now, Duration::hours(6)));

        req.created_at = now - Duration::hours(7);
        assert!(!req.is_within_window(now, Duration::hours(6)));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let req = SongRequest::new(
            Snowflake::new(1),
            "Blue Monday".to_string(),
            "New Order".to_string(),
            None,
        );
        assert!(req.matches_search("monday"));
        assert!(req.matches_search("ORDER"));
        assert!(!req.matches_search("acid"));
    }
}
