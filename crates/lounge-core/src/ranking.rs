//! Tonight's ranking - pure ordering and partition logic
//!
//! Kept free of IO so the cap and ordering rules unit-test without a store.

use chrono::{DateTime, Duration, Utc};

use crate::entities::SongRequest;

/// Maximum active votes a single user may hold inside the tonight window
pub const MAX_VOTES_PER_USER: i64 = 3;

/// How far back "tonight" reaches
pub const TONIGHT_WINDOW_HOURS: i64 = 6;

/// DJ ratings older than this are purged by the daily reset
pub const RATING_RETENTION_HOURS: i64 = 24;

/// Size of the trending section at the top of the board
pub const TRENDING_COUNT: usize = 3;

/// The tonight window as a chrono duration
pub fn tonight_window() -> Duration {
    Duration::hours(TONIGHT_WINDOW_HOURS)
}

/// Cutoff instant for the tonight window ending at `now`
pub fn window_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - tonight_window()
}

/// A ranked snapshot of tonight's board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedBoard {
    /// Top entries by votes, at most [`TRENDING_COUNT`]
    pub trending: Vec<SongRequest>,
    /// Everything else, in the same order
    pub others: Vec<SongRequest>,
}

impl RankedBoard {
    pub fn total(&self) -> usize {
        self.trending.len() + self.others.len()
    }
}

/// Rank tonight's requests.
///
/// Filters to the 6-hour window ending at `now`, applies an optional
/// case-insensitive search over title and artist, sorts by vote count
/// descending with creation time ascending as the tiebreak, and splits
/// the head of the list into the trending section.
pub fn rank_requests(
    requests: Vec<SongRequest>,
    now: DateTime<Utc>,
    search: Option<&str>,
) -> RankedBoard {
    let window = tonight_window();
    let mut visible: Vec<SongRequest> = requests
        .into_iter()
        .filter(|r| r.is_within_window(now, window))
        .filter(|r| match search {
            Some(term) if !term.trim().is_empty() => r.matches_search(term.trim()),
            _ => true,
        })
        .collect();

    visible.sort_by(|a, b| {
        b.vote_count
            .cmp(&a.vote_count)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });

    let split = visible.len().min(TRENDING_COUNT);
    let others = visible.split_off(split);
    RankedBoard {
        trending: visible,
        others,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Snowflake;

    fn request(id: i64, votes: i32, age_hours: i64) -> SongRequest {
        let mut req = SongRequest::new(
            Snowflake::new(id),
            format!("song-{id}"),
            format!("artist-{id}"),
            None,
        );
        req.vote_count = votes;
        req.created_at = Utc::now() - Duration::hours(age_hours);
        req
    }

    #[test]
    fn test_orders_by_votes_then_age() {
        let now = Utc::now();
        let board = rank_requests(
            vec![request(1, 2, 1), request(2, 5, 2), request(3, 5, 3)],
            now,
            None,
        );
        // Equal votes: the older request (3) wins the tiebreak.
        let ids: Vec<i64> = board
            .trending
            .iter()
            .map(|r| r.id.into_inner())
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_excludes_requests_outside_window() {
        let now = Utc::now();
        let board = rank_requests(vec![request(1, 9, 7), request(2, 1, 1)], now, None);
        assert_eq!(board.total(), 1);
        assert_eq!(board.trending[0].id.into_inner(), 2);
    }

    #[test]
    fn test_partitions_trending_and_others() {
        let now = Utc::now();
        let board = rank_requests(
            (1..=5).map(|i| request(i, 10 - i as i32, 1)).collect(),
            now,
            None,
        );
        assert_eq!(board.trending.len(), TRENDING_COUNT);
        assert_eq!(board.others.len(), 2);
        // Every trending entry has at least as many votes as any other entry.
        let min_trending = board.trending.iter().map(|r| r.vote_count).min().unwrap();
        let max_other = board.others.iter().map(|r| r.vote_count).max().unwrap();
        assert!(min_trending >= max_other);
    }

    #[test]
    fn test_small_board_has_no_others() {
        let now = Utc::now();
        let board = rank_requests(vec![request(1, 0, 1), request(2, 0, 2)], now, None);
        assert_eq!(board.trending.len(), 2);
        assert!(board.others.is_empty());
    }

    #[test]
    fn test_search_filters_before_partition() {
        let now = Utc::now();
        let mut named = request(1, 0, 1);
        named.song_title = "Midnight City".to_string();
        named.artist = "M83".to_string();

        let board = rank_requests(vec![named, request(2, 99, 1)], now, Some("midnight"));
        assert_eq!(board.total(), 1);
        assert_eq!(board.trending[0].id.into_inner(), 1);
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let now = Utc::now();
        let board = rank_requests(vec![request(1, 0, 1)], now, Some("   "));
        assert_eq!(board.total(), 1);
    }
}
