//! Song request entity <-> model mapper

use lounge_core::entities::{RequestStatus, SongRequest};
use lounge_core::value_objects::Snowflake;

use crate::models::SongRequestModel;

/// Convert SongRequestModel to SongRequest entity
impl From<SongRequestModel> for SongRequest {
    fn from(model: SongRequestModel) -> Self {
        SongRequest {
            id: Snowflake::new(model.id),
            song_title: model.song_title,
            artist: model.artist,
            requested_by_name: model.requested_by_name,
            vote_count: model.vote_count,
            // Unknown status values fall back to pending rather than failing the row
            status: RequestStatus::from_str_opt(&model.status).unwrap_or(RequestStatus::Pending),
            event_date: model.event_date,
            created_at: model.created_at,
        }
    }
}
