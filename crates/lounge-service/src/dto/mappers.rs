//! Entity to DTO mappers

use lounge_core::entities::{Booking, DjRating, FaqEntry, GamePrompt, RatingSummary, SongRequest, User};

use super::responses::{
    BookingResponse, CurrentUserResponse, FaqEntryResponse, PromptResponse, RatingResponse,
    RatingSummaryResponse, SongRequestResponse,
};

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            is_staff: user.is_staff,
            created_at: user.created_at,
        }
    }
}

impl SongRequestResponse {
    /// Build a response, marking whether the viewing user holds a vote
    pub fn from_entity(request: &SongRequest, voted_by_me: bool) -> Self {
        Self {
            id: request.id.to_string(),
            song_title: request.song_title.clone(),
            artist: request.artist.clone(),
            requested_by_name: request.requested_by_name.clone(),
            vote_count: request.vote_count,
            status: request.status,
            created_at: request.created_at,
            voted_by_me,
        }
    }
}

impl From<&DjRating> for RatingResponse {
    fn from(rating: &DjRating) -> Self {
        Self {
            id: rating.id.to_string(),
            dj_id: rating.dj_id.to_string(),
            score: rating.score,
            comment: rating.comment.clone(),
            performance_date: rating.performance_date,
        }
    }
}

impl From<&RatingSummary> for RatingSummaryResponse {
    fn from(summary: &RatingSummary) -> Self {
        Self {
            dj_id: summary.dj_id.to_string(),
            performance_date: summary.performance_date,
            rating_count: summary.rating_count,
            average_score: summary.average_score,
        }
    }
}

impl From<&Booking> for BookingResponse {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            guest_name: booking.guest_name.clone(),
            party_size: booking.party_size,
            booking_date: booking.booking_date,
            booking_time: booking.booking_time,
            notes: booking.notes.clone(),
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}

impl From<&GamePrompt> for PromptResponse {
    fn from(prompt: &GamePrompt) -> Self {
        Self {
            id: prompt.id.to_string(),
            kind: prompt.kind,
            text: prompt.text.clone(),
            points: prompt.points,
        }
    }
}

impl From<&FaqEntry> for FaqEntryResponse {
    fn from(entry: &FaqEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            question: entry.question.clone(),
            answer: entry.answer.clone(),
            keywords: entry.keywords.clone(),
        }
    }
}
