//! Domain traits (ports)

mod repositories;

pub use repositories::{
    BookingRepository, DjRatingRepository, FaqRepository, PointsRepository, PromptRepository,
    RepoResult, SongRequestRepository, UserRepository, VoteRepository,
};
