//! Booking entity <-> model mapper

use lounge_core::entities::{Booking, BookingStatus};
use lounge_core::value_objects::Snowflake;

use crate::models::BookingModel;

/// Convert BookingModel to Booking entity
impl From<BookingModel> for Booking {
    fn from(model: BookingModel) -> Self {
        Booking {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            guest_name: model.guest_name,
            party_size: model.party_size,
            booking_date: model.booking_date,
            booking_time: model.booking_time,
            notes: model.notes,
            status: BookingStatus::from_str_opt(&model.status).unwrap_or(BookingStatus::Pending),
            created_at: model.created_at,
        }
    }
}
