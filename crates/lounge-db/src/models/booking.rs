//! Booking database model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

/// Database model for bookings table
#[derive(Debug, Clone, FromRow)]
pub struct BookingModel {
    pub id: i64,
    pub user_id: i64,
    pub guest_name: String,
    pub party_size: i16,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
