//! Table booking entity

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

pub const MIN_PARTY_SIZE: i16 = 1;
pub const MAX_PARTY_SIZE: i16 = 20;

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A table reservation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub guest_name: String,
    pub party_size: i16,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Snowflake,
        user_id: Snowflake,
        guest_name: String,
        party_size: i16,
        booking_date: NaiveDate,
        booking_time: NaiveTime,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            guest_name,
            party_size,
            booking_date,
            booking_time,
            notes,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn is_valid_party_size(size: i16) -> bool {
        (MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&size)
    }

    /// Cancellation is allowed while the booking is not already cancelled
    pub fn can_cancel(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }
}
