//! PostgreSQL implementation of BookingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lounge_core::entities::{Booking, BookingStatus};
use lounge_core::traits::{BookingRepository, RepoResult};
use lounge_core::value_objects::Snowflake;

use crate::models::BookingModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BookingRepository
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Create a new PgBookingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Booking>> {
        let result = sqlx::query_as::<_, BookingModel>(
            r#"
            SELECT id, user_id, guest_name, party_size, booking_date, booking_time,
                   notes, status, created_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Booking::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Booking>> {
        let results = sqlx::query_as::<_, BookingModel>(
            r#"
            SELECT id, user_id, guest_name, party_size, booking_date, booking_time,
                   notes, status, created_at
            FROM bookings
            WHERE user_id = $1
            ORDER BY booking_date DESC, booking_time DESC
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Booking::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, booking: &Booking) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO bookings (id, user_id, guest_name, party_size, booking_date,
                                  booking_time, notes, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(booking.id.into_inner())
        .bind(booking.user_id.into_inner())
        .bind(&booking.guest_name)
        .bind(booking.party_size)
        .bind(booking.booking_date)
        .bind(booking.booking_time)
        .bind(booking.notes.as_deref())
        .bind(booking.status.as_str())
        .bind(booking.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: Snowflake, status: BookingStatus) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE bookings SET status = $2 WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgBookingRepository>();
    }
}
