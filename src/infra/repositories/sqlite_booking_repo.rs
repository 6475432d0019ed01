use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        // SQLite has no exclusion constraints; the overlap check rides
        // inside the insert so two concurrent writers cannot both pass
        // a separate read-then-write check.
        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, zone_id, date, start_time, end_time, duration_hours, customer_name, customer_email, customer_note, payment_reference, status, management_token, created_at, updated_at)
             SELECT ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?
             WHERE NOT EXISTS (
                 SELECT 1 FROM bookings
                 WHERE zone_id = ? AND date = ? AND status = 'CONFIRMED'
                   AND start_time < ? AND end_time > ?
             )
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.zone_id).bind(booking.date)
            .bind(booking.start_time).bind(booking.end_time).bind(booking.duration_hours)
            .bind(&booking.customer_name).bind(&booking.customer_email).bind(&booking.customer_note)
            .bind(&booking.payment_reference).bind(&booking.status).bind(&booking.management_token)
            .bind(booking.created_at).bind(booking.updated_at)
            .bind(&booking.zone_id).bind(booking.date)
            .bind(booking.end_time).bind(booking.start_time)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?;

        created.ok_or_else(|| AppError::Conflict("Time slot is no longer available".to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE management_token = ?")
            .bind(token).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_confirmed_for_day(&self, zone_id: &str, date: NaiveDate) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE zone_id = ? AND date = ? AND status = 'CONFIRMED' ORDER BY start_time ASC"
        )
            .bind(zone_id).bind(date).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_zone(&self, zone_id: &str, date: Option<NaiveDate>) -> Result<Vec<Booking>, AppError> {
        match date {
            Some(date) => sqlx::query_as::<_, Booking>(
                "SELECT * FROM bookings WHERE zone_id = ? AND date = ? ORDER BY start_time ASC"
            )
                .bind(zone_id).bind(date).fetch_all(&self.pool).await.map_err(AppError::Database),
            None => sqlx::query_as::<_, Booking>(
                "SELECT * FROM bookings WHERE zone_id = ? ORDER BY date ASC, start_time ASC"
            )
                .bind(zone_id).fetch_all(&self.pool).await.map_err(AppError::Database),
        }
    }

    async fn list(&self) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY date ASC, start_time ASC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn cancel(&self, id: &str) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = 'CANCELLED', updated_at = ? WHERE id = ? RETURNING *"
        )
            .bind(chrono::Utc::now()).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Booking not found".into()))
    }
}
