use crate::domain::{
    models::{booking::{Booking, BookingStatus}, slot::Slot, stats::DashboardStats},
    ports::BookingRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{SqlitePool, Row};
use chrono::{NaiveDate, Utc};

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
    async fn reserve(&self, booking: &Booking, today: NaiveDate) -> Result<Option<Slot>, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // The write lock is taken by this statement, so the capacity check and
        // the increment cannot interleave with another reservation.
        let claimed = sqlx::query_as::<_, Slot>(
            "UPDATE slots SET current_bookings = current_bookings + 1, updated_at = ?
             WHERE id = ? AND is_available AND current_bookings < max_bookings AND date >= ?
             RETURNING *"
        )
            .bind(Utc::now()).bind(&booking.slot_id).bind(today)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?;

        let Some(slot) = claimed else { return Ok(None); };

        sqlx::query(
            "INSERT INTO bookings (id, slot_id, date, start_time, end_time, customer_name, customer_email, customer_phone, notes, status, reference_token, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        )
            .bind(&booking.id).bind(&booking.slot_id).bind(booking.date).bind(booking.start_time).bind(booking.end_time)
            .bind(&booking.customer_name).bind(&booking.customer_email).bind(&booking.customer_phone).bind(&booking.notes)
            .bind(&booking.status).bind(&booking.reference_token).bind(booking.created_at)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(Some(slot))
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_token(&self, token: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE reference_token = ?").bind(token).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>, AppError> {
        match status {
            Some(s) => sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE status = ? ORDER BY date ASC, start_time ASC").bind(s.as_str()).fetch_all(&self.pool).await,
            None => sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY date ASC, start_time ASC").fetch_all(&self.pool).await,
        }
        .map_err(AppError::Database)
    }
    async fn count_by_slots(&self, slot_ids: &[String]) -> Result<i64, AppError> {
        let mut total = 0;
        for id in slot_ids {
            let row = sqlx::query("SELECT COUNT(*) as count FROM bookings WHERE slot_id = ?").bind(id).fetch_one(&self.pool).await.map_err(AppError::Database)?;
            total += row.try_get::<i64, _>("count").map_err(AppError::Database)?;
        }
        Ok(total)
    }
    async fn update_status(&self, id: &str, status: BookingStatus) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>("UPDATE bookings SET status = ? WHERE id = ? RETURNING *")
            .bind(status.as_str()).bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Booking not found".into()))
    }
    async fn stats(&self, today: NaiveDate) -> Result<DashboardStats, AppError> {
        let bookings = sqlx::query(
            "SELECT COUNT(*) as total,
                    COALESCE(SUM(CASE WHEN status = 'pending' THEN 1 ELSE 0 END), 0) as pending,
                    COALESCE(SUM(CASE WHEN status = 'confirmed' THEN 1 ELSE 0 END), 0) as confirmed,
                    COALESCE(SUM(CASE WHEN status = 'completed' THEN 1 ELSE 0 END), 0) as completed,
                    COALESCE(SUM(CASE WHEN status = 'cancelled' THEN 1 ELSE 0 END), 0) as cancelled
             FROM bookings"
        ).fetch_one(&self.pool).await.map_err(AppError::Database)?;

        let slots = sqlx::query(
            "SELECT COUNT(*) as slots, COALESCE(SUM(max_bookings), 0) as capacity, COALESCE(SUM(current_bookings), 0) as booked
             FROM slots WHERE date >= ?"
        ).bind(today).fetch_one(&self.pool).await.map_err(AppError::Database)?;

        Ok(DashboardStats {
            total_bookings: bookings.try_get("total")?,
            pending_bookings: bookings.try_get("pending")?,
            confirmed_bookings: bookings.try_get("confirmed")?,
            completed_bookings: bookings.try_get("completed")?,
            cancelled_bookings: bookings.try_get("cancelled")?,
            upcoming_slots: slots.try_get("slots")?,
            upcoming_capacity: slots.try_get("capacity")?,
            upcoming_booked: slots.try_get("booked")?,
        })
    }
}
