use crate::domain::{models::slot::Slot, ports::SlotRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use chrono::{NaiveDate, Utc};

pub struct PostgresSlotRepo {
    pool: PgPool,
}

impl PostgresSlotRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for PostgresSlotRepo {
    async fn create(&self, slot: &Slot) -> Result<Slot, AppError> {
        sqlx::query_as::<_, Slot>(
            r#"INSERT INTO slots (id, date, start_time, end_time, is_available, max_bookings, current_bookings, notes, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
               RETURNING *"#
        )
            .bind(&slot.id)
            .bind(slot.date)
            .bind(slot.start_time)
            .bind(slot.end_time)
            .bind(slot.is_available)
            .bind(slot.max_bookings)
            .bind(slot.current_bookings)
            .bind(&slot.notes)
            .bind(slot.created_at)
            .bind(slot.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn insert_if_absent(&self, slot: &Slot) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"INSERT INTO slots (id, date, start_time, end_time, is_available, max_bookings, current_bookings, notes, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
               ON CONFLICT(date, start_time) DO NOTHING"#
        )
            .bind(&slot.id)
            .bind(slot.date)
            .bind(slot.start_time)
            .bind(slot.end_time)
            .bind(slot.is_available)
            .bind(slot.max_bookings)
            .bind(slot.current_bookings)
            .bind(&slot.notes)
            .bind(slot.created_at)
            .bind(slot.updated_at)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Slot>, AppError> {
        sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Slot>, AppError> {
        sqlx::query_as::<_, Slot>(
            "SELECT * FROM slots WHERE date >= $1 AND date <= $2 ORDER BY date ASC, start_time ASC"
        )
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, slot: &Slot, expected_bookings: i32) -> Result<Option<Slot>, AppError> {
        sqlx::query_as::<_, Slot>(
            r#"UPDATE slots SET date=$1, start_time=$2, end_time=$3, is_available=$4, max_bookings=$5, current_bookings=$6, notes=$7, updated_at=$8
               WHERE id=$9 AND current_bookings=$10
               RETURNING *"#
        )
            .bind(slot.date)
            .bind(slot.start_time)
            .bind(slot.end_time)
            .bind(slot.is_available)
            .bind(slot.max_bookings)
            .bind(slot.current_bookings)
            .bind(&slot.notes)
            .bind(Utc::now())
            .bind(&slot.id)
            .bind(expected_bookings)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM slots WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Slot not found".into()));
        }
        Ok(())
    }

    async fn set_availability(&self, ids: &[String], is_available: bool) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE slots SET is_available = $1, updated_at = $2 WHERE id = ANY($3)")
            .bind(is_available)
            .bind(Utc::now())
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }

    async fn delete_many(&self, ids: &[String]) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let result = sqlx::query("DELETE FROM slots WHERE id = ANY($1)")
            .bind(ids)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() != ids.len() as u64 {
            return Err(AppError::NotFound("One or more slots not found".into()));
        }
        tx.commit().await.map_err(AppError::Database)?;
        Ok(result.rows_affected())
    }
}
