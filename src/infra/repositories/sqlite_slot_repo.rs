use crate::domain::{models::slot::Slot, ports::SlotRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use chrono::{NaiveDate, Utc};

pub struct SqliteSlotRepo {
    pool: SqlitePool,
}

impl SqliteSlotRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for SqliteSlotRepo {
    async fn create(&self, slot: &Slot) -> Result<Slot, AppError> {
        sqlx::query_as::<_, Slot>(
            r#"INSERT INTO slots (id, date, start_time, end_time, is_available, max_bookings, current_bookings, notes, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
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
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
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
        sqlx::query_as::<_, Slot>("SELECT * FROM slots WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Slot>, AppError> {
        sqlx::query_as::<_, Slot>(
            "SELECT * FROM slots WHERE date >= ? AND date <= ? ORDER BY date ASC, start_time ASC"
        )
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, slot: &Slot, expected_bookings: i32) -> Result<Option<Slot>, AppError> {
        sqlx::query_as::<_, Slot>(
            r#"UPDATE slots SET date=?, start_time=?, end_time=?, is_available=?, max_bookings=?, current_bookings=?, notes=?, updated_at=?
               WHERE id=? AND current_bookings=?
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
        let result = sqlx::query("DELETE FROM slots WHERE id = ?")
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
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        let now = Utc::now();
        let mut updated = 0;
        for id in ids {
            let result = sqlx::query("UPDATE slots SET is_available = ?, updated_at = ? WHERE id = ?")
                .bind(is_available)
                .bind(now)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
            updated += result.rows_affected();
        }
        tx.commit().await.map_err(AppError::Database)?;
        Ok(updated)
    }

    async fn delete_many(&self, ids: &[String]) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;
        for id in ids {
            let result = sqlx::query("DELETE FROM slots WHERE id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
            if result.rows_affected() == 0 {
                return Err(AppError::NotFound(format!("Slot {} not found", id)));
            }
        }
        tx.commit().await.map_err(AppError::Database)?;
        Ok(ids.len() as u64)
    }
}
