use crate::domain::{models::settings::CalendarSettings, ports::SettingsRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use chrono::Utc;

pub struct SqliteSettingsRepo {
    pool: SqlitePool,
}

impl SqliteSettingsRepo {
    pub fn new(pool: SqlitePool) -> Self { Self { pool } }
}

#[async_trait]
impl SettingsRepository for SqliteSettingsRepo {
    async fn get(&self) -> Result<CalendarSettings, AppError> {
        sqlx::query_as::<_, CalendarSettings>("SELECT * FROM calendar_settings WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::InternalWithMsg("calendar_settings row is missing".into()))
    }

    async fn update(&self, settings: &CalendarSettings) -> Result<CalendarSettings, AppError> {
        sqlx::query_as::<_, CalendarSettings>(
            r#"UPDATE calendar_settings SET
               working_hours_start=?, working_hours_end=?, slot_duration_min=?, max_bookings_per_slot=?,
               advance_booking_days=?, weekend_bookings=?, holiday_bookings=?, holidays=?,
               maintenance_mode=?, updated_at=?
               WHERE id = 1
               RETURNING *"#
        )
            .bind(settings.working_hours_start)
            .bind(settings.working_hours_end)
            .bind(settings.slot_duration_min)
            .bind(settings.max_bookings_per_slot)
            .bind(settings.advance_booking_days)
            .bind(settings.weekend_bookings)
            .bind(settings.holiday_bookings)
            .bind(&settings.holidays)
            .bind(settings.maintenance_mode)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
