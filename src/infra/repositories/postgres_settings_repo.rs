use crate::domain::{models::settings::CalendarSettings, ports::SettingsRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use chrono::Utc;

pub struct PostgresSettingsRepo {
    pool: PgPool,
}

impl PostgresSettingsRepo {
    pub fn new(pool: PgPool) -> Self { Self { pool } }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepo {
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
               working_hours_start=$1, working_hours_end=$2, slot_duration_min=$3, max_bookings_per_slot=$4,
               advance_booking_days=$5, weekend_bookings=$6, holiday_bookings=$7, holidays=$8,
               maintenance_mode=$9, updated_at=$10
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
