use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{parsing::parse_time, requests::UpdateSettingsRequest};
use crate::error::AppError;
use std::sync::Arc;
use sqlx::types::Json as SqlJson;
use tracing::info;

pub async fn get_settings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let settings = state.settings_repo.get().await?;
    Ok(Json(settings))
}

/// Merges the supplied fields into the stored record. Odd combinations such as
/// an inverted working day are accepted and simply generate no slots.
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut settings = state.settings_repo.get().await?;

    if let Some(val) = payload.working_hours_start { settings.working_hours_start = parse_time("working_hours_start", &val)?; }
    if let Some(val) = payload.working_hours_end { settings.working_hours_end = parse_time("working_hours_end", &val)?; }
    if let Some(val) = payload.slot_duration_min { settings.slot_duration_min = val; }
    if let Some(val) = payload.max_bookings_per_slot { settings.max_bookings_per_slot = val; }
    if let Some(val) = payload.advance_booking_days { settings.advance_booking_days = val; }
    if let Some(val) = payload.weekend_bookings { settings.weekend_bookings = val; }
    if let Some(val) = payload.holiday_bookings { settings.holiday_bookings = val; }
    if let Some(mut val) = payload.holidays {
        val.sort();
        val.dedup();
        settings.holidays = SqlJson(val);
    }
    if let Some(val) = payload.maintenance_mode {
        if val != settings.maintenance_mode {
            info!("Maintenance mode {}", if val { "enabled" } else { "disabled" });
        }
        settings.maintenance_mode = val;
    }

    let updated = state.settings_repo.update(&settings).await?;
    info!("Calendar settings updated");
    Ok(Json(updated))
}
