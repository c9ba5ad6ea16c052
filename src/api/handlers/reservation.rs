use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::ReserveSlotRequest;
use crate::domain::models::booking::NewBookingParams;
use crate::domain::services::reservation::reserve_slot as reserve;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn reserve_slot(
    State(state): State<Arc<AppState>>,
    Path(slot_id): Path<String>,
    Json(payload): Json<ReserveSlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("reserve_slot: Starting for slot {}", slot_id);

    let settings = state.settings_repo.get().await?;
    let today = state.config.today();

    let reservation = reserve(
        state.slot_repo.as_ref(),
        state.booking_repo.as_ref(),
        &settings,
        &slot_id,
        NewBookingParams {
            name: payload.name.trim().to_string(),
            email: payload.email.trim().to_string(),
            phone: payload.phone.filter(|p| !p.trim().is_empty()),
            notes: payload.notes.filter(|n| !n.trim().is_empty()),
        },
        today,
    ).await?;

    info!("Booking {} pending for slot {}", reservation.booking.id, slot_id);
    Ok(Json(reservation))
}

pub async fn lookup_booking(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_token(&token).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}
