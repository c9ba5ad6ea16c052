use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{BookingListQuery, UpdateBookingStatusRequest};
use crate::domain::models::booking::BookingStatus;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let status = match params.status.as_deref() {
        Some(raw) if !raw.is_empty() => Some(raw.parse::<BookingStatus>().map_err(AppError::Validation)?),
        _ => None,
    };
    let bookings = state.booking_repo.list(status).await?;
    Ok(Json(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

/// Status changes never touch the slot's booking count; a cancelled booking
/// keeps holding its unit of capacity.
pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
    Json(payload): Json<UpdateBookingStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let next = payload.status.parse::<BookingStatus>().map_err(AppError::Validation)?;

    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    let current = booking.status.parse::<BookingStatus>()
        .map_err(|e| AppError::InternalWithMsg(format!("Stored booking {} has bad status: {}", booking.id, e)))?;

    if !current.can_transition_to(next) {
        return Err(AppError::Validation(format!("Cannot move booking from {} to {}", current, next)));
    }

    let updated = state.booking_repo.update_status(&booking_id, next).await?;
    info!("Booking {} status {} -> {}", booking_id, current, next);
    Ok(Json(updated))
}
