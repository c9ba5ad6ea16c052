use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};
use crate::domain::models::booking::{Booking, NewBookingParams};
use crate::domain::models::settings::CalendarSettings;
use crate::domain::models::slot::Slot;
use crate::domain::ports::{BookingRepository, SlotRepository};
use crate::error::AppError;

#[derive(Debug, Serialize, Clone)]
pub struct Reservation {
    pub booking: Booking,
    pub current_bookings: i32,
    pub slot: Slot,
}

pub fn validate_details(details: &NewBookingParams) -> Result<(), AppError> {
    if details.name.trim().is_empty() {
        return Err(AppError::Validation("Customer name is required".into()));
    }
    let email = details.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("A valid email address is required".into()));
    }
    Ok(())
}

/// Claims one unit of `slot_id` and records a pending booking.
///
/// The checks before the write only produce precise errors. The capacity
/// guarantee comes from the conditional update inside
/// [`BookingRepository::reserve`], so two callers racing for the last unit
/// cannot both get through.
pub async fn reserve_slot(
    slots: &dyn SlotRepository,
    bookings: &dyn BookingRepository,
    settings: &CalendarSettings,
    slot_id: &str,
    details: NewBookingParams,
    today: NaiveDate,
) -> Result<Reservation, AppError> {
    validate_details(&details)?;

    let slot = slots.find_by_id(slot_id).await?
        .ok_or_else(|| AppError::NotFound("Slot not found".into()))?;

    if settings.maintenance_mode {
        warn!("Reservation refused for slot {}: maintenance mode", slot_id);
        return Err(AppError::MaintenanceModeActive);
    }

    if !slot.is_bookable(today) {
        warn!(
            "Reservation refused for slot {}: available={} bookings={}/{} date={}",
            slot_id, slot.is_available, slot.current_bookings, slot.max_bookings, slot.date
        );
        return Err(AppError::SlotUnavailable("Selected slot is no longer available".into()));
    }

    if slot.date > settings.booking_horizon(today) {
        return Err(AppError::SlotUnavailable(format!(
            "Bookings open {} days in advance",
            settings.advance_booking_days
        )));
    }

    let booking = Booking::new(&slot, details);

    let updated = match bookings.reserve(&booking, today).await? {
        Some(updated) => updated,
        None => {
            warn!("Reservation lost race for slot {}", slot_id);
            return Err(AppError::SlotUnavailable("Selected slot is no longer available".into()));
        }
    };

    info!(
        "Reserved slot {} for booking {} ({}/{})",
        updated.id, booking.id, updated.current_bookings, updated.max_bookings
    );

    Ok(Reservation {
        current_bookings: updated.current_bookings,
        booking,
        slot: updated,
    })
}
