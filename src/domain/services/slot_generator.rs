use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use crate::domain::models::settings::CalendarSettings;
use crate::domain::models::slot::{NewSlotParams, Slot};
use crate::error::AppError;

/// Builds the slots that should exist for every date in `start..=end`.
///
/// Slots run back to back from the working-hours start; a trailing window
/// shorter than `slot_duration_min` is dropped. Nothing is persisted here.
pub fn generate_slots(
    start: NaiveDate,
    end: NaiveDate,
    settings: &CalendarSettings,
) -> Result<Vec<Slot>, AppError> {
    if settings.slot_duration_min <= 0 {
        return Err(AppError::Configuration(format!(
            "slot_duration_min must be positive, got {}",
            settings.slot_duration_min
        )));
    }
    if settings.max_bookings_per_slot <= 0 {
        return Err(AppError::Configuration(format!(
            "max_bookings_per_slot must be positive, got {}",
            settings.max_bookings_per_slot
        )));
    }

    let duration = settings.slot_duration_min as u32;
    let day_start = minute_of_day(settings.working_hours_start);
    let day_end = minute_of_day(settings.working_hours_end);

    let mut slots = Vec::new();
    for date in start.iter_days().take_while(|d| *d <= end) {
        if !settings.weekend_bookings && matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }
        if !settings.holiday_bookings && settings.is_holiday(date) {
            continue;
        }

        let mut cursor = day_start;
        while cursor + duration <= day_end {
            if let (Some(slot_start), Some(slot_end)) = (time_at(cursor), time_at(cursor + duration)) {
                slots.push(Slot::new(NewSlotParams {
                    date,
                    start_time: slot_start,
                    end_time: slot_end,
                    is_available: true,
                    max_bookings: settings.max_bookings_per_slot,
                    notes: None,
                }));
            }
            cursor += duration;
        }
    }

    Ok(slots)
}

fn minute_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

// 24:00 has no NaiveTime, so a slot ending at midnight is skipped.
fn time_at(minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0)
}
