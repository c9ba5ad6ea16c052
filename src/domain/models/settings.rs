use serde::{Deserialize, Serialize};
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;

/// The single calendar configuration row (`id = 1`).
///
/// Loaded once per request and handed to the generator and the reservation
/// path as a plain value.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct CalendarSettings {
    #[serde(skip)]
    pub id: i32,
    pub working_hours_start: NaiveTime,
    pub working_hours_end: NaiveTime,
    pub slot_duration_min: i32,
    pub max_bookings_per_slot: i32,
    pub advance_booking_days: i32,
    pub weekend_bookings: bool,
    pub holiday_bookings: bool,
    pub holidays: Json<Vec<NaiveDate>>,
    pub maintenance_mode: bool,
    pub updated_at: DateTime<Utc>,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            id: 1,
            working_hours_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            working_hours_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or(NaiveTime::MIN),
            slot_duration_min: 60,
            max_bookings_per_slot: 1,
            advance_booking_days: 30,
            weekend_bookings: false,
            holiday_bookings: false,
            holidays: Json(Vec::new()),
            maintenance_mode: false,
            updated_at: Utc::now(),
        }
    }
}

impl CalendarSettings {
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.0.contains(&date)
    }

    /// Last date a customer may book, counted from `today`. Saturates at
    /// `NaiveDate::MAX` for windows past the end of the calendar.
    pub fn booking_horizon(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(self.advance_booking_days.max(0) as u64))
            .unwrap_or(NaiveDate::MAX)
    }
}
