use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A bookable time window on a single date.
///
/// `current_bookings` only moves through the reservation transaction or an
/// explicit admin edit, and both keep it within `0..=max_bookings`.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Slot {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
    pub max_bookings: i32,
    pub current_bookings: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewSlotParams {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
    pub max_bookings: i32,
    pub notes: Option<String>,
}

impl Slot {
    pub fn new(params: NewSlotParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            date: params.date,
            start_time: params.start_time,
            end_time: params.end_time,
            is_available: params.is_available,
            max_bookings: params.max_bookings,
            current_bookings: 0,
            notes: params.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Open for new bookings, ignoring the date.
    pub fn has_capacity(&self) -> bool {
        self.is_available && self.current_bookings < self.max_bookings
    }

    pub fn is_bookable(&self, today: NaiveDate) -> bool {
        self.has_capacity() && self.date >= today
    }

    pub fn remaining_capacity(&self) -> i32 {
        if self.is_available {
            (self.max_bookings - self.current_bookings).max(0)
        } else {
            0
        }
    }

    /// Field-level checks shared by admin create and update.
    pub fn validate(&self) -> Result<(), String> {
        if self.start_time >= self.end_time {
            return Err("start_time must be before end_time".into());
        }
        if self.max_bookings <= 0 {
            return Err("max_bookings must be positive".into());
        }
        if self.current_bookings < 0 || self.current_bookings > self.max_bookings {
            return Err("current_bookings must be between 0 and max_bookings".into());
        }
        Ok(())
    }
}
