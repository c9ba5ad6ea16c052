use crate::domain::models::{
    booking::{Booking, BookingStatus}, settings::CalendarSettings, slot::Slot, stats::DashboardStats,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait SlotRepository: Send + Sync {
    async fn create(&self, slot: &Slot) -> Result<Slot, AppError>;
    /// Inserts unless a slot already holds the same `(date, start_time)`.
    /// Returns whether a row was written.
    async fn insert_if_absent(&self, slot: &Slot) -> Result<bool, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Slot>, AppError>;
    async fn list_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Slot>, AppError>;
    /// Writes `slot` only while the stored `current_bookings` still equals
    /// `expected_bookings`. `Ok(None)` means the row is gone or a reservation
    /// moved the count since it was read.
    async fn update(&self, slot: &Slot, expected_bookings: i32) -> Result<Option<Slot>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn set_availability(&self, ids: &[String], is_available: bool) -> Result<u64, AppError>;
    /// All-or-nothing: fails without deleting anything if an id is missing.
    async fn delete_many(&self, ids: &[String]) -> Result<u64, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Claims one unit of the slot's capacity and stores `booking` in a single
    /// transaction. `Ok(None)` means the slot was not bookable at write time
    /// and nothing was written.
    async fn reserve(&self, booking: &Booking, today: NaiveDate) -> Result<Option<Slot>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<Booking>, AppError>;
    async fn list(&self, status: Option<BookingStatus>) -> Result<Vec<Booking>, AppError>;
    async fn count_by_slots(&self, slot_ids: &[String]) -> Result<i64, AppError>;
    async fn update_status(&self, id: &str, status: BookingStatus) -> Result<Booking, AppError>;
    async fn stats(&self, today: NaiveDate) -> Result<DashboardStats, AppError>;
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self) -> Result<CalendarSettings, AppError>;
    async fn update(&self, settings: &CalendarSettings) -> Result<CalendarSettings, AppError>;
}
