use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct DateRangeQuery {
    pub start: String,
    pub end: String,
    pub available_only: Option<bool>,
}

#[derive(Deserialize)]
pub struct GenerateSlotsRequest {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Deserialize)]
pub struct CreateSlotRequest {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub is_available: Option<bool>,
    pub max_bookings: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateSlotRequest {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_available: Option<bool>,
    pub max_bookings: Option<i32>,
    pub current_bookings: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BulkSlotAction {
    Enable,
    Disable,
    Delete,
}

#[derive(Deserialize)]
pub struct BulkSlotRequest {
    pub ids: Vec<String>,
    pub action: BulkSlotAction,
}

#[derive(Deserialize)]
pub struct UpdateSettingsRequest {
    pub working_hours_start: Option<String>,
    pub working_hours_end: Option<String>,
    pub slot_duration_min: Option<i32>,
    pub max_bookings_per_slot: Option<i32>,
    pub advance_booking_days: Option<i32>,
    pub weekend_bookings: Option<bool>,
    pub holiday_bookings: Option<bool>,
    pub holidays: Option<Vec<NaiveDate>>,
    pub maintenance_mode: Option<bool>,
}

#[derive(Deserialize)]
pub struct ReserveSlotRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct BookingListQuery {
    pub status: Option<String>,
}
