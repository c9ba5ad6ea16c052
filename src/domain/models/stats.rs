use serde::Serialize;

/// Dashboard figures, aggregated in SQL over every stored row.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct DashboardStats {
    pub total_bookings: i64,
    pub pending_bookings: i64,
    pub confirmed_bookings: i64,
    pub completed_bookings: i64,
    pub cancelled_bookings: i64,
    pub upcoming_slots: i64,
    pub upcoming_capacity: i64,
    pub upcoming_booked: i64,
}
