pub mod availability;
pub mod reservation;
pub mod slot_generator;
