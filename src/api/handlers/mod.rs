pub mod availability;
pub mod booking;
pub mod health;
pub mod reservation;
pub mod settings;
pub mod slot;
pub mod stats;
