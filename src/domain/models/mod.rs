pub mod booking;
pub mod settings;
pub mod slot;
pub mod stats;
