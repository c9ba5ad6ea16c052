use std::sync::Arc;
use crate::domain::ports::{BookingRepository, SettingsRepository, SlotRepository};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub slot_repo: Arc<dyn SlotRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub settings_repo: Arc<dyn SettingsRepository>,
}
