use serde::Serialize;
use crate::domain::models::slot::Slot;

#[derive(Serialize)]
pub struct SlotView {
    #[serde(flatten)]
    pub slot: Slot,
    pub remaining_capacity: i32,
}

impl From<Slot> for SlotView {
    fn from(slot: Slot) -> Self {
        let remaining_capacity = slot.remaining_capacity();
        Self { slot, remaining_capacity }
    }
}

#[derive(Serialize)]
pub struct GenerateSlotsResponse {
    pub created: usize,
    pub slots: Vec<SlotView>,
}

#[derive(Serialize)]
pub struct BulkSlotResponse {
    pub action: String,
    pub affected: u64,
}
