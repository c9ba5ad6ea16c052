use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    parsing::{parse_date, parse_range, parse_time},
    requests::{BulkSlotAction, BulkSlotRequest, CreateSlotRequest, DateRangeQuery, GenerateSlotsRequest, UpdateSlotRequest},
    responses::{BulkSlotResponse, GenerateSlotsResponse, SlotView},
};
use crate::domain::models::slot::{NewSlotParams, Slot};
use crate::domain::services::{availability::filter_slots, slot_generator};
use crate::error::AppError;
use std::sync::Arc;
use chrono::NaiveDate;
use tracing::{info, warn};

const MAX_RANGE_DAYS: i64 = 366;

fn check_range(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if (end - start).num_days() > MAX_RANGE_DAYS {
        return Err(AppError::Validation(format!("Date range may span at most {} days", MAX_RANGE_DAYS)));
    }
    Ok(())
}

pub async fn generate_slots(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateSlotsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let start = parse_date("start_date", &payload.start_date)?;
    let end = parse_date("end_date", &payload.end_date)?;
    check_range(start, end)?;

    let settings = state.settings_repo.get().await?;
    let candidates = slot_generator::generate_slots(start, end, &settings)?;

    let mut created = 0;
    for slot in &candidates {
        if state.slot_repo.insert_if_absent(slot).await? {
            created += 1;
        }
    }

    let slots = if start <= end {
        state.slot_repo.list_by_range(start, end).await?
    } else {
        Vec::new()
    };

    info!("Generated slots {}..={}: {} candidates, {} created", start, end, candidates.len(), created);
    Ok(Json(GenerateSlotsResponse {
        created,
        slots: slots.into_iter().map(SlotView::from).collect(),
    }))
}

pub async fn list_slots(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (start, end) = parse_range(&params.start, &params.end)?;
    check_range(start, end)?;

    let available_only = params.available_only.unwrap_or(false);
    let slots = state.slot_repo.list_by_range(start, end).await?;
    let mut slots = filter_slots(slots, available_only);
    if available_only {
        let today = state.config.today();
        slots.retain(|s| s.is_bookable(today));
    }

    Ok(Json(slots.into_iter().map(SlotView::from).collect::<Vec<_>>()))
}

pub async fn create_slot(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let max_bookings = match payload.max_bookings {
        Some(max) => max,
        None => state.settings_repo.get().await?.max_bookings_per_slot,
    };

    let slot = Slot::new(NewSlotParams {
        date: parse_date("date", &payload.date)?,
        start_time: parse_time("start_time", &payload.start_time)?,
        end_time: parse_time("end_time", &payload.end_time)?,
        is_available: payload.is_available.unwrap_or(true),
        max_bookings,
        notes: payload.notes.filter(|n| !n.is_empty()),
    });
    slot.validate().map_err(AppError::Validation)?;

    let created = state.slot_repo.create(&slot).await?;
    info!("Created slot {} on {} {}-{}", created.id, created.date, created.start_time, created.end_time);
    Ok(Json(SlotView::from(created)))
}

pub async fn update_slot(
    State(state): State<Arc<AppState>>,
    Path(slot_id): Path<String>,
    Json(payload): Json<UpdateSlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut slot = state.slot_repo.find_by_id(&slot_id).await?
        .ok_or(AppError::NotFound("Slot not found".into()))?;
    let read_bookings = slot.current_bookings;

    if let Some(val) = payload.date { slot.date = parse_date("date", &val)?; }
    if let Some(val) = payload.start_time { slot.start_time = parse_time("start_time", &val)?; }
    if let Some(val) = payload.end_time { slot.end_time = parse_time("end_time", &val)?; }
    if let Some(val) = payload.is_available { slot.is_available = val; }
    if let Some(val) = payload.current_bookings { slot.current_bookings = val; }
    if let Some(val) = payload.notes {
        slot.notes = if val.is_empty() { None } else { Some(val) };
    }

    if let Some(cap) = payload.max_bookings {
        if payload.current_bookings.is_none() && cap > 0 && cap < slot.current_bookings {
            return Err(AppError::Conflict(format!(
                "Cannot reduce capacity to {}. {} bookings already exist.",
                cap, slot.current_bookings
            )));
        }
        slot.max_bookings = cap;
    }

    slot.validate().map_err(AppError::Validation)?;

    let Some(updated) = state.slot_repo.update(&slot, read_bookings).await? else {
        if state.slot_repo.find_by_id(&slot_id).await?.is_none() {
            return Err(AppError::NotFound("Slot not found".into()));
        }
        warn!("Update of slot {} raced a reservation, refusing stale write", slot_id);
        return Err(AppError::Conflict("Slot bookings changed while editing, reload and try again".into()));
    };
    info!("Updated slot {}", slot_id);
    Ok(Json(SlotView::from(updated)))
}

pub async fn delete_slot(
    State(state): State<Arc<AppState>>,
    Path(slot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.slot_repo.find_by_id(&slot_id).await?
        .ok_or(AppError::NotFound("Slot not found".into()))?;

    let bookings = state.booking_repo.count_by_slots(std::slice::from_ref(&slot_id)).await?;
    if bookings > 0 {
        return Err(AppError::Conflict("Cannot delete slot with existing bookings".into()));
    }

    state.slot_repo.delete(&slot_id).await?;
    info!("Deleted slot {}", slot_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn bulk_update_slots(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BulkSlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut ids = payload.ids;
    ids.sort();
    ids.dedup();
    if ids.is_empty() {
        return Err(AppError::Validation("ids must not be empty".into()));
    }

    let affected = match payload.action {
        BulkSlotAction::Enable => state.slot_repo.set_availability(&ids, true).await?,
        BulkSlotAction::Disable => state.slot_repo.set_availability(&ids, false).await?,
        BulkSlotAction::Delete => {
            let bookings = state.booking_repo.count_by_slots(&ids).await?;
            if bookings > 0 {
                return Err(AppError::Conflict(format!(
                    "Cannot delete slots: {} bookings reference them",
                    bookings
                )));
            }
            state.slot_repo.delete_many(&ids).await?
        }
    };

    let action = format!("{:?}", payload.action).to_lowercase();
    info!("Bulk {} on {} slots ({} affected)", action, ids.len(), affected);
    Ok(Json(BulkSlotResponse { action, affected }))
}
