use axum::{extract::{State, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{parsing::parse_range, requests::DateRangeQuery, responses::SlotView};
use crate::domain::models::{settings::CalendarSettings, slot::Slot};
use crate::domain::services::availability::{filter_slots, summarize_by_date};
use crate::error::AppError;
use std::sync::Arc;
use chrono::NaiveDate;

/// Clamps a requested range to the dates customers may book, or `None` when
/// nothing of it is bookable.
fn customer_window(
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
    settings: &CalendarSettings,
) -> Option<(NaiveDate, NaiveDate)> {
    let from = start.max(today);
    let to = end.min(settings.booking_horizon(today));
    (from <= to).then_some((from, to))
}

async fn bookable_slots(state: &AppState, start: NaiveDate, end: NaiveDate) -> Result<Vec<Slot>, AppError> {
    let settings = state.settings_repo.get().await?;
    let today = state.config.today();

    let Some((from, to)) = customer_window(start, end, today, &settings) else {
        return Ok(Vec::new());
    };

    let slots = state.slot_repo.list_by_range(from, to).await?;
    Ok(filter_slots(slots, true))
}

pub async fn list_available_slots(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (start, end) = parse_range(&params.start, &params.end)?;
    let slots = bookable_slots(&state, start, end).await?;
    Ok(Json(slots.into_iter().map(SlotView::from).collect::<Vec<_>>()))
}

pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (start, end) = parse_range(&params.start, &params.end)?;
    if (end - start).num_days() > 366 {
        return Err(AppError::Validation("Date range may span at most 366 days".into()));
    }

    let settings = state.settings_repo.get().await?;
    let today = state.config.today();

    // Dates outside the bookable window report no slots.
    let slots = match customer_window(start, end, today, &settings) {
        Some((from, to)) => state.slot_repo.list_by_range(from, to).await?,
        None => Vec::new(),
    };

    Ok(Json(summarize_by_date(&slots, start, end)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 3, day).unwrap()
    }

    #[test]
    fn test_customer_window_clamps_to_today_and_horizon() {
        let settings = CalendarSettings { advance_booking_days: 5, ..CalendarSettings::default() };
        assert_eq!(customer_window(d(1), d(28), d(10), &settings), Some((d(10), d(15))));
        assert_eq!(customer_window(d(12), d(13), d(10), &settings), Some((d(12), d(13))));
        assert_eq!(customer_window(d(1), d(9), d(10), &settings), None);
        assert_eq!(customer_window(d(20), d(25), d(10), &settings), None);
    }
}
