use chrono::{NaiveDate, NaiveTime};
use crate::error::AppError;

pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid {} (expected YYYY-MM-DD)", field)))
}

/// Accepts `HH:MM` and `HH:MM:SS`.
pub fn parse_time(field: &str, raw: &str) -> Result<NaiveTime, AppError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| AppError::Validation(format!("Invalid {} (expected HH:MM)", field)))
}

pub fn parse_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), AppError> {
    Ok((parse_date("start", start)?, parse_date("end", end)?))
}
