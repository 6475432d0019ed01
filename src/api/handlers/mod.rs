pub mod blocked_time;
pub mod booking;
pub mod booking_management;
pub mod health;
pub mod slots;
pub mod zone;

use chrono::{NaiveDate, NaiveTime};
use crate::error::AppError;

/// Caller-supplied date; format errors are user errors here, unlike in
/// the time-algebra layer.
pub fn parse_date_param(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))
}

/// Accepts `HH:mm` or `h:mm AM/PM` from clients.
pub fn parse_time_param(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .or_else(|_| NaiveTime::parse_from_str(value, "%I:%M %p"))
        .map_err(|_| AppError::Validation("Invalid time format (HH:MM or h:MM AM/PM)".into()))
}

/// Durations are whole half-hour steps.
pub fn validate_duration_step(duration_hours: f64) -> Result<(), AppError> {
    if duration_hours <= 0.0 || (duration_hours * 2.0).fract() != 0.0 {
        return Err(AppError::Validation("Duration must be a positive multiple of 0.5 hours".into()));
    }
    Ok(())
}
