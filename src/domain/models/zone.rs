use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveTime, Utc};
use sqlx::FromRow;

/// A bookable resource category: its own hours, rate and duration bounds.
/// Walk-in zones have no slot grid at all; every query on them reports
/// walk-in status regardless of bookings or blocks.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub hourly_rate: f64,
    /// Minimum bookable duration in hours, half-hour granularity.
    pub min_duration: f64,
    /// Maximum bookable duration in hours.
    pub max_duration: f64,
    /// Opening time; the operating window is `[available_start, available_end)`.
    pub available_start: NaiveTime,
    pub available_end: NaiveTime,
    pub active: bool,
    pub is_walk_in: bool,
    pub created_at: DateTime<Utc>,
}
