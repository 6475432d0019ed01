use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveTime, Utc};
use sqlx::FromRow;

/// A weekly recurring closure window. `zone_id = None` applies to every
/// zone. Blocks recur indefinitely; applicability is derived from the
/// weekday of the queried date.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct BlockedTime {
    pub id: String,
    pub zone_id: Option<String>,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub reason: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
