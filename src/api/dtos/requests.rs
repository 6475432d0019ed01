use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field from an explicit `null` in PUT bodies.
fn some_if_present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Deserialize)]
pub struct CreateZoneRequest {
    pub name: String,
    pub description: Option<String>,
    pub hourly_rate: f64,
    pub min_duration: f64,
    pub max_duration: f64,
    pub available_start: String,
    pub available_end: String,
    pub is_walk_in: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateZoneRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub hourly_rate: Option<f64>,
    pub min_duration: Option<f64>,
    pub max_duration: Option<f64>,
    pub available_start: Option<String>,
    pub available_end: Option<String>,
    pub active: Option<bool>,
    pub is_walk_in: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateBlockedTimeRequest {
    pub zone_id: Option<String>,
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub reason: String,
}

#[derive(Deserialize)]
pub struct UpdateBlockedTimeRequest {
    /// `None` leaves the zone untouched; `Some(None)` (an explicit
    /// `null`) resets a zone-specific block back to global.
    #[serde(default, deserialize_with = "some_if_present")]
    pub zone_id: Option<Option<String>>,
    pub day_of_week: Option<i32>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub reason: Option<String>,
    pub active: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub date: String,
    pub time: String,
    pub duration_hours: f64,
    pub name: String,
    pub email: String,
    pub note: Option<String>,
    pub payment_reference: Option<String>,
}

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: String,
    pub duration: Option<f64>,
}

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub date: String,
    pub time: String,
    pub duration: f64,
}

#[derive(Deserialize)]
pub struct BookingListQuery {
    pub date: Option<String>,
}
