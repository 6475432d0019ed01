use serde::Serialize;
use crate::domain::models::slot::SlotStatus;

#[derive(Serialize)]
pub struct SlotView {
    pub time: String,
    #[serde(flatten)]
    pub state: SlotStatus,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: String,
    pub duration_hours: f64,
    /// Earliest bookable time today, for the UI banner. Null for
    /// future dates or when nothing remains before closing.
    pub minimum_bookable_time: Option<String>,
    pub slots: Vec<SlotView>,
}

#[derive(Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}
