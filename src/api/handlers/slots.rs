use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{AvailabilityQuery, SlotsQuery},
    responses::{AvailabilityResponse, SlotView, SlotsResponse},
};
use crate::api::handlers::{parse_date_param, parse_time_param, validate_duration_step};
use crate::domain::services::{availability, blocked, classifier, lead_time, times};
use crate::error::AppError;
use std::sync::Arc;
use chrono::Local;
use tracing::warn;

/// One classifier pass per grid cell for the requested day. The
/// blocked-time read fails open here: the grid is advisory, the write
/// path re-checks, and an outage should not paint every zone closed.
pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Path(zone_id): Path<String>,
    Query(params): Query<SlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let zone = state.zone_repo.find_by_id(&zone_id).await?
        .ok_or(AppError::NotFound("Zone not found".into()))?;
    if !zone.active {
        return Err(AppError::NotFound("Zone is not active".into()));
    }

    let date = parse_date_param(&params.date)?;
    let duration_hours = params.duration.unwrap_or(zone.min_duration);
    validate_duration_step(duration_hours)?;

    let now = Local::now().naive_local();
    let lead_hours = state.config.min_lead_hours;

    let blocks = match state.blocked_time_repo
        .list_active_for_day(&zone.id, blocked::day_of_week(date))
        .await
    {
        Ok(blocks) => blocks,
        Err(e) => {
            warn!("Blocked-time read failed, rendering grid without blocks: {e}");
            Vec::new()
        }
    };

    let bookings = state.booking_repo.list_confirmed_for_day(&zone.id, date).await?;

    let open = zone.available_start.format("%H:%M").to_string();
    let close = zone.available_end.format("%H:%M").to_string();

    let slots = times::generate_slots(&open, &close, state.config.slot_interval_min as i64)
        .into_iter()
        .map(|time| {
            let status = classifier::classify_slot(
                &zone, date, &time, duration_hours, &bookings, &blocks, now, lead_hours,
            );
            SlotView { time, state: status }
        })
        .collect();

    let minimum_bookable_time =
        lead_time::minimum_bookable_time(date, now, lead_hours, zone.available_end);

    Ok(Json(SlotsResponse {
        date: params.date,
        duration_hours,
        minimum_bookable_time,
        slots,
    }))
}

/// The aggregate yes/no the UI calls right before checkout. Booking
/// reads fail closed; a store error means no availability claim.
pub async fn check_availability(
    State(state): State<Arc<AppState>>,
    Path(zone_id): Path<String>,
    Query(params): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let zone = state.zone_repo.find_by_id(&zone_id).await?
        .ok_or(AppError::NotFound("Zone not found".into()))?;

    let date = parse_date_param(&params.date)?;
    let time = parse_time_param(&params.time)?;
    validate_duration_step(params.duration)?;

    if zone.is_walk_in {
        return Ok(Json(AvailabilityResponse { available: true }));
    }

    let now = Local::now().naive_local();

    let blocks = match state.blocked_time_repo
        .list_active_for_day(&zone.id, blocked::day_of_week(date))
        .await
    {
        Ok(blocks) => blocks,
        Err(e) => {
            warn!("Blocked-time read failed during availability check: {e}");
            Vec::new()
        }
    };

    let bookings = state.booking_repo.list_confirmed_for_day(&zone.id, date).await?;

    let time12 = times::format_12(times::minute_index(time));
    let available = availability::is_time_slot_available(
        &bookings,
        &blocks,
        &zone.id,
        date,
        &time12,
        params.duration,
        now,
        state.config.min_lead_hours,
    );

    Ok(Json(AvailabilityResponse { available }))
}
