use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{BookingListQuery, CreateBookingRequest};
use crate::api::handlers::{parse_date_param, parse_time_param, validate_duration_step};
use crate::domain::models::booking::{Booking, NewBookingParams};
use crate::domain::models::zone::Zone;
use crate::domain::services::{availability, blocked, lead_time, times};
use crate::error::AppError;
use std::sync::Arc;
use chrono::Local;
use tracing::{info, warn};

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Path(zone_id): Path<String>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("create_booking: Starting for zone {}", zone_id);

    let zone = state.zone_repo.find_by_id(&zone_id).await?
        .ok_or(AppError::NotFound("Zone not found".into()))?;
    if !zone.active {
        return Err(AppError::Validation("Zone is not active".into()));
    }
    if zone.is_walk_in {
        return Err(AppError::Validation("Walk-in zones do not take reservations".into()));
    }

    let date = parse_date_param(&payload.date)?;
    let start = parse_time_param(&payload.time)?;
    validate_duration_step(payload.duration_hours)?;

    if payload.duration_hours < zone.min_duration || payload.duration_hours > zone.max_duration {
        return Err(AppError::Validation(format!(
            "Duration must be between {} and {} hours",
            zone.min_duration, zone.max_duration
        )));
    }

    let start_min = times::minute_index(start);
    let end_min = start_min + times::duration_minutes(payload.duration_hours);
    if start_min < times::minute_index(zone.available_start)
        || end_min > times::minute_index(zone.available_end)
    {
        return Err(AppError::Validation("Requested time is outside operating hours".into()));
    }

    let now = Local::now().naive_local();
    let time12 = times::format_12(start_min);

    // Policy violations are validation errors with a precise message;
    // 409 stays reserved for "someone holds this interval".
    if date < now.date() {
        return Err(AppError::Validation("Booking date is in the past".into()));
    }
    if !lead_time::is_booking_time_valid(date, &time12, now, state.config.min_lead_hours) {
        return Err(AppError::Validation(format!(
            "Bookings require at least {} hours notice",
            state.config.min_lead_hours
        )));
    }

    // Blocked-time reads degrade to "no blocks"; booking reads must not.
    let blocks = match state.blocked_time_repo
        .list_active_for_day(&zone.id, blocked::day_of_week(date))
        .await
    {
        Ok(blocks) => blocks,
        Err(e) => {
            warn!("Blocked-time read failed during booking: {e}");
            Vec::new()
        }
    };

    let existing = state.booking_repo.list_confirmed_for_day(&zone.id, date).await?;

    if !availability::is_time_slot_available(
        &existing,
        &blocks,
        &zone.id,
        date,
        &time12,
        payload.duration_hours,
        now,
        state.config.min_lead_hours,
    ) {
        return Err(AppError::Conflict("Selected time slot is not available".into()));
    }

    let booking = Booking::new(NewBookingParams {
        zone_id: zone.id.clone(),
        date,
        start_time: start,
        duration_hours: payload.duration_hours,
        name: payload.name,
        email: payload.email,
        note: payload.note,
        payment_reference: payload.payment_reference,
    });

    // The availability check above is a pre-check on a snapshot; the
    // repository insert carries the storage-level no-overlap guarantee
    // and decides any race. A loss surfaces as 409.
    let created = state.booking_repo.create(&booking).await?;
    info!("Booking confirmed: {} for zone {}", created.id, zone.name);

    send_confirmation(&state, &zone, &created).await;

    Ok(Json(created))
}

async fn send_confirmation(state: &Arc<AppState>, zone: &Zone, booking: &Booking) {
    let mut ctx = tera::Context::new();
    ctx.insert("customer_name", &booking.customer_name);
    ctx.insert("zone_name", &zone.name);
    ctx.insert("date", &booking.date.to_string());
    ctx.insert("start_time", &times::format_12(times::minute_index(booking.start_time)));
    ctx.insert("end_time", &times::format_12(times::minute_index(booking.end_time)));
    ctx.insert("total_price", &format!("{:.2}", zone.hourly_rate * booking.duration_hours));
    ctx.insert("manage_url", &format!("/bookings/manage/{}", booking.management_token));

    let html = match state.templates.render("confirmation.html", &ctx) {
        Ok(html) => html,
        Err(e) => {
            warn!("Failed to render confirmation template: {e}");
            return;
        }
    };

    // Mail is a courtesy; the booking stands either way.
    if let Err(e) = state.email_service
        .send(&booking.customer_email, "Booking Confirmed", &html)
        .await
    {
        warn!("Failed to send confirmation for booking {}: {e}", booking.id);
    }
}

pub async fn list_zone_bookings(
    State(state): State<Arc<AppState>>,
    Path(zone_id): Path<String>,
    Query(params): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    state.zone_repo.find_by_id(&zone_id).await?
        .ok_or(AppError::NotFound("Zone not found".into()))?;

    let date = params.date.as_deref().map(parse_date_param).transpose()?;
    let bookings = state.booking_repo.list_by_zone(&zone_id, date).await?;
    Ok(Json(bookings))
}

pub async fn list_all_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list().await?;
    Ok(Json(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let cancelled = state.booking_repo.cancel(&booking_id).await?;
    info!("Booking cancelled: {}", cancelled.id);
    Ok(Json(cancelled))
}
