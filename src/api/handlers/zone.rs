use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateZoneRequest, UpdateZoneRequest};
use crate::api::handlers::{parse_time_param, validate_duration_step};
use crate::domain::models::zone::Zone;
use crate::error::AppError;
use std::sync::Arc;
use chrono::{NaiveTime, Utc};
use uuid::Uuid;
use tracing::info;

fn validate_zone(
    hourly_rate: f64,
    min_duration: f64,
    max_duration: f64,
    open: NaiveTime,
    close: NaiveTime,
) -> Result<(), AppError> {
    if hourly_rate <= 0.0 {
        return Err(AppError::Validation("Hourly rate must be positive".into()));
    }
    validate_duration_step(min_duration)?;
    validate_duration_step(max_duration)?;
    if min_duration > max_duration {
        return Err(AppError::Validation("Minimum duration exceeds maximum".into()));
    }
    if open >= close {
        return Err(AppError::Validation("Opening time must be before closing time".into()));
    }
    Ok(())
}

pub async fn create_zone(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateZoneRequest>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating zone: {}", payload.name);

    let open = parse_time_param(&payload.available_start)?;
    let close = parse_time_param(&payload.available_end)?;
    validate_zone(payload.hourly_rate, payload.min_duration, payload.max_duration, open, close)?;

    let zone = Zone {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        description: payload.description,
        hourly_rate: payload.hourly_rate,
        min_duration: payload.min_duration,
        max_duration: payload.max_duration,
        available_start: open,
        available_end: close,
        active: true,
        is_walk_in: payload.is_walk_in.unwrap_or(false),
        created_at: Utc::now(),
    };

    let created = state.zone_repo.create(&zone).await?;
    Ok(Json(created))
}

pub async fn list_zones(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let zones = state.zone_repo.list().await?;
    Ok(Json(zones))
}

pub async fn get_zone(
    State(state): State<Arc<AppState>>,
    Path(zone_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let zone = state.zone_repo.find_by_id(&zone_id).await?
        .ok_or(AppError::NotFound("Zone not found".into()))?;
    Ok(Json(zone))
}

pub async fn update_zone(
    State(state): State<Arc<AppState>>,
    Path(zone_id): Path<String>,
    Json(payload): Json<UpdateZoneRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut zone = state.zone_repo.find_by_id(&zone_id).await?
        .ok_or(AppError::NotFound("Zone not found".into()))?;

    if let Some(val) = payload.name { zone.name = val; }
    if let Some(val) = payload.description { zone.description = Some(val); }
    if let Some(val) = payload.hourly_rate { zone.hourly_rate = val; }
    if let Some(val) = payload.min_duration { zone.min_duration = val; }
    if let Some(val) = payload.max_duration { zone.max_duration = val; }
    if let Some(val) = payload.available_start { zone.available_start = parse_time_param(&val)?; }
    if let Some(val) = payload.available_end { zone.available_end = parse_time_param(&val)?; }
    if let Some(val) = payload.active { zone.active = val; }
    if let Some(val) = payload.is_walk_in { zone.is_walk_in = val; }

    validate_zone(zone.hourly_rate, zone.min_duration, zone.max_duration, zone.available_start, zone.available_end)?;

    let updated = state.zone_repo.update(&zone).await?;
    info!("Zone updated: {}", updated.id);
    Ok(Json(updated))
}

pub async fn deactivate_zone(
    State(state): State<Arc<AppState>>,
    Path(zone_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.zone_repo.deactivate(&zone_id).await?;
    info!("Zone deactivated: {}", zone_id);
    Ok(Json(serde_json::json!({"status": "deactivated"})))
}
