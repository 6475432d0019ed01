use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateBlockedTimeRequest, UpdateBlockedTimeRequest};
use crate::api::handlers::parse_time_param;
use crate::domain::models::blocked_time::BlockedTime;
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use uuid::Uuid;
use tracing::info;

fn validate_day(day_of_week: i32) -> Result<(), AppError> {
    if !(0..=6).contains(&day_of_week) {
        return Err(AppError::Validation("day_of_week must be 0 (Sunday) through 6 (Saturday)".into()));
    }
    Ok(())
}

pub async fn create_blocked_time(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBlockedTimeRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_day(payload.day_of_week)?;
    let start = parse_time_param(&payload.start_time)?;
    let end = parse_time_param(&payload.end_time)?;
    if start >= end {
        return Err(AppError::Validation("Block start must be before block end".into()));
    }

    if let Some(ref zone_id) = payload.zone_id {
        state.zone_repo.find_by_id(zone_id).await?
            .ok_or(AppError::NotFound("Zone not found".into()))?;
    }

    let block = BlockedTime {
        id: Uuid::new_v4().to_string(),
        zone_id: payload.zone_id,
        day_of_week: payload.day_of_week,
        start_time: start,
        end_time: end,
        reason: payload.reason,
        active: true,
        created_at: Utc::now(),
    };

    let created = state.blocked_time_repo.create(&block).await?;
    info!("Blocked time created: {} (day {})", created.id, created.day_of_week);
    Ok(Json(created))
}

pub async fn list_blocked_times(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let blocks = state.blocked_time_repo.list().await?;
    Ok(Json(blocks))
}

pub async fn update_blocked_time(
    State(state): State<Arc<AppState>>,
    Path(block_id): Path<String>,
    Json(payload): Json<UpdateBlockedTimeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut block = state.blocked_time_repo.find_by_id(&block_id).await?
        .ok_or(AppError::NotFound("Blocked time not found".into()))?;

    if let Some(val) = payload.zone_id {
        if let Some(ref zone_id) = val {
            state.zone_repo.find_by_id(zone_id).await?
                .ok_or(AppError::NotFound("Zone not found".into()))?;
        }
        block.zone_id = val;
    }
    if let Some(val) = payload.day_of_week {
        validate_day(val)?;
        block.day_of_week = val;
    }
    if let Some(val) = payload.start_time { block.start_time = parse_time_param(&val)?; }
    if let Some(val) = payload.end_time { block.end_time = parse_time_param(&val)?; }
    if let Some(val) = payload.reason { block.reason = val; }
    if let Some(val) = payload.active { block.active = val; }

    if block.start_time >= block.end_time {
        return Err(AppError::Validation("Block start must be before block end".into()));
    }

    let updated = state.blocked_time_repo.update(&block).await?;
    Ok(Json(updated))
}

pub async fn delete_blocked_time(
    State(state): State<Arc<AppState>>,
    Path(block_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.blocked_time_repo.delete(&block_id).await?;
    info!("Blocked time deleted: {}", block_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
