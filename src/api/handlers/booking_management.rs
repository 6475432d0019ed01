use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn get_booking_by_token(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_token(&token).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

pub async fn cancel_booking_by_token(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_token(&token).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if booking.status == crate::domain::models::booking::STATUS_CANCELLED {
        return Err(AppError::Conflict("Booking is already cancelled".into()));
    }

    let cancelled = state.booking_repo.cancel(&booking.id).await?;
    info!("Booking cancelled via management token: {}", cancelled.id);
    Ok(Json(cancelled))
}
