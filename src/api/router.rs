use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{blocked_time, booking, booking_management, health, slots, zone};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Zones (admin)
        .route("/api/v1/zones", post(zone::create_zone).get(zone::list_zones))
        .route("/api/v1/zones/{zone_id}", get(zone::get_zone).put(zone::update_zone).delete(zone::deactivate_zone))

        // Blocked times (admin)
        .route("/api/v1/blocked-times", post(blocked_time::create_blocked_time).get(blocked_time::list_blocked_times))
        .route("/api/v1/blocked-times/{block_id}", axum::routing::put(blocked_time::update_blocked_time).delete(blocked_time::delete_blocked_time))

        // Public booking flow
        .route("/api/v1/zones/{zone_id}/slots", get(slots::get_slots))
        .route("/api/v1/zones/{zone_id}/availability", get(slots::check_availability))
        .route("/api/v1/zones/{zone_id}/book", post(booking::create_booking))

        // Customer booking management
        .route("/api/v1/bookings/manage/{token}", get(booking_management::get_booking_by_token))
        .route("/api/v1/bookings/manage/{token}/cancel", post(booking_management::cancel_booking_by_token))

        // Admin booking management
        .route("/api/v1/zones/{zone_id}/bookings", get(booking::list_zone_bookings))
        .route("/api/v1/bookings", get(booking::list_all_bookings))
        .route("/api/v1/bookings/{booking_id}", get(booking::get_booking).delete(booking::cancel_booking))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
