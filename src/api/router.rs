use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{availability, booking, health, reservation, settings, slot, stats};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Customer Availability
        .route("/api/v1/slots", get(availability::list_available_slots))
        .route("/api/v1/calendar", get(availability::get_calendar))

        // Customer Booking Flow
        .route("/api/v1/slots/{slot_id}/reserve", post(reservation::reserve_slot))
        .route("/api/v1/bookings/lookup/{token}", get(reservation::lookup_booking))

        // Admin Slots
        .route("/api/v1/admin/slots/generate", post(slot::generate_slots))
        .route("/api/v1/admin/slots/bulk", post(slot::bulk_update_slots))
        .route("/api/v1/admin/slots", get(slot::list_slots).post(slot::create_slot))
        .route("/api/v1/admin/slots/{slot_id}", put(slot::update_slot).delete(slot::delete_slot))

        // Admin Settings
        .route("/api/v1/admin/settings", get(settings::get_settings).put(settings::update_settings))

        // Admin Bookings
        .route("/api/v1/admin/bookings", get(booking::list_bookings))
        .route("/api/v1/admin/bookings/{booking_id}", get(booking::get_booking))
        .route("/api/v1/admin/bookings/{booking_id}/status", put(booking::update_booking_status))
        .route("/api/v1/admin/stats", get(stats::get_stats))

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
