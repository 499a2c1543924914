use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{booking, confirmation_email, health, landing};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Landing page
        .route("/", get(landing::landing_page))

        // Booking wizard
        .route("/api/v1/services", get(booking::list_services))
        .route("/api/v1/booking", get(booking::get_wizard))
        .route("/api/v1/booking/webhook", put(booking::configure_webhook))
        .route("/api/v1/booking/service", post(booking::select_service))
        .route("/api/v1/booking/date", post(booking::select_date))
        .route("/api/v1/booking/time", post(booking::select_time))
        .route("/api/v1/booking/contact", put(booking::update_contact))
        .route("/api/v1/booking/next", post(booking::next_step))
        .route("/api/v1/booking/back", post(booking::previous_step))
        .route("/api/v1/booking/confirm", post(booking::confirm_booking))
        .route("/api/v1/booking/reset", post(booking::reset_wizard))

        // Email function
        .route(
            "/functions/v1/send-booking-confirmation",
            post(confirmation_email::send_booking_confirmation).options(confirmation_email::preflight),
        )

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
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
