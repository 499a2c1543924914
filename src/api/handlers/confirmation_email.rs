use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info};
use crate::domain::models::email::ConfirmationEmailRequest;
use crate::domain::services::confirmation_email::build_confirmation_email;
use crate::error::AppError;
use crate::state::AppState;

const CORS_HEADERS: [(HeaderName, &str); 2] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "authorization, x-client-info, apikey, content-type"),
];

pub async fn preflight() -> impl IntoResponse {
    (StatusCode::OK, CORS_HEADERS)
}

/// Standalone email function: every failure, including a malformed or
/// oversized body, is answered with 500 and `{"error": message}`.
pub async fn send_booking_confirmation(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let result = match body {
        Ok(body) => deliver(&state, &body).await,
        Err(rejection) => Err(AppError::Validation(rejection.body_text())),
    };

    match result {
        Ok(provider_response) => (StatusCode::OK, CORS_HEADERS, Json(provider_response)).into_response(),
        Err(e) => {
            error!("Error in send-booking-confirmation: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                CORS_HEADERS,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

async fn deliver(state: &AppState, body: &[u8]) -> Result<Value, AppError> {
    let request: ConfirmationEmailRequest = serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("malformed booking payload: {}", e)))?;

    if state.config.resend_api_key.is_empty() {
        return Err(AppError::MissingConfiguration("RESEND_API_KEY is not set".into()));
    }

    info!("Sending booking confirmation to: {}", request.client_email);
    let email = build_confirmation_email(&state.templates, &state.config.mail_from, &request)?;
    state.email_service.send(&email).await
}
