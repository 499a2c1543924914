use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;
use crate::domain::services::wizard::WizardError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),
    #[error("Booking webhook error: {0}")]
    Webhook(String),
    #[error("{0}")]
    EmailProvider(String),
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Wizard(e) => (StatusCode::CONFLICT, e.to_string()),
            AppError::MissingConfiguration(msg) => (StatusCode::PRECONDITION_FAILED, msg.clone()),
            AppError::Webhook(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::EmailProvider(msg) => {
                error!("Email provider error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Template(e) => {
                error!("Template error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("failed to load templates: {0}")]
    Template(#[from] tera::Error),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
