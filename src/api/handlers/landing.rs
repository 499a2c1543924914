use axum::{extract::State, response::Html};
use chrono::{Duration, Utc};
use serde_json::json;
use std::sync::Arc;
use tera::Context;
use crate::api::dtos::responses::{ServiceResponse, WizardView};
use crate::api::extractors::wizard_session::WizardSession;
use crate::domain::models::content::{carousel_reviews, FEATURES, SALON};
use crate::domain::models::service::catalog;
use crate::error::AppError;
use crate::state::AppState;

pub const LANDING_TEMPLATE: &str = "index.html";

pub async fn landing_page(
    State(state): State<Arc<AppState>>,
    session: WizardSession,
) -> Result<Html<String>, AppError> {
    session.save(&state).await?;

    let services: Vec<ServiceResponse> = catalog().iter().map(ServiceResponse::from).collect();
    let wizard = WizardView::new(&session.wizard, session.webhook_url(&state).is_some());
    let today = Utc::now().with_timezone(&state.config.salon_timezone).date_naive();

    let context = Context::from_value(json!({
        "salon": SALON,
        "features": FEATURES,
        "reviews": carousel_reviews(),
        "services": services,
        "wizard": wizard,
        "min_date": (today + Duration::days(1)).format("%Y-%m-%d").to_string(),
        "year": today.format("%Y").to_string(),
    }))?;

    Ok(Html(state.templates.render(LANDING_TEMPLATE, &context)?))
}
