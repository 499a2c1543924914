use std::sync::Arc;
use tera::Tera;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::confirmation_email::CONFIRMATION_TEMPLATE;
use crate::api::handlers::landing::LANDING_TEMPLATE;
use crate::infra::email::resend_email_service::ResendEmailService;
use crate::infra::repositories::memory_wizard_repo::MemoryWizardRepo;
use crate::infra::webhook::http_booking_webhook::HttpBookingWebhook;

pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template(LANDING_TEMPLATE, include_str!("../../templates/index.html"))?;
    tera.add_raw_template(CONFIRMATION_TEMPLATE, include_str!("../../templates/confirmation_email.html"))?;
    Ok(tera)
}

pub fn bootstrap_state(config: &Config) -> Result<AppState, tera::Error> {
    let templates = Arc::new(load_templates()?);

    match &config.booking_webhook_url {
        Some(url) => info!("Booking webhook configured: {}", url),
        None => info!("No booking webhook configured; visitors must provide one"),
    }
    if config.resend_api_key.is_empty() {
        info!("RESEND_API_KEY is empty; confirmation emails will be rejected by the provider");
    }

    Ok(AppState {
        config: config.clone(),
        booking_webhook: Arc::new(HttpBookingWebhook::new()),
        email_service: Arc::new(ResendEmailService::new(
            config.resend_api_url.clone(),
            config.resend_api_key.clone(),
        )),
        wizard_repo: Arc::new(MemoryWizardRepo::new()),
        templates,
    })
}
