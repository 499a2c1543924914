use std::sync::Arc;
use crate::domain::ports::{BookingWebhook, EmailService, WizardRepository};
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub booking_webhook: Arc<dyn BookingWebhook>,
    pub email_service: Arc<dyn EmailService>,
    pub wizard_repo: Arc<dyn WizardRepository>,
    pub templates: Arc<Tera>,
}
