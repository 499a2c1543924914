use crate::domain::models::{booking::BookingDraft, service::Service, slot::TimeSlot};
use crate::domain::services::wizard::{Wizard, WizardStep};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient toast shown to the visitor.
#[derive(Serialize, Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }
}

#[derive(Serialize)]
pub struct ServiceResponse {
    #[serde(flatten)]
    pub service: Service,
    pub price: String,
}

impl From<&Service> for ServiceResponse {
    fn from(service: &Service) -> Self {
        Self {
            service: service.clone(),
            price: service.display_price(),
        }
    }
}

#[derive(Serialize)]
pub struct WizardView {
    pub step: WizardStep,
    pub step_number: u8,
    pub next_enabled: bool,
    pub back_enabled: bool,
    pub draft: BookingDraft,
    pub slots: Vec<TimeSlot>,
    pub webhook_configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_url: Option<String>,
}

impl WizardView {
    pub fn new(wizard: &Wizard, webhook_configured: bool) -> Self {
        Self {
            step: wizard.step(),
            step_number: wizard.step().number(),
            next_enabled: wizard.next_enabled(),
            back_enabled: wizard.back_enabled(),
            draft: wizard.draft().clone(),
            slots: wizard.slots().to_vec(),
            webhook_configured,
            notification: None,
            whatsapp_url: None,
        }
    }

    pub fn with_notification(mut self, notification: Option<Notification>) -> Self {
        self.notification = notification;
        self
    }
}
