use crate::domain::models::{
    booking::BookingSubmission, email::OutgoingEmail, service::Service, slot::TimeSlot,
};
use crate::domain::services::wizard::Wizard;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use uuid::Uuid;

/// The external automation endpoint that owns availability and bookings.
#[async_trait]
pub trait BookingWebhook: Send + Sync {
    async fn fetch_slots(&self, url: &str, service: &Service, date: NaiveDate) -> Result<Vec<TimeSlot>, AppError>;
    async fn confirm_booking(&self, url: &str, submission: &BookingSubmission) -> Result<(), AppError>;
}

#[async_trait]
pub trait EmailService: Send + Sync {
    /// Returns the provider's response body.
    async fn send(&self, email: &OutgoingEmail) -> Result<Value, AppError>;
}

#[async_trait]
pub trait WizardRepository: Send + Sync {
    async fn load(&self, session_id: Uuid) -> Result<Option<Wizard>, AppError>;
    async fn save(&self, session_id: Uuid, wizard: &Wizard) -> Result<(), AppError>;
    async fn purge_idle(&self, idle_since: DateTime<Utc>) -> Result<usize, AppError>;
}
