use serde::{Deserialize, Serialize};
use crate::domain::models::booking::BookingSubmission;

/// Payload accepted by the `send-booking-confirmation` function.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationEmailRequest {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service_name: String,
    pub service_price: String,
    pub date: String,
    pub time: String,
}

impl ConfirmationEmailRequest {
    pub fn from_submission(submission: &BookingSubmission) -> Self {
        Self {
            client_name: submission.client.name.trim().to_string(),
            client_email: submission.client.email.trim().to_string(),
            client_phone: submission.client.phone.trim().to_string(),
            service_name: submission.service.name.to_string(),
            service_price: submission.service.display_price(),
            date: submission.date.format("%d/%m/%Y").to_string(),
            time: submission.time.clone(),
        }
    }
}

/// A rendered message in the shape the email provider expects.
#[derive(Debug, Serialize, Clone)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}
