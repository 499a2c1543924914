use crate::domain::models::{booking::BookingSubmission, service::Service, slot::TimeSlot};
use crate::domain::ports::BookingWebhook;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Serialize)]
struct WebhookClient<'a> {
    nome: &'a str,
    email: &'a str,
    telefone: &'a str,
}

#[derive(Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum WebhookRequest<'a> {
    GetAvailableSlots {
        data_selecionada: NaiveDate,
        servico_id: &'a str,
        duracao_minutos: u32,
    },
    ConfirmBooking {
        servico_id: &'a str,
        data: NaiveDate,
        horario: &'a str,
        cliente: WebhookClient<'a>,
    },
}

#[derive(Deserialize)]
struct SlotsPayload {
    #[serde(default)]
    slots: Vec<TimeSlot>,
}

pub struct HttpBookingWebhook {
    client: Client,
}

impl Default for HttpBookingWebhook {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpBookingWebhook {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    async fn post(&self, url: &str, payload: &WebhookRequest<'_>) -> Result<reqwest::Response, AppError> {
        let res = self.client.post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("connection error: {}", e);
                warn!("Booking webhook {}", msg);
                AppError::Webhook(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Status: {}, Body: {}", status, text);
            warn!("Booking webhook rejected request. {}", msg);
            return Err(AppError::Webhook(msg));
        }

        Ok(res)
    }
}

#[async_trait]
impl BookingWebhook for HttpBookingWebhook {
    async fn fetch_slots(&self, url: &str, service: &Service, date: NaiveDate) -> Result<Vec<TimeSlot>, AppError> {
        let payload = WebhookRequest::GetAvailableSlots {
            data_selecionada: date,
            servico_id: service.id,
            duracao_minutos: service.duration_min,
        };

        let res = self.post(url, &payload).await?;
        let body: SlotsPayload = res.json().await.map_err(|e| {
            warn!("Booking webhook returned unreadable slots: {:?}", e);
            AppError::Webhook(format!("invalid slots payload: {}", e))
        })?;

        info!(service_id = service.id, %date, slots = body.slots.len(), "Fetched available slots");
        Ok(body.slots)
    }

    async fn confirm_booking(&self, url: &str, submission: &BookingSubmission) -> Result<(), AppError> {
        let payload = WebhookRequest::ConfirmBooking {
            servico_id: submission.service.id,
            data: submission.date,
            horario: &submission.time,
            cliente: WebhookClient {
                nome: submission.client.name.trim(),
                email: submission.client.email.trim(),
                telefone: submission.client.phone.trim(),
            },
        };

        self.post(url, &payload).await?;
        info!(service_id = submission.service.id, date = %submission.date, time = %submission.time, "Booking confirmed by webhook");
        Ok(())
    }
}
