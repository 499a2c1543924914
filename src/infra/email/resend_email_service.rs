use crate::domain::models::email::OutgoingEmail;
use crate::domain::ports::EmailService;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{error, info};

pub struct ResendEmailService {
    client: Client,
    api_url: String,
    api_key: String,
}

impl ResendEmailService {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl EmailService for ResendEmailService {
    async fn send(&self, email: &OutgoingEmail) -> Result<Value, AppError> {
        info!("Sending booking confirmation to: {}", email.to.join(", "));

        let res = self.client.post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(email)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Email service connection error: {}", e);
                error!("{}", msg);
                AppError::EmailProvider(msg)
            })?;

        if !res.status().is_success() {
            let text = res.text().await.unwrap_or_default();
            return Err(AppError::EmailProvider(format!("Failed to send email: {}", text)));
        }

        let body: Value = res.json().await.map_err(|e| {
            AppError::EmailProvider(format!("Email provider returned invalid JSON: {}", e))
        })?;

        info!("Email sent successfully: {}", body);
        Ok(body)
    }
}
