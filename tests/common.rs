use salon_booking::{
    api::router::create_router,
    config::{Config, ConfirmationChannel},
    domain::models::{booking::BookingSubmission, email::OutgoingEmail, service::Service, slot::TimeSlot},
    domain::ports::{BookingWebhook, EmailService},
    error::AppError,
    infra::{factory::load_templates, repositories::memory_wizard_repo::MemoryWizardRepo},
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const WEBHOOK_URL: &str = "http://automation.test/webhook/booking";

#[derive(Debug, Clone, PartialEq)]
pub enum WebhookCall {
    FetchSlots { url: String, service_id: String, duration_min: u32, date: NaiveDate },
    ConfirmBooking { url: String, service_id: String, date: NaiveDate, time: String, name: String, email: String, phone: String },
}

#[derive(Default)]
pub struct MockBookingWebhook {
    pub calls: Mutex<Vec<WebhookCall>>,
    pub slots: Mutex<Option<Vec<TimeSlot>>>,
    pub fail_confirm: Mutex<bool>,
}

#[async_trait]
impl BookingWebhook for MockBookingWebhook {
    async fn fetch_slots(&self, url: &str, service: &Service, date: NaiveDate) -> Result<Vec<TimeSlot>, AppError> {
        self.calls.lock().unwrap().push(WebhookCall::FetchSlots {
            url: url.to_string(),
            service_id: service.id.to_string(),
            duration_min: service.duration_min,
            date,
        });
        self.slots.lock().unwrap().clone()
            .ok_or_else(|| AppError::Webhook("Status: 500 Internal Server Error, Body: down".into()))
    }

    async fn confirm_booking(&self, url: &str, submission: &BookingSubmission) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(WebhookCall::ConfirmBooking {
            url: url.to_string(),
            service_id: submission.service.id.to_string(),
            date: submission.date,
            time: submission.time.clone(),
            name: submission.client.name.clone(),
            email: submission.client.email.clone(),
            phone: submission.client.phone.clone(),
        });
        if *self.fail_confirm.lock().unwrap() {
            return Err(AppError::Webhook("connection error: refused".into()));
        }
        Ok(())
    }
}

impl MockBookingWebhook {
    #[allow(dead_code)]
    pub fn confirm_calls(&self) -> Vec<WebhookCall> {
        self.calls.lock().unwrap().iter()
            .filter(|c| matches!(c, WebhookCall::ConfirmBooking { .. }))
            .cloned()
            .collect()
    }
}

#[derive(Default)]
pub struct MockEmailService {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    pub fail_with: Mutex<Option<String>>,
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send(&self, email: &OutgoingEmail) -> Result<Value, AppError> {
        if let Some(msg) = self.fail_with.lock().unwrap().clone() {
            return Err(AppError::EmailProvider(msg));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(json!({ "id": "email-123" }))
    }
}

pub fn test_config() -> Config {
    Config {
        booking_webhook_url: Some(WEBHOOK_URL.to_string()),
        confirmation_channel: ConfirmationChannel::Webhook,
        resend_api_key: "re_test".to_string(),
        ..Config::default()
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub webhook: Arc<MockBookingWebhook>,
    pub email: Arc<MockEmailService>,
    session_cookie: Mutex<Option<String>>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(test_config()).await
    }

    pub async fn with_config(config: Config) -> Self {
        let webhook = Arc::new(MockBookingWebhook::default());
        let email = Arc::new(MockEmailService::default());

        let state = Arc::new(AppState {
            config,
            booking_webhook: webhook.clone(),
            email_service: email.clone(),
            wizard_repo: Arc::new(MemoryWizardRepo::new()),
            templates: Arc::new(load_templates().expect("templates compile")),
        });

        Self {
            router: create_router(state.clone()),
            state,
            webhook,
            email,
            session_cookie: Mutex::new(None),
        }
    }

    /// Sends a request as the same visitor, keeping the session cookie.
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = self.session_cookie.lock().unwrap().clone() {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap().to_string();
            *self.session_cookie.lock().unwrap() = Some(pair);
        }

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, value)
    }

    pub async fn set_slots(&self, slots: Vec<TimeSlot>) {
        *self.webhook.slots.lock().unwrap() = Some(slots);
    }

    /// Drives the wizard to the contact step with the given service, date and time.
    pub async fn walk_to_contact_step(&self, service_id: &str, date: NaiveDate, time: &str) {
        let (status, _) = self.send("POST", "/api/v1/booking/service", Some(json!({ "service_id": service_id }))).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = self.send("POST", "/api/v1/booking/next", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = self.send("POST", "/api/v1/booking/date", Some(json!({ "date": date.to_string() }))).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = self.send("POST", "/api/v1/booking/next", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = self.send("POST", "/api/v1/booking/time", Some(json!({ "time": time }))).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = self.send("POST", "/api/v1/booking/next", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["step"], "contact_info");
    }
}

/// The next Monday strictly after today (in any timezone).
#[allow(dead_code)]
pub fn next_monday() -> NaiveDate {
    let mut date = Utc::now().date_naive() + Duration::days(2);
    while date.weekday() != Weekday::Mon {
        date += Duration::days(1);
    }
    date
}

#[allow(dead_code)]
pub fn next_sunday() -> NaiveDate {
    next_monday() + Duration::days(6)
}
