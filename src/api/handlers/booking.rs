use axum::{extract::State, Json};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;
use crate::api::dtos::{
    requests::{ContactInfoRequest, SelectDateRequest, SelectServiceRequest, SelectTimeRequest, WebhookConfigRequest},
    responses::{Notification, ServiceResponse, WizardView},
};
use crate::api::extractors::wizard_session::WizardSession;
use crate::domain::models::{
    booking::BookingSubmission,
    email::ConfirmationEmailRequest,
    service::{catalog, find_service},
    slot::{fallback_slots, TimeSlot},
};
use crate::domain::services::confirmation_email::build_confirmation_email;
use crate::domain::services::whatsapp::{confirmation_message, whatsapp_link};
use crate::error::AppError;
use crate::state::AppState;

const MSG_WEBHOOK_MISSING: &str = "Por favor, configure o webhook URL do n8n primeiro";
const MSG_SLOTS_FAILED: &str = "Erro ao carregar horários disponíveis";
const MSG_CONFIRM_FAILED: &str = "Erro ao confirmar agendamento. Tente novamente.";
const MSG_CONFIRMED: &str = "Agendamento confirmado! Você receberá um email de confirmação.";
const MSG_CONFIRMED_WHATSAPP: &str = "Agendamento pronto! Finalize o envio da confirmação pelo WhatsApp.";

fn view(state: &AppState, session: &WizardSession) -> WizardView {
    WizardView::new(&session.wizard, session.webhook_url(state).is_some())
}

async fn save_and_view(state: &AppState, session: &WizardSession) -> Result<Json<WizardView>, AppError> {
    session.save(state).await?;
    Ok(Json(view(state, session)))
}

pub async fn list_services() -> Json<Vec<ServiceResponse>> {
    Json(catalog().iter().map(ServiceResponse::from).collect())
}

pub async fn get_wizard(
    State(state): State<Arc<AppState>>,
    session: WizardSession,
) -> Result<Json<WizardView>, AppError> {
    save_and_view(&state, &session).await
}

pub async fn configure_webhook(
    State(state): State<Arc<AppState>>,
    mut session: WizardSession,
    Json(payload): Json<WebhookConfigRequest>,
) -> Result<Json<WizardView>, AppError> {
    let url = payload.url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty());

    if let Some(ref raw) = url {
        let parsed = Url::parse(raw)
            .map_err(|_| AppError::Validation("Invalid webhook URL".into()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::Validation("Webhook URL must use http or https".into()));
        }
    }

    session.wizard.set_webhook_url(url);
    save_and_view(&state, &session).await
}

pub async fn select_service(
    State(state): State<Arc<AppState>>,
    mut session: WizardSession,
    Json(payload): Json<SelectServiceRequest>,
) -> Result<Json<WizardView>, AppError> {
    session.wizard.select_service(&payload.service_id)?;
    info!("Service selected: {}", payload.service_id);
    save_and_view(&state, &session).await
}

/// Records the date and looks up its slots. Lookup failures fall back to the
/// static schedule; they never fail the request.
pub async fn select_date(
    State(state): State<Arc<AppState>>,
    mut session: WizardSession,
    Json(payload): Json<SelectDateRequest>,
) -> Result<Json<WizardView>, AppError> {
    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))?;
    let today = Utc::now().with_timezone(&state.config.salon_timezone).date_naive();

    session.wizard.select_date(date, today)?;
    session.save(&state).await?;

    let (slots, notification) = lookup_slots(&state, &session, date).await;

    session.refresh(&state).await?;
    if !session.wizard.apply_slots(date, slots) {
        info!("Discarding slots for {}: selection changed during lookup", date);
    }

    let view = save_and_view(&state, &session).await?.0;
    Ok(Json(view.with_notification(notification)))
}

async fn lookup_slots(
    state: &AppState,
    session: &WizardSession,
    date: NaiveDate,
) -> (Vec<TimeSlot>, Option<Notification>) {
    let Some(url) = session.webhook_url(state) else {
        if state.config.confirmation_channel.uses_webhook() {
            return (Vec::new(), Some(Notification::error(MSG_WEBHOOK_MISSING)));
        }
        return (fallback_slots(), None);
    };

    let service = session.wizard.draft().service_id.as_deref().and_then(find_service);
    let Some(service) = service else {
        return (Vec::new(), Some(Notification::error(MSG_SLOTS_FAILED)));
    };

    match state.booking_webhook.fetch_slots(url, service, date).await {
        Ok(slots) => (slots, None),
        Err(e) => {
            warn!("Slot lookup failed, using fallback schedule: {}", e);
            (fallback_slots(), Some(Notification::error(MSG_SLOTS_FAILED)))
        }
    }
}

pub async fn select_time(
    State(state): State<Arc<AppState>>,
    mut session: WizardSession,
    Json(payload): Json<SelectTimeRequest>,
) -> Result<Json<WizardView>, AppError> {
    session.wizard.select_time(&payload.time)?;
    save_and_view(&state, &session).await
}

pub async fn update_contact(
    State(state): State<Arc<AppState>>,
    mut session: WizardSession,
    Json(payload): Json<ContactInfoRequest>,
) -> Result<Json<WizardView>, AppError> {
    session.wizard.set_contact(payload.into())?;
    save_and_view(&state, &session).await
}

pub async fn next_step(
    State(state): State<Arc<AppState>>,
    mut session: WizardSession,
) -> Result<Json<WizardView>, AppError> {
    session.wizard.next()?;
    save_and_view(&state, &session).await
}

pub async fn previous_step(
    State(state): State<Arc<AppState>>,
    mut session: WizardSession,
) -> Result<Json<WizardView>, AppError> {
    session.wizard.back()?;
    save_and_view(&state, &session).await
}

pub async fn reset_wizard(
    State(state): State<Arc<AppState>>,
    mut session: WizardSession,
) -> Result<Json<WizardView>, AppError> {
    session.wizard.reset();
    save_and_view(&state, &session).await
}

/// Terminal action: confirms through the configured channels and resets the
/// wizard. Any failure leaves the draft untouched so the visitor can retry.
pub async fn confirm_booking(
    State(state): State<Arc<AppState>>,
    mut session: WizardSession,
) -> Result<Json<WizardView>, AppError> {
    let submission = session.wizard.submission()?;
    let channel = state.config.confirmation_channel;

    if channel.uses_webhook() {
        let Some(url) = session.webhook_url(&state) else {
            let view = save_and_view(&state, &session).await?.0;
            return Ok(Json(view.with_notification(Some(Notification::error(MSG_WEBHOOK_MISSING)))));
        };

        if let Err(e) = state.booking_webhook.confirm_booking(url, &submission).await {
            warn!("Booking confirmation failed: {}", e);
            let view = save_and_view(&state, &session).await?.0;
            return Ok(Json(view.with_notification(Some(Notification::error(MSG_CONFIRM_FAILED)))));
        }
    }

    let whatsapp_url = channel.uses_whatsapp()
        .then(|| whatsapp_link(&state.config.whatsapp_number, &confirmation_message(&submission)));

    if state.config.send_confirmation_email {
        send_confirmation_email(&state, &submission).await;
    }

    info!(
        service_id = submission.service.id,
        date = %submission.date,
        time = %submission.time,
        "Booking submitted"
    );

    session.wizard.reset();
    let message = if channel.uses_webhook() { MSG_CONFIRMED } else { MSG_CONFIRMED_WHATSAPP };
    let mut view = save_and_view(&state, &session).await?.0
        .with_notification(Some(Notification::success(message)));
    view.whatsapp_url = whatsapp_url;
    Ok(Json(view))
}

async fn send_confirmation_email(state: &AppState, submission: &BookingSubmission) {
    let request = ConfirmationEmailRequest::from_submission(submission);
    let result = match build_confirmation_email(&state.templates, &state.config.mail_from, &request) {
        Ok(email) => state.email_service.send(&email).await.map(|_| ()),
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        warn!("Booking confirmed but the confirmation email failed: {}", e);
    }
}
