use serde_json::json;
use tera::{Context, Tera};
use crate::domain::models::content::SALON;
use crate::domain::models::email::{ConfirmationEmailRequest, OutgoingEmail};
use crate::error::AppError;

pub const CONFIRMATION_TEMPLATE: &str = "confirmation_email.html";
pub const CONFIRMATION_SUBJECT: &str = "Confirmação de Agendamento - Salão de Beleza";

pub fn build_confirmation_email(
    tera: &Tera,
    from: &str,
    request: &ConfirmationEmailRequest,
) -> Result<OutgoingEmail, AppError> {
    if request.client_email.trim().is_empty() {
        return Err(AppError::Validation("clientEmail is required".into()));
    }

    let context = Context::from_value(json!({
        "booking": request,
        "salon": SALON,
    }))?;
    let html = tera.render(CONFIRMATION_TEMPLATE, &context)?;

    Ok(OutgoingEmail {
        from: from.to_string(),
        to: vec![request.client_email.trim().to_string()],
        subject: CONFIRMATION_SUBJECT.to_string(),
        html,
    })
}
