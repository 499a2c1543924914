use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use std::sync::Arc;
use tower_cookies::{cookie::SameSite, Cookie, Cookies};
use tracing::{debug, error};
use uuid::Uuid;
use crate::domain::services::wizard::Wizard;
use crate::error::AppError;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "booking_session";

/// The visitor's wizard, loaded from the `booking_session` cookie. A fresh
/// session (and cookie) is created when the cookie is missing or stale.
pub struct WizardSession {
    pub id: Uuid,
    pub wizard: Wizard,
}

impl WizardSession {
    pub async fn save(&self, state: &AppState) -> Result<(), AppError> {
        state.wizard_repo.save(self.id, &self.wizard).await
    }

    /// Re-reads the stored wizard, picking up writes made by overlapping requests.
    pub async fn refresh(&mut self, state: &AppState) -> Result<(), AppError> {
        if let Some(latest) = state.wizard_repo.load(self.id).await? {
            self.wizard = latest;
        }
        Ok(())
    }

    /// The session's own webhook URL wins over the deployment default.
    pub fn webhook_url<'a>(&'a self, state: &'a AppState) -> Option<&'a str> {
        self.wizard.webhook_url().or(state.config.booking_webhook_url.as_deref())
    }
}

impl FromRequestParts<Arc<AppState>> for WizardSession {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>().cloned().ok_or_else(|| {
            error!("CookieManagerLayer missing from router");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

        let existing = cookies.get(SESSION_COOKIE)
            .and_then(|c| Uuid::parse_str(c.value()).ok());

        if let Some(id) = existing {
            match state.wizard_repo.load(id).await {
                Ok(Some(wizard)) => return Ok(WizardSession { id, wizard }),
                Ok(None) => debug!("Wizard session {} expired, starting a new one", id),
                Err(_) => return Err(StatusCode::INTERNAL_SERVER_ERROR),
            }
        }

        let id = Uuid::new_v4();
        let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        cookies.add(cookie);

        Ok(WizardSession { id, wizard: Wizard::new() })
    }
}
