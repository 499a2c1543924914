use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use crate::domain::models::service::Service;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ClientInfo {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.phone]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Selections collected by one wizard session.
#[derive(Debug, Serialize, Clone, Default)]
pub struct BookingDraft {
    pub service_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub client: ClientInfo,
}

/// A fully validated draft, ready to be confirmed.
#[derive(Debug, Clone)]
pub struct BookingSubmission {
    pub service: &'static Service,
    pub date: NaiveDate,
    pub time: String,
    pub client: ClientInfo,
}
