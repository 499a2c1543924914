use crate::domain::models::booking::ClientInfo;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SelectServiceRequest {
    pub service_id: String,
}

#[derive(Deserialize)]
pub struct SelectDateRequest {
    pub date: String,
}

#[derive(Deserialize)]
pub struct SelectTimeRequest {
    pub time: String,
}

#[derive(Deserialize)]
pub struct ContactInfoRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<ContactInfoRequest> for ClientInfo {
    fn from(req: ContactInfoRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
        }
    }
}

#[derive(Deserialize)]
pub struct WebhookConfigRequest {
    pub url: Option<String>,
}
