use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use thiserror::Error;
use crate::domain::models::booking::{BookingDraft, BookingSubmission, ClientInfo};
use crate::domain::models::service::find_service;
use crate::domain::models::slot::TimeSlot;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    ServiceSelection,
    DateSelection,
    TimeSelection,
    ContactInfo,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            Self::ServiceSelection => 1,
            Self::DateSelection => 2,
            Self::TimeSelection => 3,
            Self::ContactInfo => 4,
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::ServiceSelection => Some(Self::DateSelection),
            Self::DateSelection => Some(Self::TimeSelection),
            Self::TimeSelection => Some(Self::ContactInfo),
            Self::ContactInfo => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Self::ServiceSelection => None,
            Self::DateSelection => Some(Self::ServiceSelection),
            Self::TimeSelection => Some(Self::DateSelection),
            Self::ContactInfo => Some(Self::TimeSelection),
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ServiceSelection => "service selection",
            Self::DateSelection => "date selection",
            Self::TimeSelection => "time selection",
            Self::ContactInfo => "contact info",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WizardError {
    #[error("Action belongs to the {expected} step, but the wizard is at {current}")]
    WrongStep { expected: WizardStep, current: WizardStep },
    #[error("Unknown service: {0}")]
    UnknownService(String),
    #[error("Date {0} is not bookable")]
    DateUnavailable(NaiveDate),
    #[error("Time slot {0} is not available")]
    SlotUnavailable(String),
    #[error("The {0} step is not complete")]
    StepIncomplete(WizardStep),
    #[error("Already at the first step")]
    AtFirstStep,
    #[error("Already at the last step; confirm the booking instead")]
    AtLastStep,
}

/// Sundays are closed and nothing on or before `today` can be picked.
pub fn is_bookable_date(date: NaiveDate, today: NaiveDate) -> bool {
    date > today && date.weekday() != Weekday::Sun
}

/// Linear four-step booking flow for one visitor.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: WizardStep,
    draft: BookingDraft,
    slots: Vec<TimeSlot>,
    webhook_url: Option<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::ServiceSelection,
            draft: BookingDraft::default(),
            slots: Vec::new(),
            webhook_url: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref()
    }

    pub fn set_webhook_url(&mut self, url: Option<String>) {
        self.webhook_url = url.filter(|u| !u.trim().is_empty());
    }

    fn step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::ServiceSelection => self.draft.service_id.is_some(),
            WizardStep::DateSelection => self.draft.date.is_some(),
            WizardStep::TimeSelection => self.draft.time.is_some(),
            WizardStep::ContactInfo => self.draft.client.is_complete(),
        }
    }

    /// On the last step this gates the confirm action.
    pub fn next_enabled(&self) -> bool {
        self.step_complete(self.step)
    }

    pub fn back_enabled(&self) -> bool {
        self.step.previous().is_some()
    }

    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let next = self.step.next().ok_or(WizardError::AtLastStep)?;
        if !self.next_enabled() {
            return Err(WizardError::StepIncomplete(self.step));
        }
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        let previous = self.step.previous().ok_or(WizardError::AtFirstStep)?;
        self.step = previous;
        Ok(previous)
    }

    fn expect_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step != expected {
            return Err(WizardError::WrongStep { expected, current: self.step });
        }
        Ok(())
    }

    pub fn select_service(&mut self, service_id: &str) -> Result<(), WizardError> {
        self.expect_step(WizardStep::ServiceSelection)?;
        let service = find_service(service_id)
            .ok_or_else(|| WizardError::UnknownService(service_id.to_string()))?;

        self.draft.service_id = Some(service.id.to_string());
        self.draft.date = None;
        self.draft.time = None;
        self.slots.clear();
        Ok(())
    }

    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), WizardError> {
        self.expect_step(WizardStep::DateSelection)?;
        if !is_bookable_date(date, today) {
            return Err(WizardError::DateUnavailable(date));
        }

        self.draft.date = Some(date);
        self.draft.time = None;
        self.slots.clear();
        Ok(())
    }

    /// Stores the slots looked up for `date`. Returns `false` when the visitor
    /// has moved on to another date in the meantime and the list was dropped.
    pub fn apply_slots(&mut self, date: NaiveDate, slots: Vec<TimeSlot>) -> bool {
        if self.draft.date != Some(date) {
            return false;
        }
        self.slots = slots;
        true
    }

    pub fn select_time(&mut self, time: &str) -> Result<(), WizardError> {
        self.expect_step(WizardStep::TimeSelection)?;
        let slot = self.slots.iter()
            .find(|s| s.time == time && s.available)
            .ok_or_else(|| WizardError::SlotUnavailable(time.to_string()))?;

        self.draft.time = Some(slot.time.clone());
        Ok(())
    }

    pub fn set_contact(&mut self, client: ClientInfo) -> Result<(), WizardError> {
        self.expect_step(WizardStep::ContactInfo)?;
        self.draft.client = client;
        Ok(())
    }

    pub fn submission(&self) -> Result<BookingSubmission, WizardError> {
        self.expect_step(WizardStep::ContactInfo)?;

        let incomplete = [
            WizardStep::ServiceSelection,
            WizardStep::DateSelection,
            WizardStep::TimeSelection,
            WizardStep::ContactInfo,
        ]
        .into_iter()
        .find(|step| !self.step_complete(*step));
        if let Some(step) = incomplete {
            return Err(WizardError::StepIncomplete(step));
        }

        let service_id = self.draft.service_id.as_deref().unwrap_or_default();
        let service = find_service(service_id)
            .ok_or_else(|| WizardError::UnknownService(service_id.to_string()))?;
        let (Some(date), Some(time)) = (self.draft.date, self.draft.time.clone()) else {
            return Err(WizardError::StepIncomplete(WizardStep::TimeSelection));
        };

        Ok(BookingSubmission {
            service,
            date,
            time,
            client: self.draft.client.clone(),
        })
    }

    /// Discards the draft. The webhook URL belongs to the session, not the draft.
    pub fn reset(&mut self) {
        let webhook_url = self.webhook_url.take();
        *self = Self::new();
        self.webhook_url = webhook_url;
    }
}
