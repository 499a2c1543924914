use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub time: String,
    pub available: bool,
}

impl TimeSlot {
    pub fn new(time: &str, available: bool) -> Self {
        Self { time: time.to_string(), available }
    }
}

/// Shown when the webhook cannot be reached so the visitor can still pick a time.
pub fn fallback_slots() -> Vec<TimeSlot> {
    vec![
        TimeSlot::new("09:00", true),
        TimeSlot::new("10:00", true),
        TimeSlot::new("11:00", false),
        TimeSlot::new("14:00", true),
        TimeSlot::new("15:00", true),
        TimeSlot::new("16:00", true),
    ]
}
