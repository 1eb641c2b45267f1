use crate::models::duty_status::DutyStatus;
use crate::utils::time::parse_minutes;
use serde::{Deserialize, Serialize};

/// One duty-status change (or remark) as delivered by the trip planning
/// backend. Every field is optional on purpose: a malformed entry must
/// degrade the rendered day, not abort it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Wall-clock `HH:MM` start of the interval.
    #[serde(default)]
    pub time: Option<String>,

    /// Status tag (`OFF_DUTY`, `SLEEPER`, `DRIVING`, `ON_DUTY`).
    #[serde(default)]
    pub duty_status: Option<String>,

    /// Free-text display fields, passed through untouched.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl LogEntry {
    pub fn new(time: &str, status: DutyStatus, location: &str, remarks: &str) -> Self {
        Self {
            time: Some(time.to_string()),
            duty_status: Some(status.tag().to_string()),
            location: Some(location.to_string()),
            remarks: Some(remarks.to_string()),
        }
    }

    /// Minutes since midnight, if the time field parses.
    pub fn minutes(&self) -> Option<i64> {
        self.time.as_deref().and_then(parse_minutes)
    }

    /// Parsed duty status, if present and recognized.
    pub fn status(&self) -> Option<DutyStatus> {
        self.duty_status.as_deref().and_then(DutyStatus::from_tag)
    }
}
