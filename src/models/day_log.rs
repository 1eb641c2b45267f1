use crate::models::log_entry::LogEntry;
use serde::{Deserialize, Serialize};

/// One calendar day of logbook entries, as grouped by the trip planner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayLog {
    pub day: u32,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

/// Flatten day-grouped entries into the single ordered sequence the
/// graph calculators operate on. This adapter stays at the boundary:
/// the calculators themselves only ever see one flat day.
pub fn flatten(days: &[DayLog]) -> Vec<LogEntry> {
    days.iter().flat_map(|d| d.logs.iter().cloned()).collect()
}
