use chrono::NaiveDate;
use serde::Serialize;

/// Per-day logbook header, persisted in `driver_logs`.
#[derive(Debug, Clone, Serialize)]
pub struct DriverLog {
    pub id: i64,
    pub date: NaiveDate,
    pub driver_name: String,
    pub tractor_number: String,
    pub trailer_number: String,
    pub total_miles: i64,
}

impl DriverLog {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
