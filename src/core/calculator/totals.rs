//! Per-status hour aggregation over one 24-hour logbook day.

use crate::models::duty_status::DutyStatus;
use crate::models::log_entry::LogEntry;
use crate::utils::time::{DAY_MINUTES, minutes_to_hours};
use serde::Serialize;

/// Hours spent in each duty status across the day. One field per
/// status: adding a variant to `DutyStatus` forces this accumulator to
/// be revisited instead of silently dropping the new category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StatusHours {
    pub off_duty: f64,
    pub sleeper: f64,
    pub driving: f64,
    pub on_duty: f64,
}

impl StatusHours {
    pub fn get(&self, status: DutyStatus) -> f64 {
        match status {
            DutyStatus::OffDuty => self.off_duty,
            DutyStatus::Sleeper => self.sleeper,
            DutyStatus::Driving => self.driving,
            DutyStatus::OnDuty => self.on_duty,
        }
    }

    fn add(&mut self, status: DutyStatus, hours: f64) {
        match status {
            DutyStatus::OffDuty => self.off_duty += hours,
            DutyStatus::Sleeper => self.sleeper += hours,
            DutyStatus::Driving => self.driving += hours,
            DutyStatus::OnDuty => self.on_duty += hours,
        }
    }

    /// Sum of all four buckets. Exactly 24.0 for a fully parseable,
    /// time-ordered day.
    pub fn total(&self) -> f64 {
        self.off_duty + self.sleeper + self.driving + self.on_duty
    }
}

/// Aggregate per-status hours from a time-ordered entry sequence.
///
/// Each entry opens an interval that runs until the next entry; the
/// last one runs until 24:00. A pair with an unparseable time on either
/// side is skipped whole, as is any interval whose entry carries no
/// recognized duty status. Negative raw differences are clamped to
/// zero, which absorbs out-of-order timestamps (`audit_entries` reports
/// them).
pub fn calculate_hours(entries: &[LogEntry]) -> StatusHours {
    let mut totals = StatusHours::default();

    for pair in entries.windows(2) {
        let (Some(start), Some(end)) = (pair[0].minutes(), pair[1].minutes()) else {
            continue;
        };
        let Some(status) = pair[0].status() else {
            continue;
        };

        let duration = (end - start).max(0);
        totals.add(status, minutes_to_hours(duration));
    }

    // The last entry's status holds until the end of the day.
    if let Some(last) = entries.last()
        && let Some(start) = last.minutes()
        && let Some(status) = last.status()
    {
        totals.add(status, minutes_to_hours(DAY_MINUTES - start));
    }

    totals
}
