//! Diagnostics for entry sequences.
//!
//! The calculators skip or clamp around malformed input without telling
//! anyone. The audit pass lists what was skipped, so callers can surface
//! data problems without changing the numeric contract.

use crate::models::duty_status::DutyStatus;
use crate::models::log_entry::LogEntry;
use crate::utils::time::parse_minutes;
use serde::Serialize;
use std::fmt;

/// A non-fatal problem found while scanning an entry sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryIssue {
    MissingTime { index: usize },
    BadTime { index: usize, value: String },
    MissingStatus { index: usize },
    UnknownStatus { index: usize, value: String },
    /// Timestamp earlier than its predecessor; the aggregator clamps
    /// the negative duration to zero.
    OutOfOrder { index: usize, minutes: i64, prev_minutes: i64 },
}

impl fmt::Display for EntryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryIssue::MissingTime { index } => {
                write!(f, "entry {index}: missing time")
            }
            EntryIssue::BadTime { index, value } => {
                write!(f, "entry {index}: unparseable time '{value}'")
            }
            EntryIssue::MissingStatus { index } => {
                write!(f, "entry {index}: missing duty status")
            }
            EntryIssue::UnknownStatus { index, value } => {
                write!(f, "entry {index}: unknown duty status '{value}'")
            }
            EntryIssue::OutOfOrder {
                index,
                minutes,
                prev_minutes,
            } => {
                write!(
                    f,
                    "entry {index}: time goes backwards ({minutes}min after {prev_minutes}min), duration clamped to zero"
                )
            }
        }
    }
}

/// Scan a sequence for everything the calculators will silently skip.
pub fn audit_entries(entries: &[LogEntry]) -> Vec<EntryIssue> {
    let mut issues = Vec::new();
    let mut prev_minutes: Option<i64> = None;

    for (index, entry) in entries.iter().enumerate() {
        match entry.time.as_deref() {
            None => issues.push(EntryIssue::MissingTime { index }),
            Some(raw) => match parse_minutes(raw) {
                None => issues.push(EntryIssue::BadTime {
                    index,
                    value: raw.to_string(),
                }),
                Some(minutes) => {
                    if let Some(prev) = prev_minutes
                        && minutes < prev
                    {
                        issues.push(EntryIssue::OutOfOrder {
                            index,
                            minutes,
                            prev_minutes: prev,
                        });
                    }
                    prev_minutes = Some(minutes);
                }
            },
        }

        match entry.duty_status.as_deref() {
            None => issues.push(EntryIssue::MissingStatus { index }),
            Some(raw) if DutyStatus::from_tag(raw).is_none() => {
                issues.push(EntryIssue::UnknownStatus {
                    index,
                    value: raw.to_string(),
                });
            }
            Some(_) => {}
        }
    }

    issues
}
