//! Mapping of log entries onto timeline polyline coordinates.

use crate::models::log_entry::LogEntry;
use crate::utils::time::DAY_MINUTES;
use serde::Serialize;

/// A point in graph-local coordinates: x proportional to time of day,
/// y the fixed ordinate of the entry's duty status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Map entries onto polyline points in a `graph_width`-wide day.
///
/// Entries missing a parseable time or a recognized duty status are
/// dropped, not emitted as placeholders. Input order is preserved; no
/// sorting or deduplication happens here. The output is meant to be
/// rendered as one connected polyline.
pub fn map_to_points(entries: &[LogEntry], graph_width: f64) -> Vec<PlotPoint> {
    entries
        .iter()
        .filter_map(|entry| {
            let minutes = entry.minutes()?;
            let status = entry.status()?;
            Some(PlotPoint {
                x: minutes as f64 / DAY_MINUTES as f64 * graph_width,
                y: status.ordinate(),
            })
        })
        .collect()
}
