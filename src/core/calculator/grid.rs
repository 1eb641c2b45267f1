//! Hour gridline positions, independent of any log data.

use serde::Serialize;

/// One vertical mark per hour, both midnights included.
pub const HOUR_MARK_COUNT: u32 = 25;

/// A labeled vertical gridline: x position plus the hour number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourMark {
    pub x: f64,
    pub label: u32,
}

/// Evenly spaced hour marks across a `graph_width`-wide day.
pub fn build_hour_marks(graph_width: f64) -> Vec<HourMark> {
    (0..HOUR_MARK_COUNT)
        .map(|h| HourMark {
            x: f64::from(h) / 24.0 * graph_width,
            label: h,
        })
        .collect()
}
