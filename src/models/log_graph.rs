use crate::core::calculator::grid::HourMark;
use crate::core::calculator::polyline::PlotPoint;
use crate::core::calculator::totals::StatusHours;
use serde::Serialize;

/// Everything a renderer needs to draw one logbook day: per-status hour
/// totals, the timeline polyline, and the static hour grid. Numbers and
/// coordinates only; styling belongs to the consumer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogGraph {
    pub totals: StatusHours,
    pub points: Vec<PlotPoint>,
    pub hour_marks: Vec<HourMark>,
}
