use crate::core::calculator::{grid, polyline, totals};
use crate::models::log_entry::LogEntry;
use crate::models::log_graph::LogGraph;

pub struct Core;

impl Core {
    /// Run the full graph pipeline over one day's entries: totals,
    /// polyline and hour grid, recomputed from scratch on every call.
    pub fn build_log_graph(entries: &[LogEntry], graph_width: f64) -> LogGraph {
        LogGraph {
            totals: totals::calculate_hours(entries),
            points: polyline::map_to_points(entries, graph_width),
            hour_marks: grid::build_hour_marks(graph_width),
        }
    }
}
