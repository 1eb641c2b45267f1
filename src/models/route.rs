use serde::{Deserialize, Serialize};

/// Route figures for a planned trip. The graph pipeline never reads
/// these; they are carried through for display only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub from: String,
    pub pickup: String,
    pub dropoff: String,
    pub distance_miles: f64,
    pub fuel_stops: Vec<String>,
    pub est_hours: f64,
}
