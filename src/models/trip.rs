use crate::models::day_log::DayLog;
use crate::models::route::RouteInfo;
use serde::{Deserialize, Serialize};

/// Trip parameters as collected from the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    #[serde(default)]
    pub current_cycle_used: f64,
}

/// A planned trip: route figures plus the generated day-grouped
/// logbook entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub driver: String,
    pub cycle_used: f64,
    pub route_info: RouteInfo,
    pub entries: Vec<DayLog>,
}
