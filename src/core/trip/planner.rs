//! Trip planning: route figures and generated daily logbook entries.

use crate::config::Config;
use crate::models::day_log::DayLog;
use crate::models::duty_status::DutyStatus;
use crate::models::log_entry::LogEntry;
use crate::models::route::RouteInfo;
use crate::models::trip::{TripPlan, TripRequest};
use rand::Rng;

/// Hours added on top of driving time for pickup and dropoff handling.
const HANDLING_HOURS: f64 = 2.0;

/// Route figures that are normally mocked. Explicit values make the
/// planner deterministic (tests, offline use); anything left `None` is
/// drawn from the demo ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteOptions {
    pub distance_miles: Option<f64>,
    pub base_drive_hours: Option<f64>,
}

/// Plan a trip: compute route figures and generate one `DayLog` per
/// calendar day needed to cover the estimated hours.
pub fn plan_trip(req: &TripRequest, route: RouteOptions, cfg: &Config) -> TripPlan {
    let mut rng = rand::thread_rng();

    let distance_miles = route
        .distance_miles
        .unwrap_or_else(|| rng.gen_range(150..=2000) as f64);
    let base_hours = route
        .base_drive_hours
        .unwrap_or_else(|| rng.gen_range(3..=10) as f64);

    let route_info = RouteInfo {
        from: req.current_location.clone(),
        pickup: req.pickup_location.clone(),
        dropoff: req.dropoff_location.clone(),
        distance_miles,
        fuel_stops: build_fuel_stops(distance_miles, cfg.fuel_stop_interval_miles),
        est_hours: base_hours + HANDLING_HOURS,
    };

    let entries = build_day_logs(&route_info, cfg);

    TripPlan {
        driver: cfg.driver_name.clone(),
        cycle_used: req.current_cycle_used,
        route_info,
        entries,
    }
}

/// One fuel stop per full interval of distance; a single placeholder
/// line when the trip is short enough to skip fueling.
fn build_fuel_stops(distance_miles: f64, interval_miles: i64) -> Vec<String> {
    let interval = interval_miles.max(1);
    let count = distance_miles as i64 / interval;

    if count == 0 {
        return vec!["None required for this trip".to_string()];
    }

    (1..=count)
        .map(|i| format!("Fuel Stop #{} at ~{} miles", i, i * interval))
        .collect()
}

/// Split the estimated hours into days, each capped at the configured
/// daily driving limit, and emit the fixed entry shape for each day.
fn build_day_logs(route: &RouteInfo, cfg: &Config) -> Vec<DayLog> {
    let mut days = Vec::new();
    let mut hours_remaining = route.est_hours;
    let mut day: u32 = 1;

    while hours_remaining > 0.0 {
        let daily_hours = hours_remaining.min(cfg.max_drive_hours);
        let start_location = if day == 1 {
            route.pickup.as_str()
        } else {
            "Hotel"
        };
        let end_time = format!("{:02}:00", 8 + daily_hours as i64);

        days.push(DayLog {
            day,
            logs: vec![
                LogEntry::new("08:00", DutyStatus::OnDuty, start_location, "Start of day"),
                LogEntry::new(
                    "09:00",
                    DutyStatus::Driving,
                    "On the road",
                    &format!("Driving... Day {day}"),
                ),
                LogEntry::new("12:00", DutyStatus::OffDuty, "Rest Area", "Lunch Break"),
                LogEntry::new("13:00", DutyStatus::Driving, "On the road", "Continue trip"),
                LogEntry::new(&end_time, DutyStatus::OffDuty, "Hotel", "End of driving day"),
            ],
        });

        hours_remaining -= daily_hours;
        day += 1;
    }

    days
}
