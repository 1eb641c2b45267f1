use roadlogger::config::Config;
use roadlogger::core::calculator::totals::calculate_hours;
use roadlogger::core::trip::{RouteOptions, plan_trip};
use roadlogger::models::trip::TripRequest;

fn test_config() -> Config {
    Config {
        database: ":memory:".to_string(),
        ..Config::default()
    }
}

fn request() -> TripRequest {
    TripRequest {
        current_location: "Chicago".to_string(),
        pickup_location: "Cleveland".to_string(),
        dropoff_location: "New York".to_string(),
        current_cycle_used: 12.5,
    }
}

fn fixed_route(distance: f64, hours: f64) -> RouteOptions {
    RouteOptions {
        distance_miles: Some(distance),
        base_drive_hours: Some(hours),
    }
}

#[test]
fn test_short_trip_needs_no_fuel_stops() {
    let plan = plan_trip(&request(), fixed_route(500.0, 5.0), &test_config());

    assert_eq!(
        plan.route_info.fuel_stops,
        vec!["None required for this trip".to_string()]
    );
}

#[test]
fn test_fuel_stop_every_thousand_miles() {
    let plan = plan_trip(&request(), fixed_route(2350.0, 8.0), &test_config());

    assert_eq!(
        plan.route_info.fuel_stops,
        vec![
            "Fuel Stop #1 at ~1000 miles".to_string(),
            "Fuel Stop #2 at ~2000 miles".to_string(),
        ]
    );
}

#[test]
fn test_single_day_trip_shape() {
    // 9 driving hours + 2 handling hours fit inside one 11-hour day.
    let plan = plan_trip(&request(), fixed_route(800.0, 9.0), &test_config());

    assert_eq!(plan.route_info.est_hours, 11.0);
    assert_eq!(plan.entries.len(), 1);

    let day = &plan.entries[0];
    assert_eq!(day.day, 1);
    assert_eq!(day.logs.len(), 5);
    assert_eq!(day.logs[0].time.as_deref(), Some("08:00"));
    assert_eq!(day.logs[0].location.as_deref(), Some("Cleveland"));
    assert_eq!(day.logs[4].time.as_deref(), Some("19:00"));
    assert_eq!(day.logs[4].duty_status.as_deref(), Some("OFF_DUTY"));
}

#[test]
fn test_multi_day_trip_splits_at_daily_limit() {
    // 20 driving hours + 2 handling hours take two capped days.
    let plan = plan_trip(&request(), fixed_route(1800.0, 20.0), &test_config());

    assert_eq!(plan.entries.len(), 2);
    assert_eq!(plan.entries[0].day, 1);
    assert_eq!(plan.entries[1].day, 2);

    // Day two starts from the hotel, not the pickup.
    assert_eq!(plan.entries[1].logs[0].location.as_deref(), Some("Hotel"));
}

#[test]
fn test_driver_and_cycle_carried_through() {
    let cfg = test_config();
    let plan = plan_trip(&request(), fixed_route(300.0, 4.0), &cfg);

    assert_eq!(plan.driver, cfg.driver_name);
    assert_eq!(plan.cycle_used, 12.5);
    assert_eq!(plan.route_info.from, "Chicago");
    assert_eq!(plan.route_info.dropoff, "New York");
}

#[test]
fn test_generated_full_day_sums_to_24_hours() {
    let plan = plan_trip(&request(), fixed_route(800.0, 9.0), &test_config());

    let totals = calculate_hours(&plan.entries[0].logs);
    assert!((totals.total() - 24.0).abs() < 1e-9);
    assert!((totals.driving - 9.0).abs() < 1e-9);
}

#[test]
fn test_mocked_route_stays_in_demo_ranges() {
    let plan = plan_trip(&request(), RouteOptions::default(), &test_config());

    let d = plan.route_info.distance_miles;
    assert!((150.0..=2000.0).contains(&d));

    let h = plan.route_info.est_hours;
    assert!((5.0..=12.0).contains(&h));

    assert!(!plan.entries.is_empty());
}
