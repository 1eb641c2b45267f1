use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::trip::{RouteOptions, plan_trip};
use crate::db::pool::DbPool;
use crate::db::queries::save_trip_plan;
use crate::errors::{AppError, AppResult};
use crate::models::trip::{TripPlan, TripRequest};
use crate::ui::messages::{header, success};
use crate::utils::date;

/// Plan a trip, store the generated logbooks, print the route summary.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan {
        current,
        pickup,
        dropoff,
        cycle_used,
        date: start_date,
        distance,
        drive_hours,
        json,
    } = cmd
    {
        let start = match start_date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let req = TripRequest {
            current_location: current.clone(),
            pickup_location: pickup.clone(),
            dropoff_location: dropoff.clone(),
            current_cycle_used: *cycle_used,
        };
        let route = RouteOptions {
            distance_miles: *distance,
            base_drive_hours: *drive_hours,
        };

        let plan = plan_trip(&req, route, cfg);

        let mut pool = DbPool::new(&cfg.database)?;
        let dates = save_trip_plan(&mut pool, &plan, start)?;

        if *json {
            let out = serde_json::to_string_pretty(&plan)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{out}");
            return Ok(());
        }

        print_summary(&plan);

        for (day_log, d) in plan.entries.iter().zip(&dates) {
            success(format!("Logbook saved for {} (day {})", d, day_log.day));
        }
    }

    Ok(())
}

fn print_summary(plan: &TripPlan) {
    let route = &plan.route_info;

    header("Route Information");
    println!(
        "🚚 From {} → Pickup {} → Dropoff {}",
        route.from, route.pickup, route.dropoff
    );
    println!(
        "📏 Distance: {:.0} miles | Duration: {:.1} hrs",
        route.distance_miles, route.est_hours
    );
    println!("⛽ Fuel stops:");
    for stop in &route.fuel_stops {
        println!("   - {stop}");
    }
    println!(
        "👤 Driver: {} | Cycle used: {:.1} hrs",
        plan.driver, plan.cycle_used
    );
    println!();
}
