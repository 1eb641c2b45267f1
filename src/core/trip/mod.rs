pub mod planner;

pub use planner::{RouteOptions, plan_trip};
