pub mod day_log;
pub mod driver_log;
pub mod duty_status;
pub mod log_entry;
pub mod log_graph;
pub mod route;
pub mod trip;
