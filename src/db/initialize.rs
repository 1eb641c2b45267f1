use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the logbook tables if they do not exist yet.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS driver_logs (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            date           TEXT NOT NULL UNIQUE,
            driver_name    TEXT NOT NULL DEFAULT '',
            tractor_number TEXT NOT NULL DEFAULT '',
            trailer_number TEXT NOT NULL DEFAULT '',
            total_miles    INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS entries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            log_id      INTEGER NOT NULL REFERENCES driver_logs(id),
            time        TEXT NOT NULL,
            duty_status TEXT NOT NULL CHECK(duty_status IN ('OFF_DUTY','SLEEPER','DRIVING','ON_DUTY')),
            location    TEXT NOT NULL DEFAULT '',
            remarks     TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_entries_log ON entries(log_id);
        CREATE INDEX IF NOT EXISTS idx_driver_logs_date ON driver_logs(date);
        "#,
    )?;
    Ok(())
}
