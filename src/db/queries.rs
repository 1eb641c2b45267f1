use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::driver_log::DriverLog;
use crate::models::log_entry::LogEntry;
use crate::models::trip::TripPlan;
use chrono::{Days, NaiveDate};
use rusqlite::{Connection, Result, Row, params};

/// Persist a planned trip: one `driver_logs` row per day, dated from
/// `start_date`. Re-planning a date replaces its previous logbook.
/// Returns the dates written, in day order.
pub fn save_trip_plan(
    pool: &mut DbPool,
    plan: &TripPlan,
    start_date: NaiveDate,
) -> AppResult<Vec<NaiveDate>> {
    let day_count = plan.entries.len().max(1) as f64;
    let miles_per_day = (plan.route_info.distance_miles / day_count).round() as i64;

    let tx = pool.conn.transaction()?;
    let mut dates = Vec::new();

    for day_log in &plan.entries {
        let date = start_date
            .checked_add_days(Days::new(u64::from(day_log.day.saturating_sub(1))))
            .ok_or_else(|| AppError::InvalidDate(format!("{start_date} + {} days", day_log.day)))?;
        let date_str = date.format("%Y-%m-%d").to_string();

        delete_by_date(&tx, &date_str)?;

        tx.execute(
            "INSERT INTO driver_logs (date, driver_name, tractor_number, trailer_number, total_miles)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![date_str, plan.driver, "", "", miles_per_day],
        )?;
        let log_id = tx.last_insert_rowid();

        for entry in &day_log.logs {
            tx.execute(
                "INSERT INTO entries (log_id, time, duty_status, location, remarks)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    log_id,
                    entry.time.as_deref().unwrap_or(""),
                    entry.duty_status.as_deref().unwrap_or(""),
                    entry.location.as_deref().unwrap_or(""),
                    entry.remarks.as_deref().unwrap_or(""),
                ],
            )?;
        }

        dates.push(date);
    }

    tx.commit()?;
    Ok(dates)
}

/// Load one day's entries in insertion order. The planner writes them
/// time-ordered already; re-sorting here would hide upstream ordering
/// bugs the audit pass is meant to catch.
pub fn load_entries_by_date(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Vec<LogEntry>> {
    let mut stmt = pool.conn.prepare(
        "SELECT e.time, e.duty_status, e.location, e.remarks
         FROM entries e
         JOIN driver_logs d ON d.id = e.log_id
         WHERE d.date = ?1
         ORDER BY e.id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_entry_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_entry_row(row: &Row) -> Result<LogEntry> {
    Ok(LogEntry {
        time: Some(row.get::<_, String>("time")?),
        duty_status: Some(row.get::<_, String>("duty_status")?),
        location: Some(row.get::<_, String>("location")?),
        remarks: Some(row.get::<_, String>("remarks")?),
    })
}

/// Load the per-day logbook header, if the date has one.
pub fn load_driver_log(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Option<DriverLog>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, date, driver_name, tractor_number, trailer_number, total_miles
         FROM driver_logs
         WHERE date = ?1",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let mut rows = stmt.query_map([date_str], map_log_row)?;

    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

/// Stored log days (header + entry count), optionally bounded,
/// ordered by date.
pub fn list_log_days(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<(DriverLog, i64)>> {
    let sql_all = "SELECT d.id, d.date, d.driver_name, d.tractor_number, d.trailer_number,
                          d.total_miles, COUNT(e.id) AS entry_count
                   FROM driver_logs d
                   LEFT JOIN entries e ON e.log_id = d.id
                   GROUP BY d.id
                   ORDER BY d.date ASC";
    let sql_bounded = "SELECT d.id, d.date, d.driver_name, d.tractor_number, d.trailer_number,
                              d.total_miles, COUNT(e.id) AS entry_count
                       FROM driver_logs d
                       LEFT JOIN entries e ON e.log_id = d.id
                       WHERE d.date BETWEEN ?1 AND ?2
                       GROUP BY d.id
                       ORDER BY d.date ASC";

    let map = |row: &Row| -> Result<(DriverLog, i64)> {
        Ok((map_log_row(row)?, row.get("entry_count")?))
    };

    let mut out = Vec::new();
    match bounds {
        None => {
            let mut stmt = pool.conn.prepare(sql_all)?;
            let rows = stmt.query_map([], map)?;
            for r in rows {
                out.push(r?);
            }
        }
        Some((start, end)) => {
            let mut stmt = pool.conn.prepare(sql_bounded)?;
            let rows = stmt.query_map(
                params![
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                map,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }
    Ok(out)
}

/// Delete one day's logbook. Returns the number of headers removed
/// (0 when the date had none).
pub fn delete_log_by_date(pool: &mut DbPool, date: &NaiveDate) -> AppResult<usize> {
    let date_str = date.format("%Y-%m-%d").to_string();
    delete_by_date(&pool.conn, &date_str)
}

fn delete_by_date(conn: &Connection, date_str: &str) -> AppResult<usize> {
    conn.execute(
        "DELETE FROM entries
         WHERE log_id IN (SELECT id FROM driver_logs WHERE date = ?1)",
        [date_str],
    )?;
    let removed = conn.execute("DELETE FROM driver_logs WHERE date = ?1", [date_str])?;
    Ok(removed)
}

fn map_log_row(row: &Row) -> Result<DriverLog> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(DriverLog {
        id: row.get("id")?,
        date,
        driver_name: row.get("driver_name")?,
        tractor_number: row.get("tractor_number")?,
        trailer_number: row.get("trailer_number")?,
        total_miles: row.get("total_miles")?,
    })
}
