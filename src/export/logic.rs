use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;
use chrono::NaiveDate;
use rusqlite::{Row, params};
use std::path::Path;

/// High-level export flow: validate the destination, resolve the date
/// range, load the rows, write the file.
pub struct ExportLogic;

impl ExportLogic {
    /// Export stored entries.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or a period expression
    ///   (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `start:end`)
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_period(r)?),
        };

        let rows = load_entries(pool, date_bounds)?;

        if rows.is_empty() {
            warning("⚠️  No entries found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}

/// Load entries joined with their day header, bounded or not.
fn load_entries(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<EntryExport>> {
    let conn = &mut pool.conn;

    let mut rows_out = Vec::new();

    match bounds {
        None => {
            let mut stmt = conn.prepare(
                "SELECT d.date, e.time, e.duty_status, e.location, e.remarks
                 FROM entries e
                 JOIN driver_logs d ON d.id = e.log_id
                 ORDER BY d.date ASC, e.id ASC",
            )?;

            let rows = stmt.query_map([], map_row)?;
            for r in rows {
                rows_out.push(r?);
            }
        }
        Some((start, end)) => {
            let start_str = start.format("%Y-%m-%d").to_string();
            let end_str = end.format("%Y-%m-%d").to_string();

            let mut stmt = conn.prepare(
                "SELECT d.date, e.time, e.duty_status, e.location, e.remarks
                 FROM entries e
                 JOIN driver_logs d ON d.id = e.log_id
                 WHERE d.date BETWEEN ?1 AND ?2
                 ORDER BY d.date ASC, e.id ASC",
            )?;

            let rows = stmt.query_map(params![start_str, end_str], map_row)?;
            for r in rows {
                rows_out.push(r?);
            }
        }
    }

    Ok(rows_out)
}

/// Mapping DB → EntryExport (shared by both queries).
fn map_row(row: &Row<'_>) -> rusqlite::Result<EntryExport> {
    Ok(EntryExport {
        date: row.get(0)?,
        time: row.get(1)?,
        duty_status: row.get(2)?,
        location: row.get(3)?,
        remarks: row.get(4)?,
    })
}
