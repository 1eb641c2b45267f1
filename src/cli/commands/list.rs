use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{list_log_days, load_entries_by_date};
use crate::errors::AppResult;
use crate::models::log_entry::LogEntry;
use crate::utils::colors::dim;
use crate::utils::date::parse_period;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        entries: with_entries,
    } = cmd
    {
        let bounds = match period {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(parse_period(p)?),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let days = list_log_days(&mut pool, bounds)?;

        if days.is_empty() {
            println!("No logbooks found.");
            return Ok(());
        }

        println!("📅 Saved logbook days:\n");

        let mut table = Table::new(vec![
            Column {
                header: "Date".to_string(),
                width: 12,
            },
            Column {
                header: "Driver".to_string(),
                width: 16,
            },
            Column {
                header: "Miles".to_string(),
                width: 7,
            },
            Column {
                header: "Entries".to_string(),
                width: 7,
            },
        ]);

        for (log, entry_count) in &days {
            table.add_row(vec![
                log.date_str(),
                dim(&log.driver_name),
                log.total_miles.to_string(),
                entry_count.to_string(),
            ]);
        }

        print!("{}", table.render());

        if *with_entries {
            for (log, _) in &days {
                print_entries(&mut pool, &log.date)?;
            }
        }
    }
    Ok(())
}

fn print_entries(pool: &mut DbPool, date: &NaiveDate) -> AppResult<()> {
    let entries = load_entries_by_date(pool, date)?;

    println!("\n=== {date} ===");
    for entry in &entries {
        println!("{}", format_entry(entry));
    }
    Ok(())
}

fn format_entry(entry: &LogEntry) -> String {
    let time = entry.time.as_deref().unwrap_or("--:--");
    let status = match entry.status() {
        Some(s) => s.colour().paint(s.label()).to_string(),
        None => dim("-"),
    };
    let location = entry.location.as_deref().unwrap_or("");
    let remarks = entry.remarks.as_deref().unwrap_or("");

    format!("  {time}  {status}  {location} → {remarks}")
}
