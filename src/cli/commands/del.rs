use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::delete_log_by_date;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use std::io::{self, Write};

/// Delete one stored logbook day after confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date: date_str } = cmd {
        let d =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        print!("Delete the logbook for {d}? [y/N]: ");
        io::stdout().flush().ok();

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        let ans = answer.trim().to_ascii_lowercase();

        if ans != "y" && ans != "yes" {
            println!("Aborted.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let removed = delete_log_by_date(&mut pool, &d)?;

        if removed == 0 {
            warning(format!("No logbook found for date {d}"));
        } else {
            success(format!("Deleted logbook for {d}"));
        }
    }
    Ok(())
}
