use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a period expression into inclusive date bounds.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "{p} (start and end must have the same format)"
            )));
        }

        let (s, _) = parse_single(start).ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
        let (_, e) = parse_single(end).ok_or_else(|| AppError::InvalidPeriod(p.to_string()))?;
        Ok((s, e))
    } else {
        parse_single(p).ok_or_else(|| AppError::InvalidPeriod(p.to_string()))
    }
}

/// Bounds covered by one period atom (year, month or day).
fn parse_single(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().ok()?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)?;
            Some((d1, d2))
        }
        // YYYY-MM
        7 => {
            let y: i32 = p.get(0..4)?.parse().ok()?;
            let m: u32 = p.get(5..7)?.parse().ok()?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1)?;
            let d2 = NaiveDate::from_ymd_opt(y, m, month_last_day(y, m)?)?;
            Some((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p)?;
            Some((d, d))
        }
        _ => None,
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
