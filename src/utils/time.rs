//! Time utilities: parsing HH:MM wall-clock strings, duration helpers.

/// Minutes in a full 24-hour logbook day.
pub const DAY_MINUTES: i64 = 24 * 60;

/// Parse an `HH:MM` wall-clock string into minutes since midnight.
///
/// Returns `None` for anything that does not split into two integer
/// fields. A malformed time is a skippable condition, not a fatal one:
/// the rest of the day's entries must still be rendered.
pub fn parse_minutes(s: &str) -> Option<i64> {
    let (hh, mm) = s.split_once(':')?;
    let h: i64 = hh.parse().ok()?;
    let m: i64 = mm.parse().ok()?;
    Some(h * 60 + m)
}

/// Convert a minute count into fractional hours.
pub fn minutes_to_hours(mins: i64) -> f64 {
    mins as f64 / 60.0
}
