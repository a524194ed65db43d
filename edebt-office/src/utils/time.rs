//! Date helpers for form input and wire payloads
//!
//! Form inputs carry bare `YYYY-MM-DD` strings; the server expects full
//! midnight-UTC instants (`YYYY-MM-DDT00:00:00.000Z`) in payload bodies.
//! Conversions between the two live here.

use chrono::{Duration, NaiveDate, NaiveTime, SecondsFormat};
use shared::{AppError, AppResult};

/// Parse a date input (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Render a date back into its input format (YYYY-MM-DD)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Midnight-UTC instant the server expects in payload bodies
pub fn to_wire_instant(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Whole days from `from` to `to`; negative when `to` is earlier
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Date shifted by a number of days; `None` when the shift leaves the
/// calendar (absurd payment terms come straight from an input field)
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    Duration::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}
