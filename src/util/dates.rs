//! Calendar-day arithmetic for expiration facts.
//!
//! Expirations are reported as whole calendar-day increments between two
//! dates, not elapsed time: partial days truncate toward zero extra days.
//! Dates already in the past count as zero days remaining.

use chrono::NaiveDate;

use crate::error::{HealthCheckError, Result};

/// Date formats the console emits. `%Y/%m/%d` is the primary API format;
/// the US ordering shows up in a few summary cells.
const DATE_FORMATS: [&str; 3] = ["%Y/%m/%d", "%m/%d/%Y", "%Y-%m-%d"];

/// Parses one of the console's date spellings.
pub fn parse_console_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    Err(HealthCheckError::missing(format!(
        "unparseable date {trimmed:?}"
    )))
}

/// Whole calendar days from `start` to `end`, floored at zero.
pub fn days_between(start: &str, end: &str) -> Result<i64> {
    let start = parse_console_date(start)?;
    let end = parse_console_date(end)?;
    Ok((end - start).num_days().max(0))
}

/// Days from `today` until `expiration`, floored at zero.
pub fn days_until(today: NaiveDate, expiration: &str) -> Result<i64> {
    let end = parse_console_date(expiration)?;
    Ok((end - today).num_days().max(0))
}
