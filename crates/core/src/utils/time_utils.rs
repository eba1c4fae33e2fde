use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::constants::DEFAULT_EVALUATION_TZ;
use crate::errors::{Error, Result};

/// Converts a UTC instant to a calendar date in the given timezone.
///
/// This is the single source of truth for turning "now" into the evaluation
/// date used by streak and progress math.
pub fn evaluation_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's date in the given timezone.
pub fn evaluation_date_today(tz: Tz) -> NaiveDate {
    evaluation_date_from_utc(Utc::now(), tz)
}

/// Parses an IANA timezone name. An empty string resolves to the default.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_EVALUATION_TZ);
    }
    trimmed
        .parse::<Tz>()
        .map_err(|e| Error::InvalidConfigValue(format!("Unknown timezone '{}': {}", trimmed, e)))
}

/// First calendar day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Whole days from `earlier` to `later` (negative when reversed).
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}
