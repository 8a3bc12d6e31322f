use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};

pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| Error::UnknownTimezone(name.to_string()))
}

/// Civil date of `instant` in `timezone`, or in the host's local zone when
/// no zone is given.
pub fn resolve_date(instant: DateTime<Utc>, timezone: Option<&str>) -> Result<NaiveDate> {
    match timezone {
        Some(name) => Ok(instant.with_timezone(&parse_timezone(name)?).date_naive()),
        None => Ok(instant.with_timezone(&Local).date_naive()),
    }
}

/// Whether `date` is the current day at `now` in `timezone`.
pub fn is_today(date: NaiveDate, now: DateTime<Utc>, timezone: Option<&str>) -> Result<bool> {
    Ok(resolve_date(now, timezone)? == date)
}
