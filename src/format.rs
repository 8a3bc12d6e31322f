use chrono::{DateTime, Timelike, Utc};

use crate::calendar::parse_timezone;
use crate::error::Result;

/// True for `ar`, `ar-SA`, `ar_EG` and friends.
pub fn is_arabic_locale(locale: &str) -> bool {
    locale
        .split(['-', '_'])
        .next()
        .is_some_and(|primary| primary.eq_ignore_ascii_case("ar"))
}

pub fn period_marker(hour: u32, locale: Option<&str>) -> &'static str {
    let pm = hour >= 12;
    match (locale.is_some_and(is_arabic_locale), pm) {
        (true, false) => "ص",
        (true, true) => "م",
        (false, false) => "AM",
        (false, true) => "PM",
    }
}

/// Short 12-hour time of day, `H:MM` plus a period marker, as seen in `timezone`.
pub fn format_time(instant: DateTime<Utc>, timezone: &str, locale: Option<&str>) -> Result<String> {
    let local = instant.with_timezone(&parse_timezone(timezone)?);
    let (_, hour12) = local.hour12();
    Ok(format!(
        "{}:{:02} {}",
        hour12,
        local.minute(),
        period_marker(local.hour(), locale)
    ))
}
