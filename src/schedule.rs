use chrono::{DateTime, Duration, Utc};

use crate::backend::{AstronomicalBackend, SolarBackend};
use crate::calendar::{is_today, resolve_date};
use crate::config::{City, PrayerSettings};
use crate::error::{Error, Result};
use crate::types::{DayTimes, Prayer, PrayerTimesResult};

/// Recomputes on every call; nothing is cached or persisted.
#[derive(Debug, Clone, Default)]
pub struct PrayerSchedule<B = SolarBackend> {
    backend: B,
}

impl<B: AstronomicalBackend> PrayerSchedule<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Schedule for the day containing `target` (default: now) in the city's zone.
    pub fn compute(
        &self,
        city: &City,
        settings: &PrayerSettings,
        target: Option<DateTime<Utc>>,
    ) -> Result<PrayerTimesResult> {
        self.compute_at(city, settings, target, Utc::now())
    }

    pub fn compute_at(
        &self,
        city: &City,
        settings: &PrayerSettings,
        target: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<PrayerTimesResult> {
        let params = settings.parameters();
        let timezone = city.timezone.as_deref();

        let date = resolve_date(target.unwrap_or(now), timezone)?;
        let times = self.backend.day_times(city.coordinates, date, &params)?;

        // Browsing another day shows that whole day as upcoming.
        let reference = if is_today(date, now, timezone)? {
            now
        } else {
            times.fajr - Duration::milliseconds(1)
        };

        let (next_prayer, next_prayer_time) = match next_after(&times, reference) {
            Some(next) => next,
            None => {
                let tomorrow = date.succ_opt().ok_or(Error::DateOutOfRange(date))?;
                let next_day = self.backend.day_times(city.coordinates, tomorrow, &params)?;
                (Prayer::Fajr, next_day.fajr)
            }
        };

        let time_to_next_ms = (next_prayer_time - now).num_milliseconds().max(0);

        tracing::debug!(
            city = city.name.as_deref().unwrap_or("unnamed"),
            %date,
            method = %settings.method,
            next = %next_prayer,
            time_to_next_ms,
            "computed prayer schedule"
        );

        Ok(PrayerTimesResult {
            date,
            times,
            next_prayer,
            next_prayer_time,
            time_to_next_ms,
        })
    }
}

/// First prayer strictly after `reference`, in day order.
pub fn next_after(times: &DayTimes, reference: DateTime<Utc>) -> Option<(Prayer, DateTime<Utc>)> {
    times.iter().find(|&(_, at)| at > reference)
}

/// Schedule with the default solar backend.
pub fn compute_prayer_times(
    city: &City,
    settings: &PrayerSettings,
    target: Option<DateTime<Utc>>,
) -> Result<PrayerTimesResult> {
    PrayerSchedule::new(SolarBackend::default()).compute(city, settings, target)
}
