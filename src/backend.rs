use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::angles::{
    asr_altitude, hour_angle_for_altitude, julian_day, solar_position, transit_hours,
    DEGREES_PER_HOUR, HORIZON_DEPRESSION,
};
use crate::error::{Error, Result};
use crate::method::{CalculationParameters, IshaRule};
use crate::types::{Coordinates, DayTimes, Prayer};

pub trait AstronomicalBackend {
    /// Returned instants are absolute and in day order; adjustments from
    /// `params` are already applied.
    fn day_times(
        &self,
        coordinates: Coordinates,
        date: NaiveDate,
        params: &CalculationParameters,
    ) -> Result<DayTimes>;
}

impl<B: AstronomicalBackend + ?Sized> AstronomicalBackend for &B {
    fn day_times(
        &self,
        coordinates: Coordinates,
        date: NaiveDate,
        params: &CalculationParameters,
    ) -> Result<DayTimes> {
        (**self).day_times(coordinates, date, params)
    }
}

/// Event times in local mean solar hours of the requested day.
#[derive(Debug, Clone, Copy)]
struct SolarHours {
    fajr: Option<f64>,
    sunrise: f64,
    dhuhr: f64,
    asr: f64,
    sunset: f64,
    isha: Option<f64>,
}

impl SolarHours {
    const INITIAL: SolarHours = SolarHours {
        fajr: Some(5.0),
        sunrise: 6.0,
        dhuhr: 12.0,
        asr: 13.0,
        sunset: 18.0,
        isha: Some(18.0),
    };
}

/// Undefined Fajr or Isha, or one further than half the night from sunrise or
/// sunset, is pinned to the middle of the night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarBackend {
    pub iterations: u32,
}

impl Default for SolarBackend {
    fn default() -> Self {
        Self { iterations: 2 }
    }
}

impl SolarBackend {
    fn refine(
        &self,
        jd: f64,
        latitude: f64,
        params: &CalculationParameters,
        guess: &SolarHours,
        date: NaiveDate,
    ) -> Result<SolarHours> {
        let undefined = |prayer| Error::SunNeverCrosses {
            prayer,
            latitude,
            date,
        };
        let sun_at = |hours: f64| solar_position(jd + hours / 24.0);

        let angle_time = |hours: f64, altitude: f64, before_noon: bool| {
            let pos = sun_at(hours);
            hour_angle_for_altitude(latitude, pos.declination, altitude).map(|t| {
                let noon = transit_hours(&pos);
                if before_noon {
                    noon - t
                } else {
                    noon + t
                }
            })
        };

        let dhuhr = transit_hours(&sun_at(guess.dhuhr));
        let sunrise = angle_time(guess.sunrise, -HORIZON_DEPRESSION, true)
            .ok_or_else(|| undefined(Prayer::Sunrise))?;
        let sunset = angle_time(guess.sunset, -HORIZON_DEPRESSION, false)
            .ok_or_else(|| undefined(Prayer::Maghrib))?;

        let asr_pos = sun_at(guess.asr);
        let asr_alt = asr_altitude(latitude, asr_pos.declination, params.asr_shadow_factor);
        let asr = angle_time(guess.asr, asr_alt, false).ok_or_else(|| undefined(Prayer::Asr))?;

        let fajr = angle_time(guess.fajr.unwrap_or(guess.sunrise), -params.fajr_angle, true);
        let isha = match params.isha {
            IshaRule::Angle(angle) => angle_time(guess.isha.unwrap_or(guess.sunset), -angle, false),
            IshaRule::MinutesAfterMaghrib(minutes) => Some(sunset + minutes as f64 / 60.0),
        };

        Ok(SolarHours {
            fajr,
            sunrise,
            dhuhr,
            asr,
            sunset,
            isha,
        })
    }
}

impl AstronomicalBackend for SolarBackend {
    fn day_times(
        &self,
        coordinates: Coordinates,
        date: NaiveDate,
        params: &CalculationParameters,
    ) -> Result<DayTimes> {
        let Coordinates {
            latitude,
            longitude,
        } = coordinates;
        let jd = julian_day(date.year(), date.month(), date.day()) - longitude / (DEGREES_PER_HOUR * 24.0);

        let mut hours = SolarHours::INITIAL;
        for _ in 0..self.iterations.max(1) {
            hours = self.refine(jd, latitude, params, &hours, date)?;
        }

        let half_night = (24.0 - (hours.sunset - hours.sunrise)) / 2.0;
        let earliest_fajr = hours.sunrise - half_night;
        let fajr = match hours.fajr {
            Some(f) if f >= earliest_fajr => f,
            _ => {
                tracing::debug!(%date, latitude, "fajr pinned to middle of the night");
                earliest_fajr
            }
        };
        let isha = match (hours.isha, params.isha) {
            (Some(i), IshaRule::MinutesAfterMaghrib(_)) => i,
            (Some(i), IshaRule::Angle(_)) if i <= hours.sunset + half_night => i,
            _ => {
                tracing::debug!(%date, latitude, "isha pinned to middle of the night");
                hours.sunset + half_night
            }
        };

        let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
        let to_instant = |local_hours: f64, prayer: Prayer| {
            let utc_hours = local_hours - longitude / DEGREES_PER_HOUR;
            instant_from_hours(midnight, utc_hours, params.adjustments.minutes(prayer))
        };

        Ok(DayTimes {
            fajr: to_instant(fajr, Prayer::Fajr),
            sunrise: to_instant(hours.sunrise, Prayer::Sunrise),
            dhuhr: to_instant(hours.dhuhr, Prayer::Dhuhr),
            asr: to_instant(hours.asr, Prayer::Asr),
            maghrib: to_instant(hours.sunset, Prayer::Maghrib),
            isha: to_instant(isha, Prayer::Isha),
        })
    }
}

/// Rounds to the nearest whole minute, then applies the adjustment.
fn instant_from_hours(
    midnight: DateTime<Utc>,
    utc_hours: f64,
    adjustment_minutes: i32,
) -> DateTime<Utc> {
    let seconds = (utc_hours * 3600.0).round() as i64;
    let minutes = (seconds + 30).div_euclid(60);
    midnight + Duration::minutes(minutes + i64::from(adjustment_minutes))
}
