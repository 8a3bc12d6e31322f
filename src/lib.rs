pub mod angles;
pub mod backend;
pub mod calendar;
pub mod config;
pub mod error;
pub mod format;
pub mod method;
pub mod mushaf;
pub mod qibla;
pub mod region;
pub mod schedule;
pub mod search;
pub mod types;

pub use angles::{
    asr_altitude, deg_to_rad, hour_angle_for_altitude, julian_day, normalize_angle,
    normalize_hours, rad_to_deg, solar_position, transit_hours, wrap_hours, DEGREES_PER_HOUR,
    HORIZON_DEPRESSION, J2000,
};

pub use backend::{AstronomicalBackend, SolarBackend};
pub use calendar::{is_today, parse_timezone, resolve_date};
pub use config::{Adjustments, City, CitySource, PrayerSettings, MAX_ADJUSTMENT_MINUTES};
pub use error::{Error, Result};
pub use format::{format_time, is_arabic_locale, period_marker};
pub use method::{CalculationMethod, CalculationParameters, IshaRule, Madhab};
pub use mushaf::{AyahRef, MushafIndex, MADANI_JUZ_STARTS};
pub use qibla::{distance_to_kaaba_km, qibla_bearing, KAABA};
pub use region::{method_for_coordinates, method_for_country, recommend_method};
pub use schedule::{compute_prayer_times, next_after, PrayerSchedule};
pub use search::{normalize_arabic, Hadith, HadithBook, HadithIndex, SearchHit};

pub use types::{Coordinates, DayTimes, Prayer, PrayerTimesResult, SolarPosition};
