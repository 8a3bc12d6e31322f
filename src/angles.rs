use crate::types::SolarPosition;

pub const DEGREES_PER_HOUR: f64 = 15.0;
/// Julian day of the J2000.0 epoch.
pub const J2000: f64 = 2451545.0;
/// Refraction plus solar semi-diameter at the horizon.
pub const HORIZON_DEPRESSION: f64 = 0.833;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn normalize_hours(hours: f64) -> f64 {
    hours.rem_euclid(24.0)
}

/// Wraps an hour difference into `[-12, 12)`.
pub fn wrap_hours(hours: f64) -> f64 {
    (hours + 12.0).rem_euclid(24.0) - 12.0
}

fn dsin(deg: f64) -> f64 {
    deg_to_rad(deg).sin()
}

fn dcos(deg: f64) -> f64 {
    deg_to_rad(deg).cos()
}

fn dtan(deg: f64) -> f64 {
    deg_to_rad(deg).tan()
}

/// Julian day at 0h UT of a Gregorian calendar date.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day as f64 + b
        - 1524.5
}

/// Low-precision sun, good to about a minute of time between 1950 and 2050.
pub fn solar_position(jd: f64) -> SolarPosition {
    let d = jd - J2000;
    let g = normalize_angle(357.529 + 0.98560028 * d);
    let q = normalize_angle(280.459 + 0.98564736 * d);
    let l = normalize_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g));
    let e = 23.439 - 0.00000036 * d;

    let ra = normalize_hours(rad_to_deg((dcos(e) * dsin(l)).atan2(dcos(l))) / DEGREES_PER_HOUR);
    let declination = rad_to_deg((dsin(e) * dsin(l)).asin());
    let equation_of_time = wrap_hours(q / DEGREES_PER_HOUR - ra);

    SolarPosition {
        declination,
        equation_of_time,
    }
}

/// Local mean solar hour of the sun's transit.
pub fn transit_hours(pos: &SolarPosition) -> f64 {
    normalize_hours(12.0 - pos.equation_of_time)
}

/// Hours between transit and the sun reaching `altitude` degrees.
/// `None` when the sun never gets there on that day.
pub fn hour_angle_for_altitude(latitude: f64, declination: f64, altitude: f64) -> Option<f64> {
    let cos_h = (dsin(altitude) - dsin(declination) * dsin(latitude))
        / (dcos(declination) * dcos(latitude));
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }
    Some(rad_to_deg(cos_h.acos()) / DEGREES_PER_HOUR)
}

/// Sun altitude at which an object's shadow is `shadow_factor` times its
/// height plus its noon shadow.
pub fn asr_altitude(latitude: f64, declination: f64, shadow_factor: f64) -> f64 {
    let shadow = shadow_factor + dtan((latitude - declination).abs());
    rad_to_deg((1.0 / shadow).atan())
}
