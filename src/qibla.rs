use crate::angles::{deg_to_rad, normalize_angle, rad_to_deg};
use crate::types::Coordinates;

pub const KAABA: Coordinates = Coordinates::new(21.4225, 39.8262);
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Initial great-circle bearing toward the Kaaba, degrees clockwise from
/// true north in `[0, 360)`.
pub fn qibla_bearing(from: Coordinates) -> f64 {
    let phi1 = deg_to_rad(from.latitude);
    let phi2 = deg_to_rad(KAABA.latitude);
    let d_lambda = deg_to_rad(KAABA.longitude - from.longitude);
    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();
    normalize_angle(rad_to_deg(y.atan2(x)))
}

/// Haversine distance to the Kaaba.
pub fn distance_to_kaaba_km(from: Coordinates) -> f64 {
    let phi1 = deg_to_rad(from.latitude);
    let phi2 = deg_to_rad(KAABA.latitude);
    let d_phi = phi2 - phi1;
    let d_lambda = deg_to_rad(KAABA.longitude - from.longitude);
    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().min(1.0).asin()
}
