use mawaqit::config::{Adjustments, City, CitySource, PrayerSettings};
use mawaqit::method::{CalculationMethod, Madhab};

#[test]
fn test_defaults() {
    let s = PrayerSettings::default();
    assert_eq!(s.method, CalculationMethod::Mwl);
    assert_eq!(s.madhab, Madhab::Shafi);
    assert_eq!(s.adjustments, Adjustments::default());
    assert!(s.notifications_enabled);
}

#[test]
fn test_partial_document_merges_defaults() {
    let s = PrayerSettings::from_json(r#"{"madhab":"Hanafi","adjustments":{"isha":4}}"#).unwrap();
    assert_eq!(s.method, CalculationMethod::Mwl);
    assert_eq!(s.madhab, Madhab::Hanafi);
    assert_eq!(
        s.adjustments,
        Adjustments {
            isha: 4,
            ..Adjustments::default()
        }
    );
    assert!(s.notifications_enabled);
}

#[test]
fn test_empty_document() {
    assert_eq!(PrayerSettings::from_json("{}").unwrap(), PrayerSettings::default());
}

#[test]
fn test_unknown_method_falls_back_to_mwl() {
    let s = PrayerSettings::from_json(r#"{"method":"Tehran"}"#).unwrap();
    assert_eq!(s.method, CalculationMethod::Mwl);
    assert_eq!("nonsense".parse::<CalculationMethod>().unwrap(), CalculationMethod::Mwl);
}

#[test]
fn test_madhab_is_case_insensitive_and_lenient() {
    let s = PrayerSettings::from_json(r#"{"madhab":"hanafi","adjustments":{"fajr":5}}"#).unwrap();
    assert_eq!(s.madhab, Madhab::Hanafi);
    assert_eq!(s.adjustments.fajr, 5);

    let s = PrayerSettings::from_json(r#"{"method":"Egypt","madhab":"Maliki"}"#).unwrap();
    assert_eq!(s.madhab, Madhab::Shafi);
    assert_eq!(s.method, CalculationMethod::Egypt);

    for madhab in Madhab::ALL {
        assert_eq!(Madhab::from_name(&madhab.name().to_uppercase()), Some(madhab));
    }
}

#[test]
fn test_null_fields_take_defaults() {
    let s = PrayerSettings::from_json(r#"{"adjustments":{"fajr":null,"isha":3}}"#).unwrap();
    assert_eq!(s.adjustments.fajr, 0);
    assert_eq!(s.adjustments.isha, 3);

    let s = PrayerSettings::from_json(
        r#"{"method":null,"madhab":null,"adjustments":null,"notificationsEnabled":null}"#,
    )
    .unwrap();
    assert_eq!(s, PrayerSettings::default());
}

#[test]
fn test_method_names_are_case_insensitive() {
    for method in CalculationMethod::ALL {
        assert_eq!(CalculationMethod::from_name(&method.name().to_lowercase()), Some(method));
    }
    let s = PrayerSettings::from_json(r#"{"method":"isna","notificationsEnabled":false}"#).unwrap();
    assert_eq!(s.method, CalculationMethod::Isna);
    assert!(!s.notifications_enabled);
}

#[test]
fn test_adjustments_clamped() {
    let s = PrayerSettings::from_json(r#"{"adjustments":{"fajr":90,"asr":-75,"dhuhr":12}}"#).unwrap();
    assert_eq!(s.adjustments.fajr, 60);
    assert_eq!(s.adjustments.asr, -60);
    assert_eq!(s.adjustments.dhuhr, 12);
}

#[test]
fn test_settings_roundtrip_uses_method_names() {
    let s = PrayerSettings {
        method: CalculationMethod::UmmAlQura,
        madhab: Madhab::Hanafi,
        adjustments: Adjustments {
            fajr: 2,
            ..Adjustments::default()
        },
        notifications_enabled: false,
    };
    let json = s.to_json().unwrap();
    assert!(json.contains(r#""method":"UmmAlQura""#), "{json}");
    assert!(json.contains(r#""notificationsEnabled":false"#), "{json}");
    assert_eq!(PrayerSettings::from_json(&json).unwrap(), s);
}

#[test]
fn test_city_short_keys() {
    let city = City::from_json(r#"{"lat":25.2048,"lon":55.2708,"tz":"Asia/Dubai","source":"gps"}"#).unwrap();
    assert_eq!(city.coordinates.latitude, 25.2048);
    assert_eq!(city.coordinates.longitude, 55.2708);
    assert_eq!(city.timezone.as_deref(), Some("Asia/Dubai"));
    assert_eq!(city.source, CitySource::Gps);
    assert_eq!(city.name, None);
}

#[test]
fn test_city_full_keys_and_defaults() {
    let city = City::from_json(r#"{"name":"Cairo","latitude":30.0444,"longitude":31.2357}"#).unwrap();
    assert_eq!(city.name.as_deref(), Some("Cairo"));
    assert_eq!(city.timezone, None);
    assert_eq!(city.source, CitySource::Manual);
}

#[test]
fn test_settings_from_missing_path() {
    let err = PrayerSettings::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, mawaqit::Error::Io(_)));
}

#[test]
fn test_settings_from_path() {
    let path = std::env::temp_dir().join(format!("mawaqit-settings-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"method":"Karachi"}"#).unwrap();
    let s = PrayerSettings::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(s.method, CalculationMethod::Karachi);
}
