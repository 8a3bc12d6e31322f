use mawaqit::method::CalculationMethod;
use mawaqit::region::{method_for_coordinates, method_for_country, recommend_method};
use mawaqit::types::Coordinates;

#[test]
fn test_country_names() {
    let cases: &[(&str, CalculationMethod)] = &[
        ("Saudi Arabia", CalculationMethod::UmmAlQura),
        ("United Arab Emirates", CalculationMethod::UmmAlQura),
        ("Sultanate of Oman", CalculationMethod::UmmAlQura),
        ("Egypt", CalculationMethod::Egypt),
        ("Sudan", CalculationMethod::Egypt),
        ("Pakistan", CalculationMethod::Karachi),
        ("Bangladesh", CalculationMethod::Karachi),
        ("United States", CalculationMethod::Isna),
        ("CANADA", CalculationMethod::Isna),
        ("المملكة العربية السعودية", CalculationMethod::UmmAlQura),
        ("مصر", CalculationMethod::Egypt),
        ("باكستان", CalculationMethod::Karachi),
    ];
    for &(country, expected) in cases {
        assert_eq!(method_for_country(country), Some(expected), "{country}");
    }
}

#[test]
fn test_unknown_country() {
    assert_eq!(method_for_country("Romania"), None);
    assert_eq!(method_for_country("Indiana"), None);
    assert_eq!(method_for_country("   "), None);
}

#[test]
fn test_coordinates_fallback() {
    let cases: &[((f64, f64), Option<CalculationMethod>)] = &[
        ((25.2048, 55.2708), Some(CalculationMethod::UmmAlQura)),
        ((21.4225, 39.8262), Some(CalculationMethod::UmmAlQura)),
        ((30.0444, 31.2357), Some(CalculationMethod::Egypt)),
        ((24.8607, 67.0011), Some(CalculationMethod::Karachi)),
        ((40.7128, -74.0060), Some(CalculationMethod::Isna)),
        // Port Sudan, Asmara, Massawa
        ((19.6158, 37.2164), Some(CalculationMethod::Egypt)),
        ((15.3229, 38.9251), Some(CalculationMethod::Egypt)),
        ((15.6097, 39.4500), Some(CalculationMethod::Egypt)),
        // Jeddah, Sanaa, Kuwait City, Dammam, Manama, Doha, Muscat
        ((21.4858, 39.1925), Some(CalculationMethod::UmmAlQura)),
        ((15.3694, 44.1910), Some(CalculationMethod::UmmAlQura)),
        ((29.3759, 47.9774), Some(CalculationMethod::UmmAlQura)),
        ((26.4207, 50.0888), Some(CalculationMethod::UmmAlQura)),
        ((26.2285, 50.5860), Some(CalculationMethod::UmmAlQura)),
        ((25.2854, 51.5310), Some(CalculationMethod::UmmAlQura)),
        ((23.5880, 58.3829), Some(CalculationMethod::UmmAlQura)),
        // Shiraz, Bandar Abbas
        ((29.5918, 52.5837), None),
        ((27.1832, 56.2666), None),
        ((51.5074, -0.1278), None),
        ((-6.2088, 106.8456), None),
    ];
    for &((lat, lon), expected) in cases {
        assert_eq!(method_for_coordinates(Coordinates::new(lat, lon)), expected, "{lat},{lon}");
    }
}

#[test]
fn test_recommend_prefers_country() {
    let cairo = Coordinates::new(30.0444, 31.2357);
    assert_eq!(recommend_method(Some("Pakistan"), Some(cairo)), CalculationMethod::Karachi);
    assert_eq!(recommend_method(Some("Atlantis"), Some(cairo)), CalculationMethod::Egypt);
    assert_eq!(recommend_method(None, Some(cairo)), CalculationMethod::Egypt);
}

#[test]
fn test_red_sea_coasts_agree_with_country_names() {
    let port_sudan = Coordinates::new(19.6158, 37.2164);
    assert_eq!(recommend_method(None, Some(port_sudan)), CalculationMethod::Egypt);
    assert_eq!(recommend_method(Some("Sudan"), None), CalculationMethod::Egypt);
    let asmara = Coordinates::new(15.3229, 38.9251);
    assert_eq!(recommend_method(None, Some(asmara)), CalculationMethod::Egypt);
    assert_eq!(recommend_method(Some("Eritrea"), None), CalculationMethod::Egypt);
    let jeddah = Coordinates::new(21.4858, 39.1925);
    assert_eq!(recommend_method(None, Some(jeddah)), CalculationMethod::UmmAlQura);
}

#[test]
fn test_recommend_defaults_to_mwl() {
    assert_eq!(recommend_method(None, None), CalculationMethod::Mwl);
    assert_eq!(recommend_method(Some("France"), None), CalculationMethod::Mwl);
    assert_eq!(
        recommend_method(Some("Germany"), Some(Coordinates::new(52.52, 13.405))),
        CalculationMethod::Mwl
    );
}
