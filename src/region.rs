use crate::method::CalculationMethod;
use crate::types::Coordinates;

const COUNTRY_TABLE: &[(&str, CalculationMethod)] = &[
    ("saudi", CalculationMethod::UmmAlQura),
    ("emirates", CalculationMethod::UmmAlQura),
    ("uae", CalculationMethod::UmmAlQura),
    ("qatar", CalculationMethod::UmmAlQura),
    ("kuwait", CalculationMethod::UmmAlQura),
    ("bahrain", CalculationMethod::UmmAlQura),
    ("oman", CalculationMethod::UmmAlQura),
    ("yemen", CalculationMethod::UmmAlQura),
    ("السعودية", CalculationMethod::UmmAlQura),
    ("الإمارات", CalculationMethod::UmmAlQura),
    ("قطر", CalculationMethod::UmmAlQura),
    ("الكويت", CalculationMethod::UmmAlQura),
    ("البحرين", CalculationMethod::UmmAlQura),
    ("سلطنة عمان", CalculationMethod::UmmAlQura),
    ("اليمن", CalculationMethod::UmmAlQura),
    ("egypt", CalculationMethod::Egypt),
    ("sudan", CalculationMethod::Egypt),
    ("libya", CalculationMethod::Egypt),
    ("eritrea", CalculationMethod::Egypt),
    ("مصر", CalculationMethod::Egypt),
    ("السودان", CalculationMethod::Egypt),
    ("ليبيا", CalculationMethod::Egypt),
    ("pakistan", CalculationMethod::Karachi),
    ("india", CalculationMethod::Karachi),
    ("bangladesh", CalculationMethod::Karachi),
    ("afghanistan", CalculationMethod::Karachi),
    ("sri lanka", CalculationMethod::Karachi),
    ("nepal", CalculationMethod::Karachi),
    ("باكستان", CalculationMethod::Karachi),
    ("الهند", CalculationMethod::Karachi),
    ("united states", CalculationMethod::Isna),
    ("usa", CalculationMethod::Isna),
    ("canada", CalculationMethod::Isna),
    ("أمريكا", CalculationMethod::Isna),
    ("كندا", CalculationMethod::Isna),
];

/// `(min_lat, max_lat, min_lon, max_lon)`, checked in order.
const REGION_BOXES: &[((f64, f64, f64, f64), CalculationMethod)] = &[
    // African Red Sea coast, ahead of the Arabian boxes
    ((3.0, 18.5, 21.0, 40.0), CalculationMethod::Egypt),
    ((18.5, 22.5, 21.0, 38.5), CalculationMethod::Egypt),
    // Arabian peninsula, stepped around the Iranian shore of the Gulf
    ((12.0, 32.5, 36.0, 48.0), CalculationMethod::UmmAlQura),
    ((12.0, 28.5, 48.0, 50.4), CalculationMethod::UmmAlQura),
    ((12.0, 26.4, 50.4, 57.0), CalculationMethod::UmmAlQura),
    ((12.0, 24.5, 57.0, 60.0), CalculationMethod::UmmAlQura),
    ((3.0, 32.5, 21.0, 36.0), CalculationMethod::Egypt),
    ((5.0, 38.0, 60.0, 93.0), CalculationMethod::Karachi),
    ((15.0, 72.0, -170.0, -50.0), CalculationMethod::Isna),
];

/// Substring match that does not start or end inside a word, so "oman"
/// does not match "romania".
fn contains_word(haystack: &str, word: &str) -> bool {
    haystack.match_indices(word).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + word.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

pub fn method_for_country(country: &str) -> Option<CalculationMethod> {
    let needle = country.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    COUNTRY_TABLE
        .iter()
        .find(|(name, _)| contains_word(&needle, name))
        .map(|&(_, method)| method)
}

pub fn method_for_coordinates(coordinates: Coordinates) -> Option<CalculationMethod> {
    let Coordinates {
        latitude,
        longitude,
    } = coordinates;
    REGION_BOXES
        .iter()
        .find(|((min_lat, max_lat, min_lon, max_lon), _)| {
            (*min_lat..=*max_lat).contains(&latitude) && (*min_lon..=*max_lon).contains(&longitude)
        })
        .map(|&(_, method)| method)
}

/// Country name wins over coordinates; MWL when neither matches.
pub fn recommend_method(
    country: Option<&str>,
    coordinates: Option<Coordinates>,
) -> CalculationMethod {
    country
        .and_then(method_for_country)
        .or_else(|| coordinates.and_then(method_for_coordinates))
        .unwrap_or(CalculationMethod::Mwl)
}
