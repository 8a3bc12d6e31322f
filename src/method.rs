use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Adjustments;

/// Regional standard for twilight angles. Unrecognised names parse as MWL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CalculationMethod {
    #[default]
    Mwl,
    UmmAlQura,
    Egypt,
    Karachi,
    Isna,
}

impl CalculationMethod {
    pub const ALL: [CalculationMethod; 5] = [
        CalculationMethod::Mwl,
        CalculationMethod::UmmAlQura,
        CalculationMethod::Egypt,
        CalculationMethod::Karachi,
        CalculationMethod::Isna,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CalculationMethod::Mwl => "MWL",
            CalculationMethod::UmmAlQura => "UmmAlQura",
            CalculationMethod::Egypt => "Egypt",
            CalculationMethod::Karachi => "Karachi",
            CalculationMethod::Isna => "ISNA",
        }
    }

    /// Exact (case-insensitive) lookup, `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::warn!(method = name, "unknown calculation method, using MWL");
            CalculationMethod::Mwl
        })
    }

    pub fn fajr_angle(self) -> f64 {
        match self {
            CalculationMethod::Mwl => 18.0,
            CalculationMethod::UmmAlQura => 18.5,
            CalculationMethod::Egypt => 19.5,
            CalculationMethod::Karachi => 18.0,
            CalculationMethod::Isna => 15.0,
        }
    }

    pub fn isha_rule(self) -> IshaRule {
        match self {
            CalculationMethod::Mwl => IshaRule::Angle(17.0),
            CalculationMethod::UmmAlQura => IshaRule::MinutesAfterMaghrib(90),
            CalculationMethod::Egypt => IshaRule::Angle(17.5),
            CalculationMethod::Karachi => IshaRule::Angle(18.0),
            CalculationMethod::Isna => IshaRule::Angle(15.0),
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalculationMethod {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name_or_default(s))
    }
}

impl From<String> for CalculationMethod {
    fn from(s: String) -> Self {
        Self::from_name_or_default(&s)
    }
}

impl From<CalculationMethod> for String {
    fn from(m: CalculationMethod) -> Self {
        m.name().to_string()
    }
}

/// Unrecognised names parse as Shafi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Madhab {
    #[default]
    Shafi,
    Hanafi,
}

impl Madhab {
    pub const ALL: [Madhab; 2] = [Madhab::Shafi, Madhab::Hanafi];

    pub fn name(self) -> &'static str {
        match self {
            Madhab::Shafi => "Shafi",
            Madhab::Hanafi => "Hanafi",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::warn!(madhab = name, "unknown madhab, using Shafi");
            Madhab::Shafi
        })
    }

    /// Shadow length multiple that marks the start of Asr.
    pub fn shadow_factor(self) -> f64 {
        match self {
            Madhab::Shafi => 1.0,
            Madhab::Hanafi => 2.0,
        }
    }
}

impl fmt::Display for Madhab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Madhab {
    fn from(s: String) -> Self {
        Self::from_name_or_default(&s)
    }
}

impl From<Madhab> for String {
    fn from(m: Madhab) -> Self {
        m.name().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IshaRule {
    /// Sun depression below the horizon, in degrees.
    Angle(f64),
    MinutesAfterMaghrib(i64),
}

/// Everything a backend needs besides the place and the day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationParameters {
    pub method: CalculationMethod,
    pub fajr_angle: f64,
    pub isha: IshaRule,
    pub asr_shadow_factor: f64,
    pub adjustments: Adjustments,
}

impl CalculationParameters {
    pub fn new(method: CalculationMethod, madhab: Madhab, adjustments: Adjustments) -> Self {
        Self {
            method,
            fajr_angle: method.fajr_angle(),
            isha: method.isha_rule(),
            asr_shadow_factor: madhab.shadow_factor(),
            adjustments,
        }
    }
}

impl From<CalculationMethod> for CalculationParameters {
    fn from(method: CalculationMethod) -> Self {
        Self::new(method, Madhab::default(), Adjustments::default())
    }
}
