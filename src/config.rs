use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::method::{CalculationMethod, CalculationParameters, Madhab};
use crate::types::{Coordinates, Prayer};

pub const MAX_ADJUSTMENT_MINUTES: i32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitySource {
    Gps,
    #[default]
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub coordinates: Coordinates,
    /// IANA zone name, e.g. `Asia/Dubai`.
    #[serde(default, alias = "tz", skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default)]
    pub source: CitySource,
}

impl City {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            name: None,
            coordinates: Coordinates::new(latitude, longitude),
            timezone: None,
            source: CitySource::Manual,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn with_source(mut self, source: CitySource) -> Self {
        self.source = source;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A stored `null` reads as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Per-prayer offsets in minutes. Sunrise is not adjustable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustments {
    #[serde(deserialize_with = "null_as_default")]
    pub fajr: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub dhuhr: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub asr: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub maghrib: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub isha: i32,
}

impl Adjustments {
    pub fn minutes(&self, prayer: Prayer) -> i32 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => 0,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    pub fn clamped(self) -> Self {
        let clamp = |v: i32| v.clamp(-MAX_ADJUSTMENT_MINUTES, MAX_ADJUSTMENT_MINUTES);
        let out = Self {
            fajr: clamp(self.fajr),
            dhuhr: clamp(self.dhuhr),
            asr: clamp(self.asr),
            maghrib: clamp(self.maghrib),
            isha: clamp(self.isha),
        };
        if out != self {
            tracing::warn!(
                original = ?self,
                "prayer adjustments out of range, clamped to ±{MAX_ADJUSTMENT_MINUTES} min"
            );
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrayerSettings {
    #[serde(deserialize_with = "null_as_default")]
    pub method: CalculationMethod,
    #[serde(deserialize_with = "null_as_default")]
    pub madhab: Madhab,
    #[serde(deserialize_with = "null_as_default")]
    pub adjustments: Adjustments,
    #[serde(deserialize_with = "deserialize_notifications")]
    pub notifications_enabled: bool,
}

fn deserialize_notifications<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

impl Default for PrayerSettings {
    fn default() -> Self {
        Self {
            method: CalculationMethod::Mwl,
            madhab: Madhab::Shafi,
            adjustments: Adjustments::default(),
            notifications_enabled: true,
        }
    }
}

impl PrayerSettings {
    /// Parses a stored settings document, filling gaps from the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.normalized())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading prayer settings");
        Self::from_json(&raw)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn normalized(self) -> Self {
        Self {
            adjustments: self.adjustments.clamped(),
            ..self
        }
    }

    pub fn parameters(&self) -> CalculationParameters {
        CalculationParameters::new(self.method, self.madhab, self.adjustments)
    }
}
