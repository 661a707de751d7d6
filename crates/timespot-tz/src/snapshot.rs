use serde::{Deserialize, Serialize};
use timespot_core::constants::NOT_AVAILABLE;

use crate::time::{Instant, LocalNaive};

/// One city's time at the moment it was derived.
///
/// Built fresh on every derivation and replaced wholesale by the next one.
/// `timezone` is always the id the caller asked for, even when an alias was
/// used for the lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSnapshot {
    pub city: String,
    pub country: String,
    pub timezone: String,
    #[serde(rename = "datetime")]
    pub local: LocalNaive,
    pub utc_offset: String,
    #[serde(rename = "utc_datetime")]
    pub utc: Instant,
    pub abbreviation: String,
    #[serde(rename = "dst")]
    pub is_daylight_saving: bool,
}

/// Sunrise, sunset and twilight times formatted as local `HH:MM`.
///
/// Every field holds `"N/A"` when the source had no usable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunSnapshot {
    pub sunrise: String,
    pub sunset: String,
    pub solar_noon: String,
    pub day_length: String,
    pub civil_twilight_begin: String,
    pub civil_twilight_end: String,
    pub nautical_twilight_begin: String,
    pub nautical_twilight_end: String,
    pub astronomical_twilight_begin: String,
    pub astronomical_twilight_end: String,
}

impl SunSnapshot {
    /// ## Summary
    /// Whether any of sunrise, sunset or day length carries a real value.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        [&self.sunrise, &self.sunset, &self.day_length]
            .iter()
            .any(|field| field.as_str() != NOT_AVAILABLE)
    }
}

impl Default for SunSnapshot {
    fn default() -> Self {
        let na = || NOT_AVAILABLE.to_string();
        Self {
            sunrise: na(),
            sunset: na(),
            solar_noon: na(),
            day_length: na(),
            civil_twilight_begin: na(),
            civil_twilight_end: na(),
            nautical_twilight_begin: na(),
            nautical_twilight_end: na(),
            astronomical_twilight_begin: na(),
            astronomical_twilight_end: na(),
        }
    }
}
