//! Seeded key/value data the local data source serves from.
//!
//! ## Summary
//! The dump is a JSON array of `{ "key": ..., "value": ... }` entries. Keys
//! are routed by prefix:
//! - `time_cache_<zone>` holds a raw time record
//! - `sun_cache_<zone>` holds a raw sun record
//! - `user_preferences_<userId>` holds stored preferences
//!
//! Entries with any other prefix, or values that do not fit the expected
//! shape, are skipped with a warning.

use std::collections::HashMap;

use serde::Deserialize;
use timespot_core::constants::{
    NOT_AVAILABLE, SUN_CACHE_PREFIX, TIME_CACHE_PREFIX, USER_PREFERENCES_PREFIX,
};
use timespot_tz::format::day_length_from_seconds;

use crate::preferences::UserPreferences;

const BUILTIN_SEED: &str = include_str!("../data/seed.json");

#[derive(Debug, Deserialize)]
struct DumpEntry {
    key: String,
    value: serde_json::Value,
}

/// A time record as stored. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TimeRecord {
    pub city: Option<String>,
    pub country: Option<String>,
    pub timezone: Option<String>,
    pub datetime: Option<String>,
    pub utc_offset: Option<String>,
    pub utc_datetime: Option<String>,
    pub abbreviation: Option<String>,
    pub dst: Option<bool>,
}

/// Stored day length: whole seconds or already formatted text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DayLength {
    Seconds(u64),
    Text(String),
}

impl DayLength {
    /// ## Summary
    /// Seconds become `HH:MM:SS`; text is kept as is. Blank text is `"N/A"`.
    #[must_use]
    pub fn normalized(&self) -> String {
        match self {
            Self::Seconds(seconds) => day_length_from_seconds(*seconds),
            Self::Text(text) if !text.trim().is_empty() => text.trim().to_string(),
            Self::Text(_) => NOT_AVAILABLE.to_string(),
        }
    }
}

/// A sun record as stored. Times are RFC 3339 strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SunRecord {
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub solar_noon: Option<String>,
    pub day_length: Option<DayLength>,
    pub civil_twilight_begin: Option<String>,
    pub civil_twilight_end: Option<String>,
    pub nautical_twilight_begin: Option<String>,
    pub nautical_twilight_end: Option<String>,
    pub astronomical_twilight_begin: Option<String>,
    pub astronomical_twilight_end: Option<String>,
}

/// Parsed dump, keyed by zone id or user id.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    time: HashMap<String, TimeRecord>,
    sun: HashMap<String, SunRecord>,
    preferences: HashMap<String, UserPreferences>,
}

impl SeedData {
    /// The dump bundled with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_SEED)
    }

    /// ## Summary
    /// Parses a dump. A document that is not an entry array yields an empty
    /// set so the caller can still run on derived data alone.
    #[must_use]
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Vec<DumpEntry>>(raw) {
            Ok(entries) => Self::from_entries(entries),
            Err(e) => {
                tracing::warn!(error = %e, "Seed dump is malformed; starting empty");
                Self::default()
            }
        }
    }

    fn from_entries(entries: Vec<DumpEntry>) -> Self {
        let mut seed = Self::default();
        for DumpEntry { key, value } in entries {
            if let Some(zone) = key.strip_prefix(TIME_CACHE_PREFIX) {
                if let Some(record) = decode(&key, value) {
                    seed.time.insert(zone.to_string(), record);
                }
            } else if let Some(zone) = key.strip_prefix(SUN_CACHE_PREFIX) {
                if let Some(record) = decode(&key, value) {
                    seed.sun.insert(zone.to_string(), record);
                }
            } else if let Some(user_id) = key.strip_prefix(USER_PREFERENCES_PREFIX) {
                if let Some(prefs) = decode(&key, value) {
                    seed.preferences.insert(user_id.to_string(), prefs);
                }
            } else {
                tracing::debug!(key = %key, "Ignoring unrecognised seed entry");
            }
        }

        tracing::debug!(
            time = seed.time.len(),
            sun = seed.sun.len(),
            preferences = seed.preferences.len(),
            "Loaded seed data"
        );
        seed
    }

    #[must_use]
    pub fn time_record(&self, timezone: &str) -> Option<&TimeRecord> {
        self.time.get(timezone)
    }

    #[must_use]
    pub fn sun_record(&self, timezone: &str) -> Option<&SunRecord> {
        self.sun.get(timezone)
    }

    #[must_use]
    pub fn preferences(&self, user_id: &str) -> Option<&UserPreferences> {
        self.preferences.get(user_id)
    }
}

fn decode<T: serde::de::DeserializeOwned>(key: &str, value: serde_json::Value) -> Option<T> {
    serde_json::from_value(value)
        .inspect_err(|e| tracing::warn!(key = %key, error = %e, "Skipping malformed seed entry"))
        .ok()
}
