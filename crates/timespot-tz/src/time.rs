//! Time value types.
//!
//! Two representations are kept apart on purpose:
//!
//! - [`Instant`]: a true point in time, always UTC.
//! - [`LocalNaive`]: the wall-clock fields of some zone with no offset
//!   attached. It is what the display layer formats.
//!
//! Converting between them is only possible through the named functions on
//! each type, so wall-clock digits never get mixed into instant arithmetic.

use chrono::{DateTime, Duration, NaiveDateTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{TzError, TzResult};

/// A true UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    #[must_use]
    pub const fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }

    #[must_use]
    pub const fn as_utc(&self) -> DateTime<Utc> {
        self.0
    }

    /// ## Summary
    /// Parses an RFC 3339 timestamp with any offset into the instant it names.
    ///
    /// ## Errors
    /// Returns `TzError::InvalidDateTime` if the string is not RFC 3339.
    pub fn parse_rfc3339(raw: &str) -> TzResult<Self> {
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| TzError::InvalidDateTime(format!("{raw}: {e}")))
    }

    /// ISO-8601 with millisecond precision and a `Z` suffix.
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }
}

/// Wall-clock fields of a zone, without an offset.
///
/// Serialized in the legacy "as if UTC" encoding: the local digits followed by
/// `Z`. That string is only meaningful to a formatter that ignores zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalNaive(NaiveDateTime);

impl LocalNaive {
    #[must_use]
    pub const fn from_fields(fields: NaiveDateTime) -> Self {
        Self(fields)
    }

    /// ## Summary
    /// Wall clock of `zone` at `instant`, taken from the zone database.
    #[must_use]
    pub fn in_zone(instant: Instant, zone: Tz) -> Self {
        Self(instant.0.with_timezone(&zone).naive_local())
    }

    /// ## Summary
    /// Wall clock at a fixed offset from UTC, in minutes east.
    #[must_use]
    pub fn at_offset_minutes(instant: Instant, minutes: i64) -> Self {
        Self(instant.0.naive_utc() + Duration::minutes(minutes))
    }

    /// ## Summary
    /// Keeps the wall-clock digits of an RFC 3339 timestamp and drops its
    /// offset, e.g. `2024-01-15T10:30:00-05:00` -> 10:30.
    ///
    /// ## Errors
    /// Returns `TzError::InvalidDateTime` if the string is not RFC 3339.
    pub fn parse_wall_clock(raw: &str) -> TzResult<Self> {
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|dt| Self(dt.naive_local()))
            .map_err(|e| TzError::InvalidDateTime(format!("{raw}: {e}")))
    }

    #[must_use]
    pub const fn fields(&self) -> NaiveDateTime {
        self.0
    }

    #[must_use]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// ## Summary
    /// Reinterprets the wall-clock digits as a UTC instant.
    ///
    /// This does not undo the zone offset. The result is only correct for
    /// callers that format it with a zone-agnostic formatter.
    #[must_use]
    pub fn assume_utc(self) -> Instant {
        Instant(self.0.and_utc())
    }

    /// The legacy "as if UTC" string: local digits with a `Z` suffix.
    #[must_use]
    pub fn to_pseudo_utc_string(&self) -> String {
        self.assume_utc().to_iso_string()
    }
}

impl Serialize for LocalNaive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.to_pseudo_utc_string())
    }
}

impl<'de> Deserialize<'de> for LocalNaive {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_wall_clock(&raw).map_err(serde::de::Error::custom)
    }
}

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// [`Clock`] backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant(Utc::now())
    }
}

/// [`Clock`] that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(Instant);

impl FixedClock {
    #[must_use]
    pub const fn new(instant: Instant) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}
