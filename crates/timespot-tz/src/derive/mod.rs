//! Current-time derivation for a timezone id.
//!
//! ## Summary
//! The wall-clock digits come from the zone database. Offset, abbreviation
//! and country come from [`FallbackTables`]. When the zone database rejects an
//! id, a decimal-hour offset table is tried before giving up.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono_tz::Tz;
use timespot_core::constants::LOADING_COUNTRY;

use crate::error::{TzError, TzResult};
use crate::format::{city_from_timezone, format_offset_minutes};
use crate::snapshot::TimeSnapshot;
use crate::tables::FallbackTables;
use crate::time::{Clock, Instant, LocalNaive, SystemClock};

/// Days either side of the reference date before a staleness warning.
const STALENESS_TOLERANCE_DAYS: i64 = 45;

const DEFAULT_OFFSET: &str = "+00:00";
const DEFAULT_ABBREVIATION: &str = "UTC";
const UNKNOWN_COUNTRY: &str = "Unknown";

/// Derives [`TimeSnapshot`]s from the clock and the fallback tables.
///
/// Construct once and share by reference; it holds no per-call state apart
/// from the one-shot staleness warning.
pub struct TimeDerivationService {
    tables: &'static FallbackTables,
    clock: Arc<dyn Clock>,
    staleness_reported: AtomicBool,
}

impl TimeDerivationService {
    #[must_use]
    pub fn new(tables: &'static FallbackTables, clock: Arc<dyn Clock>) -> Self {
        Self {
            tables,
            clock,
            staleness_reported: AtomicBool::new(false),
        }
    }

    /// Reference tables with the system clock.
    #[must_use]
    pub fn with_system_clock() -> Self {
        Self::new(FallbackTables::reference(), Arc::new(SystemClock))
    }

    #[must_use]
    pub fn tables(&self) -> &'static FallbackTables {
        self.tables
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// ## Summary
    /// Builds a snapshot of the current time in `timezone`.
    ///
    /// `preserve_country` wins over the table lookup unless it is empty or the
    /// `"Loading..."` placeholder. The returned `timezone` is always the input,
    /// even if an alias was used internally.
    ///
    /// Returns `None` when neither the zone database nor the decimal offset
    /// table knows the id. Callers should show the city as unavailable.
    #[must_use]
    pub fn derive_current_snapshot(
        &self,
        timezone: &str,
        preserve_country: Option<&str>,
    ) -> Option<TimeSnapshot> {
        let now = self.clock.now();
        self.warn_if_stale(now);

        match self.from_zone_database(timezone, preserve_country, now) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::error!(error = %e, timezone = %timezone, "Error generating real-time data");
                self.from_decimal_offset(timezone, preserve_country, now)
            }
        }
    }

    fn from_zone_database(
        &self,
        timezone: &str,
        preserve_country: Option<&str>,
        now: Instant,
    ) -> TzResult<TimeSnapshot> {
        let corrected = self.tables.resolve_alias(timezone);
        let zone: Tz = corrected
            .parse()
            .map_err(|_e| TzError::UnknownTimezone(corrected.to_string()))?;

        let utc_offset = self
            .tables
            .fixed_offset(corrected)
            .or_else(|| self.tables.fixed_offset(timezone))
            .unwrap_or(DEFAULT_OFFSET);

        let country = preserved(preserve_country)
            .or_else(|| self.tables.country(corrected))
            .or_else(|| self.tables.country(timezone))
            .unwrap_or(UNKNOWN_COUNTRY);

        Ok(TimeSnapshot {
            city: city_from_timezone(timezone),
            country: country.to_string(),
            timezone: timezone.to_string(),
            local: LocalNaive::in_zone(now, zone),
            utc_offset: utc_offset.to_string(),
            utc: now,
            abbreviation: self
                .tables
                .abbreviation(corrected)
                .unwrap_or(DEFAULT_ABBREVIATION)
                .to_string(),
            is_daylight_saving: false,
        })
    }

    fn from_decimal_offset(
        &self,
        timezone: &str,
        preserve_country: Option<&str>,
        now: Instant,
    ) -> Option<TimeSnapshot> {
        let hours = self.tables.decimal_offset(timezone)?;
        tracing::info!(timezone = %timezone, hours, "Using fallback offset");

        let minutes = hours_to_minutes(hours);
        let country = preserved(preserve_country)
            .or_else(|| self.tables.country(timezone))
            .unwrap_or(UNKNOWN_COUNTRY);

        Some(TimeSnapshot {
            city: city_from_timezone(timezone),
            country: country.to_string(),
            timezone: timezone.to_string(),
            local: LocalNaive::at_offset_minutes(now, minutes),
            utc_offset: format_offset_minutes(minutes),
            utc: now,
            abbreviation: self
                .tables
                .abbreviation(timezone)
                .unwrap_or(DEFAULT_ABBREVIATION)
                .to_string(),
            is_daylight_saving: false,
        })
    }

    fn warn_if_stale(&self, now: Instant) {
        if self.staleness_reported.load(Ordering::Relaxed) {
            return;
        }
        let today = now.as_utc().date_naive();
        if self.tables.is_stale_on(today, STALENESS_TOLERANCE_DAYS)
            && !self.staleness_reported.swap(true, Ordering::Relaxed)
        {
            tracing::warn!(
                tables_version = %self.tables.version,
                as_of = %self.tables.as_of,
                today = %today,
                "Fixed offsets and abbreviations are only accurate near their reference date"
            );
        }
    }
}

fn preserved(country: Option<&str>) -> Option<&str> {
    country.filter(|value| !value.is_empty() && *value != LOADING_COUNTRY)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Table offsets are small multiples of a quarter hour"
)]
fn hours_to_minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}

#[cfg(test)]
mod tests;
