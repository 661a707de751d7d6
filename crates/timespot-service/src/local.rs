//! [`TimeDataSource`] served from seeded data and the fallback tables.

use std::sync::Arc;

use async_trait::async_trait;
use timespot_core::constants::NOT_AVAILABLE;
use timespot_core::util::sanitize::{sanitize_user_input, validate_timezone};
use timespot_tz::format::{city_from_timezone, format_sun_time};
use timespot_tz::{Instant, LocalNaive, SunSnapshot, TimeDerivationService, TimeSnapshot};

use crate::error::{ServiceError, ServiceResult};
use crate::seed::{DayLength, SeedData, SunRecord, TimeRecord};
use crate::source::{CitySearchResult, TimeDataSource};

/// Queries longer than this are still served but logged.
const LONG_QUERY_WARN_LEN: usize = 100;

const DEFAULT_MAX_RESULTS: usize = 20;

/// Local data source.
///
/// Stored records win; the fallback tables fill in country names and drive
/// city search. Nothing here performs I/O, so the only failures are bad input
/// and missing records.
pub struct LocalTimeService {
    derivation: Arc<TimeDerivationService>,
    seed: Arc<SeedData>,
    max_results: usize,
}

impl LocalTimeService {
    #[must_use]
    pub fn new(derivation: Arc<TimeDerivationService>, seed: Arc<SeedData>) -> Self {
        Self {
            derivation,
            seed,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    fn snapshot_from_record(&self, timezone: &str, record: &TimeRecord) -> TimeSnapshot {
        let tables = self.derivation.tables();
        let now = self.derivation.now();

        let local = record
            .datetime
            .as_deref()
            .and_then(|raw| {
                LocalNaive::parse_wall_clock(raw)
                    .inspect_err(|e| tracing::warn!(error = %e, timezone = %timezone, "Stored datetime unreadable"))
                    .ok()
            })
            .unwrap_or_else(|| LocalNaive::from_fields(now.as_utc().naive_utc()));

        let utc = record
            .utc_datetime
            .as_deref()
            .and_then(|raw| Instant::parse_rfc3339(raw).ok())
            .unwrap_or(now);

        TimeSnapshot {
            city: record
                .city
                .clone()
                .unwrap_or_else(|| city_from_timezone(timezone)),
            country: record
                .country
                .clone()
                .or_else(|| tables.country(timezone).map(str::to_string))
                .unwrap_or_else(|| "Unknown".to_string()),
            timezone: timezone.to_string(),
            local,
            utc_offset: record
                .utc_offset
                .clone()
                .unwrap_or_else(|| "+00:00".to_string()),
            utc,
            abbreviation: record
                .abbreviation
                .clone()
                .unwrap_or_else(|| "UTC".to_string()),
            is_daylight_saving: record.dst.unwrap_or(false),
        }
    }
}

fn sun_snapshot_from_record(timezone: &str, record: &SunRecord) -> SunSnapshot {
    let format = |raw: Option<&str>| format_sun_time(raw, timezone);
    let day_length = record
        .day_length
        .as_ref()
        .map_or_else(|| NOT_AVAILABLE.to_string(), DayLength::normalized);

    SunSnapshot {
        sunrise: format(record.sunrise.as_deref()),
        sunset: format(record.sunset.as_deref()),
        solar_noon: format(record.solar_noon.as_deref()),
        day_length,
        civil_twilight_begin: format(record.civil_twilight_begin.as_deref()),
        civil_twilight_end: format(record.civil_twilight_end.as_deref()),
        nautical_twilight_begin: format(record.nautical_twilight_begin.as_deref()),
        nautical_twilight_end: format(record.nautical_twilight_end.as_deref()),
        astronomical_twilight_begin: format(record.astronomical_twilight_begin.as_deref()),
        astronomical_twilight_end: format(record.astronomical_twilight_end.as_deref()),
    }
}

#[async_trait]
impl TimeDataSource for LocalTimeService {
    #[tracing::instrument(skip(self))]
    async fn get_time_data(&self, timezone: &str) -> ServiceResult<TimeSnapshot> {
        let validated = validate_timezone(timezone)
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;

        let record = self
            .seed
            .time_record(&validated)
            .ok_or_else(|| ServiceError::NotFound(format!("time data for {validated}")))?;

        tracing::debug!(timezone = %validated, "Serving stored time data");
        Ok(self.snapshot_from_record(&validated, record))
    }

    #[tracing::instrument(skip(self))]
    async fn get_sun_data(&self, timezone: &str) -> ServiceResult<SunSnapshot> {
        let sanitized = sanitize_user_input(timezone);
        let normalized = self.derivation.tables().normalize_timezone(&sanitized);

        let record = self
            .seed
            .sun_record(normalized)
            .ok_or_else(|| ServiceError::NotFound(format!("sun data for {normalized}")))?;

        Ok(sun_snapshot_from_record(normalized, record))
    }

    #[tracing::instrument(skip(self))]
    async fn search_cities(&self, query: &str) -> ServiceResult<Vec<CitySearchResult>> {
        let sanitized = sanitize_user_input(query);
        if sanitized.len() > LONG_QUERY_WARN_LEN {
            tracing::warn!(len = sanitized.len(), "Unusually long search query");
        }
        let needle = sanitized.trim().to_lowercase();

        let results = self
            .derivation
            .tables()
            .zones()
            .map(|(timezone, country)| CitySearchResult {
                name: city_from_timezone(timezone),
                country: country.to_string(),
                timezone: timezone.to_string(),
                latitude: 0.0,
                longitude: 0.0,
            })
            .filter(|city| {
                needle.is_empty()
                    || city.name.to_lowercase().contains(&needle)
                    || city.country.to_lowercase().contains(&needle)
                    || city.timezone.to_lowercase().contains(&needle)
            })
            .take(self.max_results)
            .collect::<Vec<_>>();

        tracing::debug!(count = results.len(), "City search complete");
        Ok(results)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
