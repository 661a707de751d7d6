//! Frozen lookup tables.
//!
//! ## Summary
//! Offsets and abbreviations here were captured for one reference date and
//! are only accurate near it. The date travels with the tables as
//! [`FallbackTables::as_of`] so callers can tell how stale a lookup is.

mod cities;
mod countries;
mod offsets;

use chrono::NaiveDate;

/// A city entry with its resolved country, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultCity {
    pub city: &'static str,
    pub country: &'static str,
    pub timezone: &'static str,
}

/// Read-only set of timezone lookup tables valid near `as_of`.
#[derive(Debug)]
pub struct FallbackTables {
    pub version: &'static str,
    pub as_of: NaiveDate,
    pub(crate) countries: &'static [(&'static str, &'static str)],
    pub(crate) aliases: &'static [(&'static str, &'static str)],
    pub(crate) fixed_offsets: &'static [(&'static str, &'static str)],
    pub(crate) decimal_offsets: &'static [(&'static str, f64)],
    pub(crate) abbreviations: &'static [(&'static str, &'static str)],
    pub(crate) city_zones: &'static [(&'static str, &'static str)],
    pub(crate) default_cities: &'static [(&'static str, &'static str, &'static str)],
}

const REFERENCE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 7, 15) {
    Some(date) => date,
    None => panic!("invalid reference date"),
};

static REFERENCE: FallbackTables = FallbackTables {
    version: "2025-07",
    as_of: REFERENCE_DATE,
    countries: countries::COUNTRIES,
    aliases: countries::ALIASES,
    fixed_offsets: offsets::FIXED_OFFSETS,
    decimal_offsets: offsets::DECIMAL_OFFSETS,
    abbreviations: offsets::ABBREVIATIONS,
    city_zones: cities::CITY_ZONES,
    default_cities: cities::DEFAULT_CITIES,
};

fn lookup<T: Copy>(table: &[(&'static str, T)], key: &str) -> Option<T> {
    table
        .iter()
        .find_map(|(candidate, value)| (*candidate == key).then_some(*value))
}

impl FallbackTables {
    /// The built-in tables, captured in July 2025.
    #[must_use]
    pub fn reference() -> &'static Self {
        &REFERENCE
    }

    /// Country name for a zone.
    #[must_use]
    pub fn country(&self, timezone: &str) -> Option<&'static str> {
        lookup(self.countries, timezone)
    }

    /// Preferred identifier for a known-ambiguous one, if any.
    #[must_use]
    pub fn canonical_alias(&self, timezone: &str) -> Option<&'static str> {
        lookup(self.aliases, timezone)
    }

    /// ## Summary
    /// The identifier to use for lookups: the alias target, or the input.
    #[must_use]
    pub fn resolve_alias<'a>(&self, timezone: &'a str) -> &'a str {
        self.canonical_alias(timezone).unwrap_or(timezone)
    }

    /// Offset as `±HH:MM` on the reference date.
    #[must_use]
    pub fn fixed_offset(&self, timezone: &str) -> Option<&'static str> {
        lookup(self.fixed_offsets, timezone)
    }

    /// Offset in hours for ids the zone database cannot resolve.
    #[must_use]
    pub fn decimal_offset(&self, timezone: &str) -> Option<f64> {
        lookup(self.decimal_offsets, timezone)
    }

    /// Abbreviation on the reference date.
    #[must_use]
    pub fn abbreviation(&self, timezone: &str) -> Option<&'static str> {
        lookup(self.abbreviations, timezone)
    }

    /// Zone for a bare city name such as `"Tokyo"`.
    #[must_use]
    pub fn timezone_for_city(&self, city: &str) -> Option<&'static str> {
        lookup(self.city_zones, city)
    }

    /// ## Summary
    /// Accepts either a `Region/City` id or a known city name and returns the
    /// id to look up. Unknown names pass through unchanged.
    #[must_use]
    pub fn normalize_timezone<'a>(&self, input: &'a str) -> &'a str {
        if input.contains('/') {
            return input;
        }
        self.timezone_for_city(input).unwrap_or(input)
    }

    /// Every zone in the country table, in table order.
    pub fn zones(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.countries.iter().copied()
    }

    /// Cards shown before the user has picked any.
    pub fn default_cities(&self) -> impl Iterator<Item = DefaultCity> + '_ {
        self.default_cities
            .iter()
            .map(|&(city, country, timezone)| DefaultCity {
                city,
                country,
                timezone,
            })
    }

    /// ## Summary
    /// Whether `date` is further than `tolerance_days` from the reference date.
    #[must_use]
    pub fn is_stale_on(&self, date: NaiveDate, tolerance_days: i64) -> bool {
        (date - self.as_of).num_days().abs() > tolerance_days
    }
}
