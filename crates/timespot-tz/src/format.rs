//! Display formatting helpers. All pure.

use chrono_tz::Tz;
use timespot_core::constants::NOT_AVAILABLE;
use timespot_core::types::TimeFormat;

use crate::error::{TzError, TzResult};
use crate::tables::FallbackTables;
use crate::time::{Instant, LocalNaive};

/// Morning or afternoon marker for 12-hour clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        if hour < 12 { Self::Am } else { Self::Pm }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clock digits plus, for 12-hour clocks, the separate period marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTime {
    pub time: String,
    pub period: Option<Period>,
}

impl std::fmt::Display for FormattedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.period {
            Some(period) => write!(f, "{} {period}", self.time),
            None => f.write_str(&self.time),
        }
    }
}

fn format_clock(local: &LocalNaive, format: TimeFormat, with_seconds: bool) -> FormattedTime {
    let fields = local.fields();
    match (format, with_seconds) {
        (TimeFormat::Hours12, true) => FormattedTime {
            time: fields.format("%I:%M:%S").to_string(),
            period: Some(Period::from_hour(local.hour())),
        },
        (TimeFormat::Hours12, false) => FormattedTime {
            time: fields.format("%I:%M").to_string(),
            period: Some(Period::from_hour(local.hour())),
        },
        (TimeFormat::Hours24, true) => FormattedTime {
            time: fields.format("%H:%M:%S").to_string(),
            period: None,
        },
        (TimeFormat::Hours24, false) => FormattedTime {
            time: fields.format("%H:%M").to_string(),
            period: None,
        },
    }
}

/// ## Summary
/// `hh:mm:ss` with a period for 12h, `HH:mm:ss` without one for 24h.
#[must_use]
pub fn format_clock_string(local: &LocalNaive, format: TimeFormat) -> FormattedTime {
    format_clock(local, format, true)
}

/// ## Summary
/// Same as [`format_clock_string`] without seconds.
#[must_use]
pub fn format_short_clock_string(local: &LocalNaive, format: TimeFormat) -> FormattedTime {
    format_clock(local, format, false)
}

/// Single-string clock, e.g. `"03:05:09 PM"` or `"15:05:09"`.
#[must_use]
pub fn format_time_string(local: &LocalNaive, format: TimeFormat) -> String {
    format_clock_string(local, format).to_string()
}

/// ## Summary
/// Normalizes a raw offset into `UTC±HH:MM`.
///
/// Values already starting with `UTC` are returned as they are. Otherwise a
/// `+` is added when the sign is missing and `:00` when there are no minutes.
///
/// Examples:
/// - `"+2"` -> `"UTC+2:00"`
/// - `"-05:00"` -> `"UTC-05:00"`
/// - `"UTC+01:00"` -> `"UTC+01:00"`
#[must_use]
pub fn format_utc_offset_label(offset: &str) -> String {
    let clean = offset.trim();
    if clean.is_empty() {
        return "UTC+00:00".to_string();
    }
    if clean.starts_with("UTC") {
        return clean.to_string();
    }

    let mut signed = if clean.starts_with('+') || clean.starts_with('-') {
        clean.to_string()
    } else {
        format!("+{clean}")
    };
    if !signed.contains(':') {
        signed.push_str(":00");
    }
    format!("UTC{signed}")
}

/// ## Summary
/// Fixed-table offset of a zone as a `UTC±HH:MM` label.
#[must_use]
pub fn timezone_offset_label(tables: &FallbackTables, timezone: &str) -> String {
    format_utc_offset_label(tables.fixed_offset(timezone).unwrap_or("+00:00"))
}

/// Local hour in `[6, 18)` counts as day. Not based on real sunrise.
#[must_use]
pub fn is_daytime(local: &LocalNaive) -> bool {
    (6..18).contains(&local.hour())
}

/// ## Summary
/// Turns `HH:MM[:SS]` into `"{h}h {mm}m"`.
///
/// Missing or blank input yields `"N/A"`; anything that does not parse is
/// returned trimmed but otherwise unchanged.
#[must_use]
pub fn format_day_length(raw: Option<&str>) -> String {
    let Some(trimmed) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };

    let mut parts = trimmed.split(':');
    let parsed = match (parts.next(), parts.next()) {
        (Some(hours), Some(minutes)) => hours.parse::<u32>().ok().zip(minutes.parse::<u32>().ok()),
        _ => None,
    };

    match parsed {
        Some((hours, minutes)) => format!("{hours}h {minutes:02}m"),
        None => trimmed.to_string(),
    }
}

/// Seconds to `HH:MM:SS`.
#[must_use]
pub fn day_length_from_seconds(total: u64) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Long date such as `"Monday, Jan 15, 2024"`, or `"Loading..."`.
#[must_use]
pub fn format_long_date(local: Option<&LocalNaive>) -> String {
    local.map_or_else(
        || "Loading...".to_string(),
        |local| local.fields().format("%A, %b %-d, %Y").to_string(),
    )
}

/// ## Summary
/// Display name of a zone's city: the last segment with `_` as spaces.
///
/// Examples:
/// - `"America/New_York"` -> `"New York"`
/// - `"UTC"` -> `"UTC"`
#[must_use]
pub fn city_from_timezone(timezone: &str) -> String {
    timezone
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map_or_else(|| timezone.to_string(), |segment| segment.replace('_', " "))
}

/// Country of a zone from the table, or `"Unknown"`.
#[must_use]
pub fn country_from_timezone(tables: &FallbackTables, timezone: &str) -> String {
    tables.country(timezone).unwrap_or("Unknown").to_string()
}

/// ## Summary
/// `±HH:MM` for an offset in minutes east of UTC.
#[must_use]
pub fn format_offset_minutes(minutes: i64) -> String {
    let sign = if minutes >= 0 { '+' } else { '-' };
    let abs = minutes.unsigned_abs();
    format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
}

/// ## Summary
/// Formats `instant` as local `HH:MM` in `timezone`.
///
/// ## Errors
/// Returns `TzError::UnknownTimezone` if the zone database does not know the id.
pub fn format_zone_time(instant: Instant, timezone: &str) -> TzResult<String> {
    let zone: Tz = timezone
        .parse()
        .map_err(|_e| TzError::UnknownTimezone(timezone.to_string()))?;
    Ok(LocalNaive::in_zone(instant, zone)
        .fields()
        .format("%H:%M")
        .to_string())
}

/// ## Summary
/// Formats one raw RFC 3339 sun time for display in `timezone`.
///
/// Any failure degrades to `"N/A"` for this value only.
#[must_use]
pub fn format_sun_time(raw: Option<&str>, timezone: &str) -> String {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return NOT_AVAILABLE.to_string();
    };

    match Instant::parse_rfc3339(raw).and_then(|instant| format_zone_time(instant, timezone)) {
        Ok(formatted) => formatted,
        Err(e) => {
            tracing::error!(error = %e, timezone = %timezone, "Error formatting sun time");
            NOT_AVAILABLE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(h: u32, m: u32, s: u32) -> LocalNaive {
        LocalNaive::from_fields(
            NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(h, m, s)
                .unwrap(),
        )
    }

    #[test_log::test]
    fn test_clock_12h_splits_period() {
        let out = format_clock_string(&local(15, 5, 9), TimeFormat::Hours12);
        assert_eq!(out.time, "03:05:09");
        assert_eq!(out.period, Some(Period::Pm));
        assert_eq!(out.to_string(), "03:05:09 PM");
    }

    #[test_log::test]
    fn test_time_string_joins_period() {
        assert_eq!(format_time_string(&local(15, 5, 9), TimeFormat::Hours12), "03:05:09 PM");
        assert_eq!(format_time_string(&local(15, 5, 9), TimeFormat::Hours24), "15:05:09");
        assert_eq!(format_time_string(&local(9, 0, 0), TimeFormat::Hours12), "09:00:00 AM");
    }

    #[test_log::test]
    fn test_clock_12h_midnight_and_noon() {
        let midnight = format_clock_string(&local(0, 0, 0), TimeFormat::Hours12);
        assert_eq!(midnight.time, "12:00:00");
        assert_eq!(midnight.period, Some(Period::Am));

        let noon = format_clock_string(&local(12, 0, 0), TimeFormat::Hours12);
        assert_eq!(noon.time, "12:00:00");
        assert_eq!(noon.period, Some(Period::Pm));
    }

    #[test_log::test]
    fn test_clock_24h_has_no_period() {
        let out = format_clock_string(&local(7, 4, 3), TimeFormat::Hours24);
        assert_eq!(out.time, "07:04:03");
        assert_eq!(out.period, None);
    }

    #[test_log::test]
    fn test_short_clock() {
        assert_eq!(
            format_short_clock_string(&local(23, 59, 30), TimeFormat::Hours24).time,
            "23:59"
        );
        let short = format_short_clock_string(&local(9, 1, 0), TimeFormat::Hours12);
        assert_eq!(short.time, "09:01");
        assert_eq!(short.period.map(Period::as_str), Some("AM"));
    }

    #[test_log::test]
    fn test_offset_label_examples() {
        assert_eq!(format_utc_offset_label("+2"), "UTC+2:00");
        assert_eq!(format_utc_offset_label("+02"), "UTC+02:00");
        assert_eq!(format_utc_offset_label("2"), "UTC+2:00");
        assert_eq!(format_utc_offset_label("+02:00"), "UTC+02:00");
        assert_eq!(format_utc_offset_label("-05:00"), "UTC-05:00");
        assert_eq!(format_utc_offset_label("UTC+01:00"), "UTC+01:00");
        assert_eq!(format_utc_offset_label(""), "UTC+00:00");
    }

    #[test_log::test]
    fn test_offset_label_is_idempotent() {
        for raw in ["+2", "+02", "-3", "05:30", "+05:30", "UTC-4", "", " -10 "] {
            let once = format_utc_offset_label(raw);
            assert_eq!(format_utc_offset_label(&once), once, "{raw}");
        }
    }

    #[test_log::test]
    fn test_timezone_offset_label() {
        let tables = FallbackTables::reference();
        assert_eq!(timezone_offset_label(tables, "Asia/Kolkata"), "UTC+05:30");
        assert_eq!(timezone_offset_label(tables, "Foo/Bar"), "UTC+00:00");
    }

    #[test_log::test]
    fn test_is_daytime_boundaries() {
        for hour in 6..18 {
            assert!(is_daytime(&local(hour, 0, 0)), "{hour}");
        }
        for hour in (0..6).chain(18..24) {
            assert!(!is_daytime(&local(hour, 0, 0)), "{hour}");
        }
        assert!(is_daytime(&local(17, 59, 59)));
    }

    #[test_log::test]
    fn test_day_length() {
        assert_eq!(format_day_length(Some("10:15:00")), "10h 15m");
        assert_eq!(format_day_length(Some("08:05")), "8h 05m");
        assert_eq!(format_day_length(Some("")), "N/A");
        assert_eq!(format_day_length(Some("   ")), "N/A");
        assert_eq!(format_day_length(None), "N/A");
        assert_eq!(format_day_length(Some("long")), "long");
        assert_eq!(format_day_length(Some("a:b")), "a:b");
    }

    #[test_log::test]
    fn test_day_length_from_seconds() {
        assert_eq!(day_length_from_seconds(36_900), "10:15:00");
        assert_eq!(day_length_from_seconds(59), "00:00:59");
    }

    #[test_log::test]
    fn test_long_date() {
        assert_eq!(format_long_date(Some(&local(9, 0, 0))), "Monday, Jan 15, 2024");
        assert_eq!(format_long_date(None), "Loading...");
    }

    #[test_log::test]
    fn test_city_from_timezone() {
        assert_eq!(city_from_timezone("America/New_York"), "New York");
        assert_eq!(
            city_from_timezone("America/Argentina/Buenos_Aires"),
            "Buenos Aires"
        );
        assert_eq!(city_from_timezone("UTC"), "UTC");
    }

    #[test_log::test]
    fn test_format_offset_minutes() {
        assert_eq!(format_offset_minutes(330), "+05:30");
        assert_eq!(format_offset_minutes(-300), "-05:00");
        assert_eq!(format_offset_minutes(0), "+00:00");
    }

    #[test_log::test]
    fn test_sun_time_in_zone() {
        assert_eq!(
            format_sun_time(Some("2024-01-15T07:15:00.000000-05:00"), "America/New_York"),
            "07:15"
        );
        assert_eq!(
            format_sun_time(Some("2024-01-15T12:00:00+00:00"), "Asia/Tokyo"),
            "21:00"
        );
    }

    #[test_log::test]
    fn test_sun_time_degrades_to_placeholder() {
        assert_eq!(format_sun_time(None, "Europe/London"), "N/A");
        assert_eq!(format_sun_time(Some("not a time"), "Europe/London"), "N/A");
        assert_eq!(
            format_sun_time(Some("2024-01-15T08:00:00+00:00"), "Foo/Bar"),
            "N/A"
        );
    }
}
